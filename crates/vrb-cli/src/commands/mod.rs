//! Command implementations for vrb-cli

pub mod check;
pub mod get;
pub mod list;
pub mod show;

pub use check::run_check;
pub use get::run_get;
pub use list::run_list_params;
pub use show::run_show;
