//! Build configuration assembly
//!
//! # Inputs
//!
//! - **Package descriptor** - `package.json`, for the release version and the
//!   dependency archive references
//! - **Build config file** - optional `vrb.toml` with override defaults, scalar
//!   settings and an optional replacement component catalog
//! - **Overrides** - layered from the config file, `VRB_*` environment
//!   variables and command-line pairs
//!
//! # Example
//!
//! ```ignore
//! use vrb_core::config::ConfigLoader;
//! use vrb_core::OverrideSet;
//!
//! let overrides = OverrideSet::from_pairs(["oj-cdn=https://mirror.example.com/jet/"])?;
//! let config = ConfigLoader::new(Path::new("/path/to/project")).load(&overrides)?;
//! println!("{}", config.listing()?);
//! ```

mod build;
mod file;
mod loader;
mod resolver;
mod settings;

pub use build::{
    BuildConfiguration, ComponentDefaults, ReleaseInfo, ResolvedComponent, VersionDescriptor,
    WorkboxDescriptor,
};
pub use file::{BuildConfigFile, CONFIG_FILENAME};
pub use loader::{ConfigLoader, MANIFEST_FILENAME};
pub use resolver::Resolver;
pub use settings::BuildSettings;
