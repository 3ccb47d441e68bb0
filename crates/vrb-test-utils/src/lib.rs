//! Shared test utilities for the visual runtime build workspace.
//!
//! This crate provides standardised project fixtures so that crate test
//! suites do not each hand-roll `package.json` files. It is a dev-dependency
//! only, never published.
//!
//! # Modules
//!
//! - [`fixtures`]: sample archive references and package descriptors
//! - [`project`]: [`TestProject`](project::TestProject) temporary project builder

pub mod fixtures;
pub mod project;

pub use project::TestProject;
