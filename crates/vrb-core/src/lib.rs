//! Version resolution for the visual runtime build
//!
//! Turns the project's declared dependency archives and user overrides into an
//! immutable table of component version descriptors (label, revision and CDN
//! path) that the rest of the build consumes.
//!
//! - **Archive decomposition** ([`archive`]): parses archive filenames such as
//!   `v14.1.0-2024-03-15_10-30-00.tgz` into label and revision
//! - **Catalog** ([`catalog`]): which components are tracked and where each
//!   field's default and override come from
//! - **Resolution** ([`config`]): applies override > manifest default >
//!   hardcoded fallback for every field and assembles the [`BuildConfiguration`]
//!
//! ```text
//!   package.json ──► DependencyManifest ──┐
//!   vrb.toml / env / CLI ──► OverrideSet ─┼──► Resolver ──► BuildConfiguration
//!   Catalog (built-in or vrb.toml) ───────┘
//! ```

pub mod archive;
pub mod catalog;
pub mod config;
pub mod error;
pub mod manifest;
pub mod overrides;

pub use archive::{ArchiveLabel, Grammar, Segment};
pub use catalog::{Catalog, ComponentSpec, VersionSource};
pub use config::{
    BuildConfigFile, BuildConfiguration, BuildSettings, ConfigLoader, ResolvedComponent, Resolver,
    VersionDescriptor,
};
pub use error::{Error, Result};
pub use manifest::{DependencyManifest, PackageDescriptor, Section};
pub use overrides::OverrideSet;
