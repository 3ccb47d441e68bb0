//! Loading a build configuration from a project directory
//!
//! Reads `package.json` and the optional `vrb.toml`, layers the override
//! sources and runs the [`Resolver`].

use std::path::{Path, PathBuf};

use super::build::BuildConfiguration;
use super::file::{BuildConfigFile, CONFIG_FILENAME};
use super::resolver::Resolver;
use crate::error::Result;
use crate::manifest::PackageDescriptor;
use crate::overrides::OverrideSet;

/// Default filename of the package descriptor
pub const MANIFEST_FILENAME: &str = "package.json";

/// Locates the inputs of one resolution and runs it
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    manifest_path: PathBuf,
    config_path: PathBuf,
    /// An explicitly given config path must exist
    config_required: bool,
    read_env: bool,
}

impl ConfigLoader {
    /// Loader for `package.json` and `vrb.toml` inside `root`
    pub fn new(root: &Path) -> Self {
        Self {
            manifest_path: root.join(MANIFEST_FILENAME),
            config_path: root.join(CONFIG_FILENAME),
            config_required: false,
            read_env: true,
        }
    }

    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    /// Use a specific build config file; it is an error if it does not exist
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = path.into();
        self.config_required = true;
        self
    }

    /// Skip the `VRB_*` environment override layer
    pub fn without_env(mut self) -> Self {
        self.read_env = false;
        self
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Resolve the build configuration.
    ///
    /// `cli_overrides` is the highest-precedence override layer.
    pub fn load(&self, cli_overrides: &OverrideSet) -> Result<BuildConfiguration> {
        let package = PackageDescriptor::load(&self.manifest_path)?;

        let file = if self.config_required {
            BuildConfigFile::load(&self.config_path)?
        } else {
            BuildConfigFile::load_or_default(&self.config_path)?
        };
        let catalog = file.catalog()?;

        let mut overrides = file.overrides.clone();
        if self.read_env {
            overrides.merge(&OverrideSet::from_env(&catalog.override_keys()));
        }
        overrides.merge(cli_overrides);
        tracing::debug!(count = overrides.len(), "Collected overrides");

        Resolver::new(catalog)
            .with_settings(file.settings)
            .resolve(&package, &overrides)
    }
}
