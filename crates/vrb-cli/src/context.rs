//! Build context assembled from the global command-line arguments
//!
//! Resolves where the package descriptor and build config file live and
//! carries the command-line override layer to every command.

use std::path::Path;

use vrb_core::{BuildConfiguration, ConfigLoader, OverrideSet};

use crate::error::Result;

/// Inputs shared by every command
#[derive(Debug, Clone)]
pub struct BuildContext {
    loader: ConfigLoader,
    overrides: OverrideSet,
}

impl BuildContext {
    /// Create a context from the global arguments.
    ///
    /// The build config file defaults to `vrb.toml` in the directory of the
    /// manifest. Malformed `KEY=VALUE` overrides are rejected here, before
    /// anything is read from disk.
    pub fn new(manifest: &Path, config: Option<&Path>, overrides: &[String]) -> Result<Self> {
        let overrides = OverrideSet::from_pairs(overrides)?;

        let root = manifest.parent().unwrap_or_else(|| Path::new(""));
        let mut loader = ConfigLoader::new(root).with_manifest_path(manifest);
        if let Some(config) = config {
            loader = loader.with_config_path(config);
        }

        Ok(Self { loader, overrides })
    }

    /// Skip `VRB_*` environment overrides
    pub fn without_env(mut self) -> Self {
        self.loader = self.loader.without_env();
        self
    }

    pub fn loader(&self) -> &ConfigLoader {
        &self.loader
    }

    /// Resolve the build configuration
    pub fn load(&self) -> Result<BuildConfiguration> {
        tracing::debug!(
            manifest = ?self.loader().manifest_path(),
            config = ?self.loader().config_path(),
            "Resolving build configuration"
        );
        Ok(self.loader.load(&self.overrides)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_defaults_next_to_manifest() {
        let context = BuildContext::new(Path::new("/work/app/package.json"), None, &[]).unwrap();
        assert_eq!(
            context.loader().config_path(),
            PathBuf::from("/work/app/vrb.toml")
        );
    }

    #[test]
    fn test_bare_manifest_name_uses_current_directory() {
        let context = BuildContext::new(Path::new("package.json"), None, &[]).unwrap();
        assert_eq!(context.loader().config_path(), PathBuf::from("vrb.toml"));
    }

    #[test]
    fn test_malformed_override_rejected() {
        let result = BuildContext::new(
            Path::new("package.json"),
            None,
            &["oj-label".to_string()],
        );
        assert!(result.is_err());
    }
}
