//! Parsing of the optional `vrb.toml` build config file
//!
//! ```toml
//! [overrides]
//! oj-cdn = "https://mirror.example.com/jet/"
//!
//! [settings]
//! expected_tsc_errors = 900
//!
//! [[component]]
//! name = "oraclejet"
//! source = "dated"
//! dependency = "@oracle/oraclejet"
//! label_key = "oj-label"
//! revision_key = "oj-revision"
//! cdn_key = "oj-cdn"
//! cdn_default = "https://static.oracle.com/cdn/jet/"
//! ```
//!
//! When no `[[component]]` entries are present the built-in catalog is used.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::settings::BuildSettings;
use crate::catalog::{Catalog, ComponentSpec};
use crate::error::{Error, Result};
use crate::overrides::OverrideSet;

/// Default filename of the build config file
pub const CONFIG_FILENAME: &str = "vrb.toml";

/// Parsed contents of a build config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildConfigFile {
    /// Lowest-precedence override layer
    #[serde(default)]
    pub overrides: OverrideSet,

    #[serde(default)]
    pub settings: BuildSettings,

    /// Replacement component catalog
    #[serde(default, rename = "component", skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<ComponentSpec>,
}

impl BuildConfigFile {
    /// Parse a build config file from TOML content
    pub fn parse(content: &str) -> Result<Self> {
        let file: BuildConfigFile = toml::from_str(content)?;
        Ok(file)
    }

    /// Load a build config file that must exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(?path, "Loading build config");
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load a build config file if present, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.is_file() {
            Self::load(path)
        } else {
            tracing::debug!(?path, "No build config found - using defaults");
            Ok(Self::default())
        }
    }

    /// The catalog declared by this file, or the built-in one
    pub fn catalog(&self) -> Result<Catalog> {
        if self.components.is_empty() {
            Ok(Catalog::builtin())
        } else {
            Catalog::new(self.components.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::Segment;
    use crate::catalog::VersionSource;
    use crate::manifest::Section;

    #[test]
    fn test_empty_file_uses_builtin_catalog() {
        let file = BuildConfigFile::parse("").unwrap();
        assert!(file.overrides.is_empty());
        assert_eq!(file.settings, BuildSettings::default());
        assert_eq!(file.catalog().unwrap(), Catalog::builtin());
    }

    #[test]
    fn test_parse_overrides_and_settings() {
        let file = BuildConfigFile::parse(
            r#"
[overrides]
oj-label = "v15.0.0"
oj-revision = ""

[settings]
lib_name = "vb-runtime"
"#,
        )
        .unwrap();

        assert_eq!(file.overrides.get("oj-label"), Some("v15.0.0"));
        assert_eq!(file.overrides.get("oj-revision"), Some(""));
        assert_eq!(file.settings.lib_name, "vb-runtime");
        assert_eq!(file.settings.expected_tsc_errors, 1000);
    }

    #[test]
    fn test_parse_component_table() {
        let file = BuildConfigFile::parse(
            r#"
[[component]]
name = "dynamic"
title = "Dynamic UI"
source = "suffixed"
section = "devDependencies"
dependency = "@oracle/oj-dynamic-webdriver"
prefix = "webdriver-"
label_key = "dynamic-label"
cdn_key = "dynamic-cdn"
cdn_default = "https://cdn.example.com/dynamic/"

[[component]]
name = "loader"
source = "fixed"
label = "1.2.3"
label_key = "loader-label"
cdn_key = "loader-cdn"
cdn_default = "https://cdn.example.com/loader/"
"#,
        )
        .unwrap();

        let catalog = file.catalog().unwrap();
        assert_eq!(catalog.components().len(), 2);

        let dynamic = catalog.get("dynamic").unwrap();
        assert_eq!(dynamic.display_title(), "Dynamic UI");
        assert_eq!(
            dynamic.source,
            VersionSource::Suffixed {
                section: Section::DevDependencies,
                dependency: "@oracle/oj-dynamic-webdriver".to_string(),
                prefix: "webdriver-".to_string(),
                segment: Segment::File,
            }
        );

        let loader = catalog.get("loader").unwrap();
        assert_eq!(
            loader.source,
            VersionSource::Fixed {
                label: "1.2.3".to_string()
            }
        );
        assert_eq!(loader.revision_key, None);
    }

    #[test]
    fn test_unknown_source_rejected() {
        let result = BuildConfigFile::parse(
            r#"
[[component]]
name = "x"
source = "semver"
label_key = "x-label"
cdn_key = "x-cdn"
cdn_default = "https://cdn.example.com/"
"#,
        );
        assert!(matches!(result, Err(Error::TomlDe(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let err = BuildConfigFile::load(Path::new("/nonexistent/vrb.toml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
        let file = BuildConfigFile::load_or_default(Path::new("/nonexistent/vrb.toml")).unwrap();
        assert!(file.components.is_empty());
    }
}
