//! Package descriptor and dependency manifest
//!
//! The package descriptor is the project's `package.json`. Only the fields
//! that drive version resolution are read; everything else is ignored.

use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Dependency table of the package descriptor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    /// `dependencies`
    #[default]
    #[serde(rename = "dependencies")]
    Dependencies,
    /// `devDependencies`
    #[serde(rename = "devDependencies")]
    DevDependencies,
}

impl Section {
    /// The key of this table in `package.json`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::DevDependencies => "devDependencies",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Archive references keyed by dependency name, per section.
///
/// Read-only input to resolution; the builder-style helpers exist so callers
/// (and tests) can assemble a manifest without a `package.json` on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyManifest {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default)]
    dev_dependencies: BTreeMap<String, String>,
}

impl DependencyManifest {
    /// Create an empty manifest
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, returning the manifest for chaining
    pub fn with_entry(
        mut self,
        section: Section,
        name: impl Into<String>,
        reference: impl Into<String>,
    ) -> Self {
        self.insert(section, name, reference);
        self
    }

    /// Add or replace an entry
    pub fn insert(&mut self, section: Section, name: impl Into<String>, reference: impl Into<String>) {
        self.table_mut(section).insert(name.into(), reference.into());
    }

    /// Look up the archive reference of `name` in `section`
    pub fn get(&self, section: Section, name: &str) -> Option<&str> {
        self.table(section).get(name).map(String::as_str)
    }

    /// Like [`get`](Self::get), but a missing entry is an error
    pub fn require(&self, section: Section, name: &str) -> Result<&str> {
        self.get(section, name).ok_or_else(|| Error::MissingDependency {
            name: name.to_string(),
            section,
        })
    }

    /// Total number of entries across both sections
    pub fn len(&self) -> usize {
        self.dependencies.len() + self.dev_dependencies.len()
    }

    /// Whether both sections are empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn table(&self, section: Section) -> &BTreeMap<String, String> {
        match section {
            Section::Dependencies => &self.dependencies,
            Section::DevDependencies => &self.dev_dependencies,
        }
    }

    fn table_mut(&mut self, section: Section) -> &mut BTreeMap<String, String> {
        match section {
            Section::Dependencies => &mut self.dependencies,
            Section::DevDependencies => &mut self.dev_dependencies,
        }
    }
}

/// The subset of `package.json` used for version resolution
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackageDescriptor {
    /// Package name
    #[serde(default)]
    pub name: String,

    /// Package version; must be a valid semantic version
    #[serde(default)]
    pub version: String,

    /// Release sprint identifier, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,

    /// `dependencies` and `devDependencies`
    #[serde(flatten)]
    pub manifest: DependencyManifest,
}

impl PackageDescriptor {
    /// Parse a package descriptor from JSON content
    ///
    /// # Example
    ///
    /// ```
    /// use vrb_core::manifest::{PackageDescriptor, Section};
    ///
    /// let package = PackageDescriptor::parse(r#"{
    ///     "name": "visual-runtime",
    ///     "version": "2.3.0",
    ///     "devDependencies": { "workbox-build": "7.1.0" }
    /// }"#).unwrap();
    ///
    /// assert_eq!(package.manifest.get(Section::DevDependencies, "workbox-build"), Some("7.1.0"));
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let package: PackageDescriptor = serde_json::from_str(content)?;
        Ok(package)
    }

    /// Load a package descriptor from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ManifestNotFound {
                path: path.to_path_buf(),
            });
        }
        tracing::debug!(?path, "Loading package descriptor");
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Validate the package version as a semantic version.
    ///
    /// Surrounding whitespace and a single leading `v` are tolerated.
    pub fn validated_version(&self) -> Result<semver::Version> {
        let trimmed = self.version.trim();
        let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);

        semver::Version::parse(cleaned).map_err(|source| Error::InvalidVersion {
            version: self.version.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACKAGE_JSON: &str = r#"{
        "name": "visual-runtime",
        "version": "2.3.0",
        "release": "25.07",
        "scripts": { "build": "grunt" },
        "dependencies": {
            "@oracle/oraclejet": "https://artifacts.example.com/v17.1.0-2025-01-20_08-15-42.tgz"
        },
        "devDependencies": {
            "@oracle/oj-dynamic-webdriver": "file:vendor/oj-dynamic-webdriver-17.1.3.tgz"
        }
    }"#;

    #[test]
    fn test_parse_package_sections() {
        let package = PackageDescriptor::parse(PACKAGE_JSON).unwrap();
        assert_eq!(package.name, "visual-runtime");
        assert_eq!(package.release.as_deref(), Some("25.07"));
        assert_eq!(package.manifest.len(), 2);
        assert!(
            package
                .manifest
                .get(Section::Dependencies, "@oracle/oraclejet")
                .is_some()
        );
        // Entries are not looked up across sections
        assert!(
            package
                .manifest
                .get(Section::Dependencies, "@oracle/oj-dynamic-webdriver")
                .is_none()
        );
    }

    #[test]
    fn test_require_missing_dependency() {
        let manifest = DependencyManifest::new();
        let err = manifest
            .require(Section::DevDependencies, "telemetry-webdriver")
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MissingDependency { ref name, section: Section::DevDependencies }
                if name == "telemetry-webdriver"
        ));
        assert!(err.to_string().contains("devDependencies"));
    }

    #[test]
    fn test_validated_version() {
        let package = PackageDescriptor::parse(PACKAGE_JSON).unwrap();
        assert_eq!(package.validated_version().unwrap(), semver::Version::new(2, 3, 0));
    }

    #[test]
    fn test_validated_version_tolerates_v_prefix() {
        let package = PackageDescriptor {
            version: " v1.0.0-beta.2 ".to_string(),
            ..Default::default()
        };
        let version = package.validated_version().unwrap();
        assert_eq!(version.pre.as_str(), "beta.2");
    }

    #[test]
    fn test_validated_version_rejects_garbage() {
        for bad in [
            "not-a-version",
            "",
            "1.2",
            "1.2.3.4",
            "vv1.0.0",
            "=1.0.0",
            "==v=v1.0.0",
            "v=1.0.0",
        ] {
            let package = PackageDescriptor {
                version: bad.to_string(),
                ..Default::default()
            };
            let err = package.validated_version().unwrap_err();
            assert!(
                matches!(err, Error::InvalidVersion { ref version, .. } if version == bad),
                "expected InvalidVersion for {bad:?}"
            );
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = PackageDescriptor::load(Path::new("/nonexistent/package.json")).unwrap_err();
        assert!(matches!(err, Error::ManifestNotFound { .. }));
    }
}
