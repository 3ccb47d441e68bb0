//! [`TestProject`] builder for build-configuration test scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

use crate::fixtures;

/// A temporary project directory with helpers to write the files the
/// resolver reads.
///
/// # Example
///
/// ```rust,no_run
/// use vrb_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_sample_package();
/// project.write_config("[overrides]\noj-label = \"v15.0.0\"\n");
/// assert!(project.path("package.json").exists());
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a project that already holds the sample `package.json`.
    pub fn with_sample_package() -> Self {
        let project = Self::new();
        project.write_sample_package();
        project
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `relative` inside the project.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    /// Write `package` as pretty-printed `package.json`.
    pub fn write_package(&self, package: &Value) {
        let content = serde_json::to_string_pretty(package).unwrap();
        self.write_file("package.json", &content);
    }

    /// Write [`fixtures::package_json`] as `package.json`.
    pub fn write_sample_package(&self) {
        self.write_package(&fixtures::package_json());
    }

    /// Write `vrb.toml` with the given content.
    pub fn write_config(&self, content: &str) {
        self.write_file("vrb.toml", content);
    }

    /// Write an arbitrary file, creating parent directories as needed.
    pub fn write_file(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
    }
}
