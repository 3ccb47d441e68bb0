//! Scalar build settings that do not derive from archive names

use serde::{Deserialize, Serialize};

fn default_lib_name() -> String {
    "visual-runtime".to_string()
}

fn default_expected_tsc_errors() -> u32 {
    1000
}

// The transpiler's default `__awaiter` helper collides with other embedded
// libraries that share the page's global scope.
fn default_awaiter_global_name() -> String {
    "__awaiterVbrt".to_string()
}

fn default_workbox_cdn_path() -> String {
    "https://static.oracle.com/cdn/vb/workbox/releases/".to_string()
}

/// Settings section of the build config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Library name of the runtime bundle
    #[serde(default = "default_lib_name")]
    pub lib_name: String,

    /// Informational expectation for the TypeScript error-count check
    #[serde(default = "default_expected_tsc_errors")]
    pub expected_tsc_errors: u32,

    /// Global helper name used instead of the transpiler's `__awaiter`
    #[serde(default = "default_awaiter_global_name")]
    pub awaiter_global_name: String,

    /// CDN base path for workbox releases
    #[serde(default = "default_workbox_cdn_path")]
    pub workbox_cdn_path: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            lib_name: default_lib_name(),
            expected_tsc_errors: default_expected_tsc_errors(),
            awaiter_global_name: default_awaiter_global_name(),
            workbox_cdn_path: default_workbox_cdn_path(),
        }
    }
}
