//! The resolved, immutable build configuration

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Finalized version record of one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDescriptor {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    pub cdn_path: String,
}

/// Values a component would use if no override were given
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDefaults {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    pub cdn_path: String,
}

/// One component after resolution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedComponent {
    pub name: String,
    pub title: String,
    pub defaults: ComponentDefaults,
    pub descriptor: VersionDescriptor,
}

impl ResolvedComponent {
    /// Base URL of the component's assets: CDN path followed by the version
    pub fn asset_url(&self) -> String {
        format!("{}{}", self.descriptor.cdn_path, self.descriptor.version)
    }
}

/// Release identifiers taken from the package descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseInfo {
    /// Package version, validated as a semantic version
    pub version: String,
    /// Release sprint, passed through verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint: Option<String>,
    pub lib_name: String,
}

/// Workbox release used by the service worker build
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkboxDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub cdn_path: String,
}

/// Every resolved component plus the scalar settings of one build.
///
/// Constructed once by the [`Resolver`](super::Resolver) and read-only from
/// then on; share it by reference (or behind an `Arc`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfiguration {
    release: ReleaseInfo,
    components: Vec<ResolvedComponent>,
    workbox: WorkboxDescriptor,
    expected_tsc_errors: u32,
    awaiter_global_name: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    unused_overrides: Vec<String>,
}

impl BuildConfiguration {
    pub(crate) fn new(
        release: ReleaseInfo,
        components: Vec<ResolvedComponent>,
        workbox: WorkboxDescriptor,
        expected_tsc_errors: u32,
        awaiter_global_name: String,
        unused_overrides: Vec<String>,
    ) -> Self {
        Self {
            release,
            components,
            workbox,
            expected_tsc_errors,
            awaiter_global_name,
            unused_overrides,
        }
    }

    pub fn release(&self) -> &ReleaseInfo {
        &self.release
    }

    /// Resolved components in catalog order
    pub fn components(&self) -> &[ResolvedComponent] {
        &self.components
    }

    pub fn component(&self, name: &str) -> Option<&ResolvedComponent> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Like [`component`](Self::component), but an unknown name is an error
    pub fn require(&self, name: &str) -> Result<&ResolvedComponent> {
        self.component(name)
            .ok_or_else(|| Error::UnknownComponent(name.to_string()))
    }

    pub fn descriptor(&self, name: &str) -> Option<&VersionDescriptor> {
        self.component(name).map(|c| &c.descriptor)
    }

    pub fn workbox(&self) -> &WorkboxDescriptor {
        &self.workbox
    }

    pub fn expected_tsc_errors(&self) -> u32 {
        self.expected_tsc_errors
    }

    pub fn awaiter_global_name(&self) -> &str {
        &self.awaiter_global_name
    }

    /// Override keys that no component consumed
    pub fn unused_overrides(&self) -> &[String] {
        &self.unused_overrides
    }

    /// The whole configuration as pretty-printed JSON
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Human-readable dump of every component descriptor.
    ///
    /// One block per component: `"<Title> Configuration: <descriptor JSON>"`.
    pub fn listing(&self) -> Result<String> {
        let mut out = String::new();
        for component in &self.components {
            let descriptor = serde_json::to_string_pretty(&component.descriptor)?;
            out.push_str(&format!("{} Configuration: {}\n", component.title, descriptor));
        }
        Ok(out)
    }
}
