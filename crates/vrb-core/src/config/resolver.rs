//! Version-descriptor resolution
//!
//! Every field of a component descriptor follows the same precedence chain:
//!
//! 1. explicit override (present in the [`OverrideSet`], even if empty)
//! 2. default decomposed from the dependency manifest
//! 3. hardcoded literal from the component spec
//!
//! Resolution stops at the first error. Nothing is returned for a catalog
//! that cannot be fully resolved.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use super::build::{
    BuildConfiguration, ComponentDefaults, ReleaseInfo, ResolvedComponent, VersionDescriptor,
    WorkboxDescriptor,
};
use super::settings::BuildSettings;
use crate::archive::{self, ArchiveLabel};
use crate::catalog::{Catalog, ComponentSpec, Decomposition, Origin};
use crate::error::Result;
use crate::manifest::{DependencyManifest, PackageDescriptor, Section};
use crate::overrides::OverrideSet;

/// Dependency whose declared version is passed through as the workbox release
const WORKBOX_DEPENDENCY: &str = "workbox-build";

/// Resolves a [`Catalog`] against a manifest and overrides
///
/// # Example
///
/// ```
/// use vrb_core::{Catalog, OverrideSet, PackageDescriptor, Resolver};
///
/// let package = PackageDescriptor::parse(r#"{
///     "version": "2.3.0",
///     "dependencies": {
///         "@oracle/oraclejet": "libs/v14.1.0-2024-03-15_10-30-00.tgz"
///     },
///     "devDependencies": {
///         "@oracle/oj-dynamic-webdriver": "libs/oj-dynamic-webdriver-14.1.2.tgz",
///         "telemetry-webdriver": "libs/24.10.1/telemetry-webdriver.tgz"
///     }
/// }"#).unwrap();
///
/// let config = Resolver::new(Catalog::builtin())
///     .resolve(&package, &OverrideSet::new())
///     .unwrap();
///
/// let jet = config.descriptor("oraclejet").unwrap();
/// assert_eq!(jet.version, "v14.1.0");
/// assert_eq!(jet.revision.as_deref(), Some("2024-03-15_10-30-00"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    catalog: Catalog,
    settings: BuildSettings,
}

impl Resolver {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            settings: BuildSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: BuildSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Build the full configuration.
    ///
    /// The package version is validated before any component is resolved.
    pub fn resolve(
        &self,
        package: &PackageDescriptor,
        overrides: &OverrideSet,
    ) -> Result<BuildConfiguration> {
        package.validated_version()?;

        let components = self.resolve_components(&package.manifest, overrides)?;
        let unused_overrides = self.unused_overrides(overrides);

        let release = ReleaseInfo {
            version: package.version.clone(),
            sprint: package.release.clone(),
            lib_name: self.settings.lib_name.clone(),
        };
        let workbox = WorkboxDescriptor {
            version: package
                .manifest
                .get(Section::DevDependencies, WORKBOX_DEPENDENCY)
                .map(str::to_string),
            cdn_path: self.settings.workbox_cdn_path.clone(),
        };

        Ok(BuildConfiguration::new(
            release,
            components,
            workbox,
            self.settings.expected_tsc_errors,
            self.settings.awaiter_global_name.clone(),
            unused_overrides,
        ))
    }

    /// Resolve every catalog component in declaration order.
    ///
    /// Components sharing a decomposition parse the manifest entry once.
    pub fn resolve_components(
        &self,
        manifest: &DependencyManifest,
        overrides: &OverrideSet,
    ) -> Result<Vec<ResolvedComponent>> {
        let mut parsed: HashMap<Decomposition, ArchiveLabel> = HashMap::new();
        let mut resolved = Vec::with_capacity(self.catalog.components().len());

        for spec in self.catalog.components() {
            let (label, revision) = match spec.source.origin() {
                Origin::Manifest(decomposition) => {
                    let archive_label = decompose_cached(&mut parsed, manifest, decomposition)?;
                    (
                        archive_label.label().to_string(),
                        archive_label.revision().map(str::to_string),
                    )
                }
                Origin::Literal(label) => (label.to_string(), None),
            };

            let defaults = ComponentDefaults {
                label,
                revision,
                cdn_path: spec.cdn_default.clone(),
            };
            let descriptor = apply_overrides(spec, &defaults, overrides);

            tracing::debug!(
                component = %spec.name,
                version = %descriptor.version,
                revision = ?descriptor.revision,
                cdn_path = %descriptor.cdn_path,
                "Resolved component"
            );

            resolved.push(ResolvedComponent {
                name: spec.name.clone(),
                title: spec.display_title().to_string(),
                defaults,
                descriptor,
            });
        }

        Ok(resolved)
    }

    fn unused_overrides(&self, overrides: &OverrideSet) -> Vec<String> {
        let known = self.catalog.override_keys();
        let unused: Vec<String> = overrides
            .keys()
            .filter(|key| !known.contains(key))
            .map(str::to_string)
            .collect();

        for key in &unused {
            tracing::warn!(key = %key, "Override is not used by any component");
        }
        unused
    }
}

fn decompose_cached<'a>(
    parsed: &'a mut HashMap<Decomposition, ArchiveLabel>,
    manifest: &DependencyManifest,
    decomposition: Decomposition,
) -> Result<&'a ArchiveLabel> {
    match parsed.entry(decomposition) {
        Entry::Occupied(entry) => Ok(entry.into_mut()),
        Entry::Vacant(entry) => {
            let key = entry.key();
            let reference = manifest.require(key.section, &key.dependency)?;
            tracing::debug!(
                dependency = %key.dependency,
                section = %key.section,
                reference,
                "Decomposing archive reference"
            );
            let label = archive::decompose(reference, key.segment, &key.grammar)?;
            Ok(entry.insert(label))
        }
    }
}

fn apply_overrides(
    spec: &ComponentSpec,
    defaults: &ComponentDefaults,
    overrides: &OverrideSet,
) -> VersionDescriptor {
    let revision = match &spec.revision_key {
        Some(key) => lookup(overrides, key)
            .or(defaults.revision.as_deref())
            .map(str::to_string),
        None => defaults.revision.clone(),
    };

    VersionDescriptor {
        version: lookup(overrides, &spec.label_key)
            .unwrap_or(defaults.label.as_str())
            .to_string(),
        revision,
        cdn_path: lookup(overrides, &spec.cdn_key)
            .unwrap_or(defaults.cdn_path.as_str())
            .to_string(),
    }
}

/// Presence-based lookup: an empty override still wins over the default
fn lookup<'a>(overrides: &'a OverrideSet, key: &str) -> Option<&'a str> {
    let value = overrides.get(key);
    if let Some(value) = value {
        tracing::debug!(key, value, "Applying override");
    }
    value
}
