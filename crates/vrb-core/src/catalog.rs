//! Tracked components and where their versions come from
//!
//! A [`ComponentSpec`] names one component of the build, the source of its
//! default label, and the override keys that can replace each field. The
//! [`Catalog`] is the ordered list of specs resolved into a build
//! configuration.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::archive::{Grammar, Segment};
use crate::error::{Error, Result};
use crate::manifest::Section;

pub const OJ_CDN_DEFAULT: &str = "https://static.oracle.com/cdn/jet/";
pub const OJ_DYNAMIC_CDN_DEFAULT: &str = "https://static.oracle.com/cdn/jet/packs/oj-dynamic/";
pub const OJ_DYN_CDN_DEFAULT: &str = "https://static.oracle.com/cdn/jet/packs/oj-dyn/";
pub const TELEMETRY_CDN_DEFAULT: &str = "https://static.oracle.com/cdn/trace/";
pub const BOSS_CDN_DEFAULT: &str = "https://static.oracle.com/cdn/boss/";

/// Transforms loader build pinned independently of the package manifest
pub const BOSS_LABEL_DEFAULT: &str = "2501.0.7450";

const ORACLEJET_DEPENDENCY: &str = "@oracle/oraclejet";
const OJ_DYNAMIC_DEPENDENCY: &str = "@oracle/oj-dynamic-webdriver";
const TELEMETRY_DEPENDENCY: &str = "telemetry-webdriver";
const WEBDRIVER_PREFIX: &str = "webdriver-";

/// Where a component's default label (and revision) come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "source", rename_all = "lowercase")]
pub enum VersionSource {
    /// `<label>-<date>_<time>` archive name
    Dated {
        #[serde(default)]
        section: Section,
        dependency: String,
        #[serde(default)]
        segment: Segment,
    },
    /// `...<prefix><version>` archive name
    Suffixed {
        #[serde(default)]
        section: Section,
        dependency: String,
        prefix: String,
        #[serde(default)]
        segment: Segment,
    },
    /// Name of the folder holding the archive
    Folder {
        #[serde(default)]
        section: Section,
        dependency: String,
    },
    /// A literal label with no manifest counterpart
    Fixed { label: String },
}

/// A manifest entry plus the grammar used to decompose it.
///
/// Components whose sources map to equal decompositions share one parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decomposition {
    pub section: Section,
    pub dependency: String,
    pub segment: Segment,
    pub grammar: Grammar,
}

/// How a source produces its default label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin<'a> {
    /// Decompose a manifest entry
    Manifest(Decomposition),
    /// Use a hardcoded literal
    Literal(&'a str),
}

impl VersionSource {
    /// The manifest decomposition this source needs, or `None` for fixed labels
    pub fn decomposition(&self) -> Option<Decomposition> {
        match self.origin() {
            Origin::Manifest(decomposition) => Some(decomposition),
            Origin::Literal(_) => None,
        }
    }

    pub fn origin(&self) -> Origin<'_> {
        let decomposition = match self {
            Self::Dated {
                section,
                dependency,
                segment,
            } => Decomposition {
                section: *section,
                dependency: dependency.clone(),
                segment: *segment,
                grammar: Grammar::Dated,
            },
            Self::Suffixed {
                section,
                dependency,
                prefix,
                segment,
            } => Decomposition {
                section: *section,
                dependency: dependency.clone(),
                segment: *segment,
                grammar: Grammar::Suffixed {
                    prefix: prefix.clone(),
                },
            },
            Self::Folder {
                section,
                dependency,
            } => Decomposition {
                section: *section,
                dependency: dependency.clone(),
                segment: Segment::Folder,
                grammar: Grammar::Verbatim,
            },
            Self::Fixed { label } => return Origin::Literal(label),
        };
        Origin::Manifest(decomposition)
    }
}

/// One tracked component and its precedence chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Name consumers use to look the component up
    pub name: String,

    /// Heading used in the configuration listing
    #[serde(default)]
    pub title: Option<String>,

    #[serde(flatten)]
    pub source: VersionSource,

    /// Override key replacing the label
    pub label_key: String,

    /// Override key replacing the revision
    #[serde(default)]
    pub revision_key: Option<String>,

    /// Override key replacing the CDN path
    pub cdn_key: String,

    /// CDN path used when no override is given
    pub cdn_default: String,
}

impl ComponentSpec {
    pub fn new(
        name: impl Into<String>,
        source: VersionSource,
        label_key: impl Into<String>,
        cdn_key: impl Into<String>,
        cdn_default: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: None,
            source,
            label_key: label_key.into(),
            revision_key: None,
            cdn_key: cdn_key.into(),
            cdn_default: cdn_default.into(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_revision_key(mut self, key: impl Into<String>) -> Self {
        self.revision_key = Some(key.into());
        self
    }

    /// Listing heading, falling back to the component name
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    /// Reject specs that could only ever resolve to an empty label
    fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Error::InvalidComponent {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.is_empty() {
            return Err(invalid("name is empty"));
        }
        if self.label_key.is_empty() || self.cdn_key.is_empty() {
            return Err(invalid("override keys must not be empty"));
        }
        match &self.source {
            VersionSource::Fixed { label } if label.is_empty() => {
                Err(invalid("fixed label is empty"))
            }
            VersionSource::Suffixed { prefix, .. } if prefix.is_empty() => {
                Err(invalid("suffix prefix is empty"))
            }
            _ => Ok(()),
        }
    }

    /// Every override key this component consumes
    pub fn override_keys(&self) -> impl Iterator<Item = &str> {
        [Some(self.label_key.as_str()), self.revision_key.as_deref(), Some(self.cdn_key.as_str())]
            .into_iter()
            .flatten()
    }
}

/// Ordered, duplicate-free list of component specs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    components: Vec<ComponentSpec>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate component names
    pub fn new(components: Vec<ComponentSpec>) -> Result<Self> {
        let mut seen = HashSet::new();
        for spec in &components {
            spec.validate()?;
            if !seen.insert(spec.name.as_str()) {
                return Err(Error::DuplicateComponent(spec.name.clone()));
            }
        }
        Ok(Self { components })
    }

    /// The components tracked by the visual runtime build.
    ///
    /// `ojDynamic` and `ojDyn` are two names for the same webdriver dependency;
    /// both stay exposed because consumers still reference either one.
    pub fn builtin() -> Self {
        let oj_dynamic_source = VersionSource::Suffixed {
            section: Section::DevDependencies,
            dependency: OJ_DYNAMIC_DEPENDENCY.to_string(),
            prefix: WEBDRIVER_PREFIX.to_string(),
            segment: Segment::File,
        };

        let components = vec![
            ComponentSpec::new(
                "oraclejet",
                VersionSource::Dated {
                    section: Section::Dependencies,
                    dependency: ORACLEJET_DEPENDENCY.to_string(),
                    segment: Segment::File,
                },
                "oj-label",
                "oj-cdn",
                OJ_CDN_DEFAULT,
            )
            .with_title("OJET")
            .with_revision_key("oj-revision"),
            ComponentSpec::new(
                "ojDynamic",
                oj_dynamic_source.clone(),
                "oj-dynamic-label",
                "oj-dynamic-cdn",
                OJ_DYNAMIC_CDN_DEFAULT,
            )
            .with_title("OJET Dynamic"),
            ComponentSpec::new(
                "ojDyn",
                oj_dynamic_source,
                "oj-dyn-label",
                "oj-dyn-cdn",
                OJ_DYN_CDN_DEFAULT,
            )
            .with_title("OJET Dyn"),
            ComponentSpec::new(
                "telemetry",
                VersionSource::Folder {
                    section: Section::DevDependencies,
                    dependency: TELEMETRY_DEPENDENCY.to_string(),
                },
                "telemetry-label",
                "telemetry-cdn",
                TELEMETRY_CDN_DEFAULT,
            )
            .with_title("Telemetry"),
            ComponentSpec::new(
                "boss",
                VersionSource::Fixed {
                    label: BOSS_LABEL_DEFAULT.to_string(),
                },
                "boss-label",
                "boss-cdn",
                BOSS_CDN_DEFAULT,
            )
            .with_title("BOSS"),
        ];

        Self { components }
    }

    pub fn components(&self) -> &[ComponentSpec] {
        &self.components
    }

    pub fn get(&self, name: &str) -> Option<&ComponentSpec> {
        self.components.iter().find(|spec| spec.name == name)
    }

    /// All override keys consumed by the catalog, in declaration order
    pub fn override_keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        for key in self.components.iter().flat_map(|spec| spec.override_keys()) {
            if !keys.contains(&key) {
                keys.push(key);
            }
        }
        keys
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
