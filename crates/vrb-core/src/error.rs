//! Error types for vrb-core

use std::path::PathBuf;

use crate::archive::Grammar;
use crate::manifest::Section;

/// Result type for vrb-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building the configuration.
///
/// Every variant is fatal at the configuration layer: resolution stops at the
/// first error and no partial [`BuildConfiguration`](crate::BuildConfiguration)
/// is ever produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The package version is not a valid semantic version
    #[error("package version is invalid: \"{version}\": {source}")]
    InvalidVersion {
        version: String,
        source: semver::Error,
    },

    /// An archive reference does not match the expected filename grammar
    #[error("cannot parse archive reference \"{raw}\": expected {grammar}")]
    Parse { raw: String, grammar: Grammar },

    /// A dependency required by a component is absent from the manifest
    #[error("missing dependency \"{name}\" in {section}")]
    MissingDependency { name: String, section: Section },

    /// Lookup of a component name that is not part of the configuration
    #[error("unknown component: {0}")]
    UnknownComponent(String),

    /// A component spec is unusable as declared
    #[error("invalid component \"{name}\": {reason}")]
    InvalidComponent { name: String, reason: String },

    /// The component catalog declares the same name twice
    #[error("duplicate component in catalog: {0}")]
    DuplicateComponent(String),

    /// A command-line override is not of the form KEY=VALUE
    #[error("invalid override \"{raw}\": expected KEY=VALUE")]
    InvalidOverride { raw: String },

    /// Package manifest not found at the expected path
    #[error("package manifest not found at {path}")]
    ManifestNotFound { path: PathBuf },

    /// Build config file not found at an explicitly requested path
    #[error("build configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON deserialization/serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

impl Error {
    pub(crate) fn parse(raw: impl Into<String>, grammar: Grammar) -> Self {
        Self::Parse {
            raw: raw.into(),
            grammar,
        }
    }
}
