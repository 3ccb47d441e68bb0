//! Archive-name decomposition.
//!
//! Dependency archives encode their version metadata positionally in the
//! filename (or in the name of the folder that holds them). This module turns
//! such an archive reference into a structured [`ArchiveLabel`].
//!
//! # Grammars
//!
//! **Dated** (`<label>-<revision>`):
//!
//! ```text
//! label    := <version>[-<release>]       one or more dash-separated segments
//! revision := <date>_<time>               exactly five dash-separated segments
//! date     := <yyyy>-<mm>-<dd>
//! time     := <hh>-<mm>-<ss>
//! ```
//!
//! The date/time stamp contains four dashes, so the trailing five segments of
//! the dash-split name are the revision and everything before them is the label.
//!
//! **Suffixed** (`...<prefix><version>`): a fixed literal prefix such as
//! `webdriver-`; everything after its first occurrence is the version.
//!
//! **Verbatim**: the selected path segment is the version as-is.
//!
//! # Example
//!
//! ```
//! use vrb_core::archive::{decompose_dated, decompose_suffixed};
//!
//! let oj = decompose_dated("libs/v14.1.0-2024-03-15_10-30-00.tgz").unwrap();
//! assert_eq!(oj.label(), "v14.1.0");
//! assert_eq!(oj.revision(), Some("2024-03-15_10-30-00"));
//!
//! let dynamic = decompose_suffixed("oj-dynamic-webdriver-9.9.9.tgz", "webdriver-").unwrap();
//! assert_eq!(dynamic.label(), "9.9.9");
//! ```

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Number of dash-separated segments in a `<date>_<time>` revision.
const REVISION_SEGMENTS: usize = 5;

/// Extensions stripped from the final path segment, longest first.
///
/// Only known archive extensions are removed: versions such as `9.9.9`
/// contain dots, so a generic "strip after last dot" would truncate them.
const ARCHIVE_EXTENSIONS: &[&str] = &[".tar.gz", ".tgz"];

static REVISION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}_\d{2}-\d{2}-\d{2}$").unwrap());

/// The filename grammar used to decompose an archive reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Grammar {
    /// `<label>-<yyyy>-<mm>-<dd>_<hh>-<mm>-<ss>`
    Dated,
    /// `...<prefix><version>`
    Suffixed { prefix: String },
    /// The whole path segment is the version
    Verbatim,
}

impl Grammar {
    /// Decompose an already-selected path segment according to this grammar.
    pub fn decompose(&self, segment: &str) -> Result<ArchiveLabel> {
        match self {
            Self::Dated => decompose_dated_segment(segment),
            Self::Suffixed { prefix } => decompose_suffixed_segment(segment, prefix),
            Self::Verbatim => {
                if segment.is_empty() {
                    return Err(Error::parse(segment, self.clone()));
                }
                Ok(ArchiveLabel::Versioned {
                    version: segment.to_string(),
                })
            }
        }
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dated => f.write_str("<label>-<yyyy>-<mm>-<dd>_<hh>-<mm>-<ss>"),
            Self::Suffixed { prefix } => write!(f, "...{prefix}<version>"),
            Self::Verbatim => f.write_str("a non-empty path segment"),
        }
    }
}

/// Which path segment of an archive reference carries the version metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    /// Final path segment with its archive extension stripped
    #[default]
    File,
    /// Name of the directory containing the archive
    Folder,
}

impl Segment {
    /// Select this segment from `reference`.
    ///
    /// Both `/` and `\` are accepted as separators. `grammar` is only used to
    /// describe the failure when the segment does not exist.
    pub fn select<'a>(&self, reference: &'a str, grammar: &Grammar) -> Result<&'a str> {
        let mut parts = reference.rsplit(|c: char| c == '/' || c == '\\');
        let file = parts.next().unwrap_or_default();

        let selected = match self {
            Self::File => strip_archive_extension(file),
            // A trailing separator leaves no archive to take the folder of
            Self::Folder if file.is_empty() => "",
            Self::Folder => parts.next().unwrap_or_default(),
        };

        if selected.is_empty() {
            return Err(Error::parse(reference, grammar.clone()));
        }
        Ok(selected)
    }
}

/// Parsed version metadata of one archive reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveLabel {
    /// Result of the dated grammar
    Dated { label: String, revision: String },
    /// Result of the suffixed or verbatim grammar
    Versioned { version: String },
}

impl ArchiveLabel {
    /// The label (dated) or version (suffixed/verbatim) portion.
    pub fn label(&self) -> &str {
        match self {
            Self::Dated { label, .. } => label,
            Self::Versioned { version } => version,
        }
    }

    /// The date-time revision, when the grammar carries one.
    pub fn revision(&self) -> Option<&str> {
        match self {
            Self::Dated { revision, .. } => Some(revision),
            Self::Versioned { .. } => None,
        }
    }
}

/// Decompose `reference` by selecting `segment` and applying `grammar`.
///
/// Parse failures report the full reference, not just the selected segment.
pub fn decompose(reference: &str, segment: Segment, grammar: &Grammar) -> Result<ArchiveLabel> {
    let selected = segment.select(reference, grammar)?;
    grammar.decompose(selected).map_err(|err| match err {
        Error::Parse { grammar, .. } => Error::parse(reference, grammar),
        other => other,
    })
}

/// Decompose the final path segment of `reference` with the dated grammar.
pub fn decompose_dated(reference: &str) -> Result<ArchiveLabel> {
    decompose(reference, Segment::File, &Grammar::Dated)
}

/// Decompose the final path segment of `reference` with the suffixed grammar.
pub fn decompose_suffixed(reference: &str, prefix: &str) -> Result<ArchiveLabel> {
    let grammar = Grammar::Suffixed {
        prefix: prefix.to_string(),
    };
    decompose(reference, Segment::File, &grammar)
}

/// Use the name of the folder containing the archive as its version.
pub fn decompose_folder(reference: &str) -> Result<ArchiveLabel> {
    decompose(reference, Segment::Folder, &Grammar::Verbatim)
}

fn strip_archive_extension(file: &str) -> &str {
    ARCHIVE_EXTENSIONS
        .iter()
        .find_map(|ext| file.strip_suffix(ext))
        .unwrap_or(file)
}

fn decompose_dated_segment(segment: &str) -> Result<ArchiveLabel> {
    let segments: Vec<&str> = segment.split('-').collect();
    tracing::trace!(segment, count = segments.len(), "Decomposing dated archive name");

    // The label needs at least one segment of its own in front of the stamp
    if segments.len() <= REVISION_SEGMENTS {
        return Err(Error::parse(segment, Grammar::Dated));
    }

    let split = segments.len() - REVISION_SEGMENTS;
    let label = segments[..split].join("-");
    let revision = segments[split..].join("-");

    if label.is_empty() || !REVISION_PATTERN.is_match(&revision) {
        return Err(Error::parse(segment, Grammar::Dated));
    }

    Ok(ArchiveLabel::Dated { label, revision })
}

fn decompose_suffixed_segment(segment: &str, prefix: &str) -> Result<ArchiveLabel> {
    let grammar = || Grammar::Suffixed {
        prefix: prefix.to_string(),
    };

    let version = segment
        .find(prefix)
        .map(|start| &segment[start + prefix.len()..])
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::parse(segment, grammar()))?;

    tracing::trace!(segment, prefix, version, "Decomposed suffixed archive name");
    Ok(ArchiveLabel::Versioned {
        version: version.to_string(),
    })
}
