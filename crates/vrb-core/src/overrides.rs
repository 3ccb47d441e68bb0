//! User-supplied override values
//!
//! An [`OverrideSet`] maps option keys such as `oj-label` to the value the user
//! wants instead of the computed default. Presence of a key is what matters:
//! a key set to the empty string is still an override.
//!
//! Overrides are layered, later layers winning by key:
//!
//! 1. `[overrides]` table of the build config file
//! 2. `VRB_<KEY>` environment variables
//! 3. `--set KEY=VALUE` command-line pairs

use std::collections::BTreeMap;
use std::ffi::OsString;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Prefix of environment variables that carry overrides
pub const ENV_PREFIX: &str = "VRB_";

/// Override values keyed by option key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OverrideSet {
    values: BTreeMap<String, String>,
}

impl OverrideSet {
    /// Create an empty override set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an override, returning the set for chaining
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace an override
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// The override for `key`, if one is present
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether an override is present for `key`
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Merge `other` into this set; values from `other` take precedence
    pub fn merge(&mut self, other: &OverrideSet) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    /// Build a set from `KEY=VALUE` strings.
    ///
    /// # Example
    ///
    /// ```
    /// use vrb_core::OverrideSet;
    ///
    /// let overrides = OverrideSet::from_pairs(["oj-label=v15.0.0", "oj-cdn="]).unwrap();
    /// assert_eq!(overrides.get("oj-label"), Some("v15.0.0"));
    /// assert_eq!(overrides.get("oj-cdn"), Some(""));
    /// assert_eq!(overrides.get("boss-label"), None);
    /// ```
    pub fn from_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for pair in pairs {
            let (key, value) = parse_pair(pair.as_ref())?;
            set.insert(key, value);
        }
        Ok(set)
    }

    /// Collect overrides for `keys` from `(name, value)` environment pairs.
    ///
    /// Only variables named after a known key are picked up; see
    /// [`env_var_name`] for the naming scheme. Names or values that are not
    /// valid UTF-8 are skipped.
    pub fn from_env_vars<I, K, V>(vars: I, keys: &[&str]) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        let wanted: BTreeMap<String, &str> = keys.iter().map(|k| (env_var_name(k), *k)).collect();

        let mut set = Self::new();
        for (name, value) in vars {
            let Ok(name) = name.into().into_string() else {
                continue;
            };
            let Some(key) = wanted.get(&name) else {
                continue;
            };
            match value.into().into_string() {
                Ok(value) => {
                    tracing::debug!(%name, key, "Override from environment");
                    set.insert(*key, value);
                }
                Err(_) => tracing::warn!(%name, "Ignoring override that is not valid UTF-8"),
            }
        }
        set
    }

    /// [`from_env_vars`](Self::from_env_vars) over the process environment
    pub fn from_env(keys: &[&str]) -> Self {
        Self::from_env_vars(std::env::vars_os(), keys)
    }
}

/// Environment variable carrying the override for `key`:
/// `oj-dynamic-label` becomes `VRB_OJ_DYNAMIC_LABEL`.
pub fn env_var_name(key: &str) -> String {
    format!("{ENV_PREFIX}{}", key.to_uppercase().replace('-', "_"))
}

/// Split a `KEY=VALUE` pair at the first `=`.
///
/// The key is trimmed and must be non-empty; the value is kept verbatim and
/// may be empty.
fn parse_pair(raw: &str) -> Result<(String, String)> {
    let (key, value) = raw.split_once('=').ok_or_else(|| Error::InvalidOverride {
        raw: raw.to_string(),
    })?;

    let key = key.trim();
    if key.is_empty() {
        return Err(Error::InvalidOverride {
            raw: raw.to_string(),
        });
    }

    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair_splits_at_first_equals() {
        let (key, value) = parse_pair("oj-cdn=https://cdn.example.com/?a=b").unwrap();
        assert_eq!(key, "oj-cdn");
        assert_eq!(value, "https://cdn.example.com/?a=b");
    }

    #[test]
    fn test_parse_pair_rejects_malformed() {
        assert!(parse_pair("oj-label").is_err());
        assert!(parse_pair("=v1").is_err());
        assert!(parse_pair("  =v1").is_err());
    }

    #[test]
    fn test_empty_value_is_present() {
        let set = OverrideSet::from_pairs(["oj-revision="]).unwrap();
        assert!(set.contains("oj-revision"));
        assert_eq!(set.get("oj-revision"), Some(""));
    }

    #[test]
    fn test_merge_later_layer_wins() {
        let mut base = OverrideSet::new()
            .with("oj-label", "from-file")
            .with("boss-label", "2409.0.1");
        let cli = OverrideSet::new().with("oj-label", "from-cli");

        base.merge(&cli);

        assert_eq!(base.get("oj-label"), Some("from-cli"));
        assert_eq!(base.get("boss-label"), Some("2409.0.1"));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn test_env_var_name() {
        assert_eq!(env_var_name("oj-dynamic-label"), "VRB_OJ_DYNAMIC_LABEL");
    }

    #[test]
    fn test_from_env_vars_picks_known_keys_only() {
        let vars = vec![
            ("VRB_OJ_LABEL".to_string(), "v16.0.0".to_string()),
            ("VRB_UNKNOWN".to_string(), "ignored".to_string()),
            ("PATH".to_string(), "/usr/bin".to_string()),
        ];
        let set = OverrideSet::from_env_vars(vars, &["oj-label", "oj-cdn"]);

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("oj-label"), Some("v16.0.0"));
    }

    #[cfg(unix)]
    #[test]
    fn test_from_env_vars_skips_non_utf8_entries() {
        use std::os::unix::ffi::OsStringExt;

        let vars = vec![
            (OsString::from("UNRELATED_BYTES"), OsString::from_vec(vec![0xff, 0xfe])),
            (OsString::from_vec(vec![0x56, 0xff]), OsString::from("x")),
            (OsString::from("VRB_OJ_CDN"), OsString::from_vec(vec![0xff])),
            (OsString::from("VRB_OJ_LABEL"), OsString::from("v16.0.0")),
        ];
        let set = OverrideSet::from_env_vars(vars, &["oj-label", "oj-cdn"]);

        assert_eq!(set.len(), 1);
        assert_eq!(set.get("oj-label"), Some("v16.0.0"));
    }
}
