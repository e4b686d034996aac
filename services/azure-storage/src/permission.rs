//! Permission sets and their single character alphabets.
//!
//! The characters of a signed permission string must follow the order the
//! service expects, so every alphabet is a fixed ordered list that is walked
//! in sequence. The iteration order of the flags themselves never matters.

use std::collections::HashMap;

use log::warn;
use serde::Deserialize;

/// Alphabet maps permission names to their characters in canonical order.
pub type Alphabet = &'static [(&'static str, char)];

/// Account SAS permissions (`sp`).
pub const ACCOUNT_PERMISSIONS: Alphabet = &[
    ("read", 'r'),
    ("write", 'w'),
    ("delete", 'd'),
    ("list", 'l'),
    ("add", 'a'),
    ("create", 'c'),
    ("update", 'u'),
    ("process", 'p'),
];

/// Account SAS services (`ss`).
pub const ACCOUNT_SERVICES: Alphabet = &[
    ("blob", 'b'),
    ("queue", 'q'),
    ("table", 't'),
    ("file", 'f'),
];

/// Account SAS resource types (`srt`).
pub const ACCOUNT_RESOURCE_TYPES: Alphabet =
    &[("service", 's'), ("container", 'c'), ("object", 'o')];

/// Container SAS permissions (`sp`).
pub const CONTAINER_PERMISSIONS: Alphabet = &[
    ("read", 'r'),
    ("add", 'a'),
    ("create", 'c'),
    ("write", 'w'),
    ("delete", 'd'),
    ("list", 'l'),
];

/// Table SAS permissions (`sp`).
pub const TABLE_PERMISSIONS: Alphabet = &[
    ("read", 'r'),
    ("add", 'a'),
    ("update", 'u'),
    ("delete", 'd'),
];

/// PermissionSet is a set of named boolean flags.
///
/// It deserializes from a plain object such as `{"read": true, "list": false}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct PermissionSet(HashMap<String, bool>);

impl PermissionSet {
    /// Create an empty permission set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a flag, returning the updated set.
    pub fn with(mut self, name: impl Into<String>, enabled: bool) -> Self {
        self.set(name, enabled);
        self
    }

    /// Set a flag.
    pub fn set(&mut self, name: impl Into<String>, enabled: bool) {
        self.0.insert(name.into(), enabled);
    }

    /// Check whether a flag is enabled. Absent flags are disabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.0.get(name).copied().unwrap_or(false)
    }

    /// Encode the set with the given alphabet.
    ///
    /// Characters of enabled flags are concatenated in alphabet order.
    /// Names outside the alphabet are ignored. A set with nothing enabled
    /// encodes to an empty string.
    pub fn encode(&self, alphabet: Alphabet) -> String {
        for name in self.0.keys() {
            if !alphabet.iter().any(|(known, _)| known == name) {
                warn!("permission `{name}` is unknown to this alphabet, ignored");
            }
        }

        alphabet
            .iter()
            .filter(|(name, _)| self.is_enabled(name))
            .map(|(_, c)| *c)
            .collect()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl From<HashMap<String, bool>> for PermissionSet {
    fn from(flags: HashMap<String, bool>) -> Self {
        Self(flags)
    }
}
