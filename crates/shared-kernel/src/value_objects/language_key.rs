// crates/shared-kernel/src/value_objects/language_key.rs
use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Prefix of the synthetic bucket used for files whose language is unresolved.
pub const UNKNOWN_BUCKET_PREFIX: &str = "unknown_";

/// Bucket key of the per-language statistics map.
///
/// Either a configured language name (`"rust"`) or a synthetic
/// `unknown_<ext>` bucket for files no language claims.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LanguageKey(String);

impl LanguageKey {
    #[inline]
    pub fn language(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Synthetic bucket for an unresolved extension (`""` yields `unknown_`).
    #[inline]
    pub fn unknown(ext: &str) -> Self {
        Self(format!("{UNKNOWN_BUCKET_PREFIX}{ext}"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_synthetic(&self) -> bool {
        self.0.starts_with(UNKNOWN_BUCKET_PREFIX)
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for LanguageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for LanguageKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for LanguageKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LanguageKey {
    fn from(value: &str) -> Self {
        Self::language(value)
    }
}

impl From<String> for LanguageKey {
    fn from(value: String) -> Self {
        Self::language(value)
    }
}
