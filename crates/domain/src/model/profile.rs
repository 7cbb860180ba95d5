// crates/domain/src/model/profile.rs
use langcount_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// An opening / closing marker pair of a multi-line span (`/*` … `*/`).
///
/// Serialized as a two-element array, `["/*", "*/"]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct DelimiterPair {
    pub start: String,
    pub end: String,
}

impl DelimiterPair {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: start.into(), end: end.into() }
    }
}

impl From<(String, String)> for DelimiterPair {
    fn from((start, end): (String, String)) -> Self {
        Self { start, end }
    }
}

impl From<DelimiterPair> for (String, String) {
    fn from(pair: DelimiterPair) -> Self {
        (pair.start, pair.end)
    }
}

/// Comment and string syntax of one language.
///
/// Immutable once loaded. Delimiter lists keep their configured order; the
/// classifier still picks whichever start marker occurs earliest in a line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProfile {
    pub name: String,
    #[serde(default)]
    pub line_comments: Vec<String>,
    #[serde(default)]
    pub block_comments: Vec<DelimiterPair>,
    #[serde(default)]
    pub multiline_strings: Vec<DelimiterPair>,
}

impl LanguageProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), ..Self::default() }
    }

    #[must_use]
    pub fn with_line_comment(mut self, prefix: impl Into<String>) -> Self {
        self.line_comments.push(prefix.into());
        self
    }

    #[must_use]
    pub fn with_block_comment(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.block_comments.push(DelimiterPair::new(start, end));
        self
    }

    #[must_use]
    pub fn with_multiline_string(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.multiline_strings.push(DelimiterPair::new(start, end));
        self
    }

    /// Rejects profiles the classifier cannot run on: an empty marker would
    /// match every line.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidConfiguration`] naming the offending marker.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(invalid("language name must not be empty".to_string()));
        }
        if self.line_comments.iter().any(String::is_empty) {
            return Err(invalid(format!("{}: empty single-line comment prefix", self.name)));
        }
        for (kind, pairs) in [
            ("block comment", &self.block_comments),
            ("multi-line string", &self.multiline_strings),
        ] {
            if let Some(pair) = pairs.iter().find(|p| p.start.is_empty() || p.end.is_empty()) {
                return Err(invalid(format!(
                    "{}: {kind} delimiters must be non-empty (got {:?} .. {:?})",
                    self.name, pair.start, pair.end
                )));
            }
        }
        Ok(())
    }
}

fn invalid(reason: String) -> DomainError {
    DomainError::InvalidConfiguration { reason }
}
