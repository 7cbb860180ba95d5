// crates/domain/src/classify.rs
//! Line classification state machine.
//!
//! Classifies one trimmed line as code, comment or blank while tracking
//! whether the scan is inside a multi-line comment or string span.

use serde::{Deserialize, Serialize};

use crate::model::{DelimiterPair, FileStats, LanguageProfile};

/// Kind assigned to a whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineClassification {
    Code,
    Comment,
    Blank,
}

/// Multi-line span the scan is currently inside.
///
/// Carries the end marker that closes the span. Not a stack: the first
/// occurrence of the end marker exits, whatever start markers came between.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum BlockState {
    #[default]
    Plain,
    InComment(String),
    InString(String),
}

impl BlockState {
    #[inline]
    pub fn is_plain(&self) -> bool {
        matches!(self, Self::Plain)
    }
}

// ============================================================================
// classify
// ============================================================================

/// Classifies `trimmed` given the state left by the previous line.
///
/// Pure: identical inputs always give identical outputs.
pub fn classify(
    trimmed: &str,
    profile: &LanguageProfile,
    state: BlockState,
) -> (LineClassification, BlockState) {
    match state {
        BlockState::Plain => classify_plain(trimmed, profile),
        BlockState::InComment(end) => {
            let next = if trimmed.contains(end.as_str()) {
                BlockState::Plain
            } else {
                BlockState::InComment(end)
            };
            (LineClassification::Comment, next)
        }
        BlockState::InString(end) => {
            let next = if trimmed.contains(end.as_str()) {
                BlockState::Plain
            } else {
                BlockState::InString(end)
            };
            (LineClassification::Code, next)
        }
    }
}

fn classify_plain(trimmed: &str, profile: &LanguageProfile) -> (LineClassification, BlockState) {
    if profile.line_comments.iter().any(|prefix| trimmed.starts_with(prefix.as_str())) {
        return (LineClassification::Comment, BlockState::Plain);
    }
    if trimmed.is_empty() {
        return (LineClassification::Blank, BlockState::Plain);
    }

    let comment = earliest_start(trimmed, &profile.block_comments);
    let string = earliest_start(trimmed, &profile.multiline_strings);

    let opened = match (comment, string) {
        (Some(c), Some(s)) if c.0 < s.0 => Some((SpanKind::Comment, c)),
        (Some(c), Some(s)) if s.0 < c.0 => Some((SpanKind::String, s)),
        // 同じ位置でコメントと文字列が始まる場合は曖昧なのでコード扱い
        (Some(_), Some(_)) => None,
        (Some(c), None) => Some((SpanKind::Comment, c)),
        (None, Some(s)) => Some((SpanKind::String, s)),
        (None, None) => None,
    };

    let Some((kind, (idx, pair))) = opened else {
        return (LineClassification::Code, BlockState::Plain);
    };

    let rest = &trimmed[idx + pair.start.len()..];
    let closed = rest.contains(pair.end.as_str());

    match kind {
        SpanKind::Comment => {
            let next = if closed { BlockState::Plain } else { BlockState::InComment(pair.end.clone()) };
            (LineClassification::Comment, next)
        }
        SpanKind::String => {
            let next = if closed { BlockState::Plain } else { BlockState::InString(pair.end.clone()) };
            (LineClassification::Code, next)
        }
    }
}

#[derive(Clone, Copy)]
enum SpanKind {
    Comment,
    String,
}

/// Lowest match index over `pairs`; on equal indices the earlier-configured pair wins.
fn earliest_start<'p>(line: &str, pairs: &'p [DelimiterPair]) -> Option<(usize, &'p DelimiterPair)> {
    pairs
        .iter()
        .filter_map(|pair| line.find(pair.start.as_str()).map(|idx| (idx, pair)))
        .fold(None, |best, (idx, pair)| match best {
            Some((best_idx, _)) if best_idx <= idx => best,
            _ => Some((idx, pair)),
        })
}

// ============================================================================
// LineFold
// ============================================================================

/// Per-file scan state threaded by value through each line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFold {
    pub state: BlockState,
    pub stats: FileStats,
}

impl Default for LineFold {
    fn default() -> Self {
        Self::start()
    }
}

impl LineFold {
    /// Fresh state for one file: `Plain`, with the file itself counted.
    pub const fn start() -> Self {
        Self { state: BlockState::Plain, stats: FileStats::one_file() }
    }

    /// Consumes one raw line (line terminator optional).
    #[must_use]
    pub fn feed(self, line: &str, profile: &LanguageProfile) -> Self {
        let Self { state, mut stats } = self;
        stats.lines += 1;
        let (class, state) = classify(line.trim(), profile, state);
        stats.record(class);
        Self { state, stats }
    }

    pub fn finish(self) -> FileStats {
        self.stats
    }
}

/// Folds a whole in-memory file through [`LineFold`].
pub fn tally_lines<'a, I>(lines: I, profile: &LanguageProfile) -> FileStats
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .fold(LineFold::start(), |fold, line| fold.feed(line, profile))
        .finish()
}
