// crates/domain/src/model/stats.rs
use std::{
    collections::{BTreeMap, btree_map},
    iter::Sum,
    ops::{Add, AddAssign},
};

use langcount_shared_kernel::LanguageKey;
use serde::{Deserialize, Serialize};

use crate::classify::LineClassification;

/// Line counters of one file, or of many files once merged.
///
/// Field-wise addition with the all-zero value as identity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileStats {
    pub files: usize,
    pub skipped: usize,
    pub lines: usize,
    pub code: usize,
    pub comments: usize,
    pub blanks: usize,
}

impl FileStats {
    pub const ZERO: Self = Self { files: 0, skipped: 0, lines: 0, code: 0, comments: 0, blanks: 0 };

    /// A single file with nothing counted yet.
    #[inline]
    pub const fn one_file() -> Self {
        Self { files: 1, ..Self::ZERO }
    }

    /// A single file that was seen but not scanned.
    #[inline]
    pub const fn skipped_file() -> Self {
        Self { files: 1, skipped: 1, ..Self::ZERO }
    }

    #[inline]
    pub fn record(&mut self, class: LineClassification) {
        match class {
            LineClassification::Blank => self.blanks += 1,
            LineClassification::Comment => self.comments += 1,
            LineClassification::Code => self.code += 1,
        }
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.files == 0
            && self.skipped == 0
            && self.lines == 0
            && self.code == 0
            && self.comments == 0
            && self.blanks == 0
    }
}

impl Add for FileStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            files: self.files + rhs.files,
            skipped: self.skipped + rhs.skipped,
            lines: self.lines + rhs.lines,
            code: self.code + rhs.code,
            comments: self.comments + rhs.comments,
            blanks: self.blanks + rhs.blanks,
        }
    }
}

impl AddAssign for FileStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for FileStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a FileStats> for FileStats {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Per-language totals, keyed by language name or synthetic bucket.
///
/// Merging is map union with [`FileStats`] addition on shared keys, so the
/// result does not depend on the order partial maps arrive in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatsByLanguage(BTreeMap<LanguageKey, FileStats>);

impl StatsByLanguage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one partial result to its bucket.
    pub fn add(&mut self, key: LanguageKey, stats: FileStats) {
        *self.0.entry(key).or_default() += stats;
    }

    /// Folds another map into this one.
    pub fn merge(&mut self, other: Self) {
        for (key, stats) in other.0 {
            self.add(key, stats);
        }
    }

    #[must_use]
    pub fn merged(mut self, other: Self) -> Self {
        self.merge(other);
        self
    }

    pub fn get(&self, key: &str) -> Option<&FileStats> {
        self.0.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Buckets in ascending key order.
    pub fn iter(&self) -> btree_map::Iter<'_, LanguageKey, FileStats> {
        self.0.iter()
    }

    /// Field-wise sum over every bucket, synthetic ones included.
    pub fn totals(&self) -> FileStats {
        self.0.values().sum()
    }

    pub fn into_inner(self) -> BTreeMap<LanguageKey, FileStats> {
        self.0
    }
}

impl FromIterator<(LanguageKey, FileStats)> for StatsByLanguage {
    fn from_iter<I: IntoIterator<Item = (LanguageKey, FileStats)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl Extend<(LanguageKey, FileStats)> for StatsByLanguage {
    fn extend<I: IntoIterator<Item = (LanguageKey, FileStats)>>(&mut self, iter: I) {
        for (key, stats) in iter {
            self.add(key, stats);
        }
    }
}

impl<'a> IntoIterator for &'a StatsByLanguage {
    type Item = (&'a LanguageKey, &'a FileStats);
    type IntoIter = btree_map::Iter<'a, LanguageKey, FileStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for StatsByLanguage {
    type Item = (LanguageKey, FileStats);
    type IntoIter = btree_map::IntoIter<LanguageKey, FileStats>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(files: usize, lines: usize, code: usize, comments: usize, blanks: usize) -> FileStats {
        FileStats { files, skipped: 0, lines, code, comments, blanks }
    }

    #[test]
    fn add_is_field_wise() {
        let total = stats(1, 10, 6, 3, 1) + FileStats::skipped_file();
        assert_eq!(
            total,
            FileStats { files: 2, skipped: 1, lines: 10, code: 6, comments: 3, blanks: 1 }
        );
    }

    #[test]
    fn zero_is_identity() {
        let s = stats(1, 7, 2, 4, 1);
        assert_eq!(s + FileStats::ZERO, s);
        assert_eq!(FileStats::ZERO + s, s);
        assert!(FileStats::default().is_zero());
    }

    #[test]
    fn record_bumps_matching_counter() {
        let mut s = FileStats::one_file();
        s.record(LineClassification::Code);
        s.record(LineClassification::Blank);
        s.record(LineClassification::Comment);
        s.record(LineClassification::Comment);
        assert_eq!((s.code, s.blanks, s.comments), (1, 1, 2));
        // record does not touch `lines`; the scanner counts those
        assert_eq!(s.lines, 0);
    }

    #[test]
    fn merge_unions_keys_and_adds_shared_ones() {
        let mut left: StatsByLanguage = [
            (LanguageKey::language("go"), stats(1, 10, 8, 1, 1)),
            (LanguageKey::language("c"), stats(1, 5, 5, 0, 0)),
        ]
        .into_iter()
        .collect();
        let right: StatsByLanguage = [
            (LanguageKey::language("go"), stats(2, 20, 10, 5, 5)),
            (LanguageKey::unknown("txt"), FileStats::skipped_file()),
        ]
        .into_iter()
        .collect();

        left.merge(right);

        assert_eq!(left.len(), 3);
        assert_eq!(left.get("go"), Some(&stats(3, 30, 18, 6, 6)));
        assert_eq!(left.get("c"), Some(&stats(1, 5, 5, 0, 0)));
        assert_eq!(left.get("unknown_txt"), Some(&FileStats::skipped_file()));
    }

    #[test]
    fn merging_empty_map_is_identity() {
        let map: StatsByLanguage =
            [(LanguageKey::language("rust"), stats(1, 3, 3, 0, 0))].into_iter().collect();
        assert_eq!(map.clone().merged(StatsByLanguage::new()), map);
        assert_eq!(StatsByLanguage::new().merged(map.clone()), map);
    }

    #[test]
    fn totals_include_synthetic_buckets() {
        let map: StatsByLanguage = [
            (LanguageKey::language("go"), stats(1, 4, 3, 1, 0)),
            (LanguageKey::unknown("bin"), FileStats::skipped_file()),
        ]
        .into_iter()
        .collect();
        let totals = map.totals();
        assert_eq!(totals.files, 2);
        assert_eq!(totals.skipped, 1);
        assert_eq!(totals.lines, 4);
    }

    #[test]
    fn serializes_as_plain_object() {
        let map: StatsByLanguage =
            [(LanguageKey::language("go"), FileStats::skipped_file())].into_iter().collect();
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(
            json,
            r#"{"go":{"files":1,"skipped":1,"lines":0,"code":0,"comments":0,"blanks":0}}"#
        );
    }
}
