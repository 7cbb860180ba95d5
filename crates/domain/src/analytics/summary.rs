// crates/domain/src/analytics/summary.rs
use langcount_shared_kernel::LanguageKey;
use serde::{Deserialize, Serialize};

use crate::model::{FileStats, StatsByLanguage};

/// Grand totals and headline figures over an aggregated run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub languages: StatsByLanguage,
    pub totals: FileStats,
    pub most_used_language: Option<LanguageKey>,
}

impl Summary {
    pub fn build(languages: StatsByLanguage) -> Self {
        let totals = languages.totals();
        let most_used_language = most_used(&languages);
        Self { languages, totals, most_used_language }
    }
}

/// Language with the most files, ignoring synthetic buckets.
///
/// Keys iterate in ascending order and only a strictly larger count
/// replaces the current best, so ties go to the smallest name.
fn most_used(languages: &StatsByLanguage) -> Option<LanguageKey> {
    languages
        .iter()
        .filter(|(key, stats)| !key.is_synthetic() && stats.files > 0)
        .fold(None::<(&LanguageKey, usize)>, |best, (key, stats)| match best {
            Some((_, files)) if files >= stats.files => best,
            _ => Some((key, stats.files)),
        })
        .map(|(key, _)| key.clone())
}
