pub mod profile;
pub mod stats;

pub use profile::{DelimiterPair, LanguageProfile};
pub use stats::{FileStats, StatsByLanguage};
