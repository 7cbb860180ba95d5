// crates/domain/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod classify;
pub mod config;
pub mod model;

pub use classify::{BlockState, LineClassification, LineFold, classify};
pub use model::{DelimiterPair, FileStats, LanguageProfile, StatsByLanguage};
