// crates/shared-kernel/src/value_objects/mod.rs
pub mod language_key;

pub use language_key::{LanguageKey, UNKNOWN_BUCKET_PREFIX};
