// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, InfraResult, InfrastructureError,
    LangCountError, PresentationError, Result,
};

pub mod error;
pub mod path;
pub mod value_objects;

pub use value_objects::{LanguageKey, UNKNOWN_BUCKET_PREFIX};
