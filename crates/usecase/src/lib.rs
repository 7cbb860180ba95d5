//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`aggregator`]: bounded parallel scan and single-consumer merge
//! - [`orchestrator`]: list → aggregate → summarise
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod aggregator;
pub mod orchestrator;

pub use aggregator::Aggregator;
pub use orchestrator::CountLanguages;
