//! # Ports
//!
//! Interface definitions for the collaborators around the counting core.
//!
//! - [`catalog`]: language resolution and profile lookup
//! - [`filesystem`]: input listing
//! - [`scanning`]: per-file line scanning
//! - [`progress`]: diagnostics sink for a running scan
//!
//! The use-case layer depends only on these traits; adapters live in
//! `langcount_infra`.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod filesystem;
pub mod progress;
pub mod scanning;
