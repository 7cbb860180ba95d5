// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod catalog;
pub mod filesystem;
pub mod observer;
pub mod persistence;
pub mod scanner;

pub use catalog::ProfileCatalog;
pub use filesystem::WalkFileLister;
pub use observer::LoggingObserver;
pub use scanner::FsFileScanner;
