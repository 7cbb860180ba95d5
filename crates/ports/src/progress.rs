// crates/ports/src/progress.rs
use std::path::Path;

use langcount_domain::FileStats;

/// Outcome of one file as seen by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome<'a> {
    Scanned { language: &'a str, stats: &'a FileStats },
    Counted { language: &'a str },
    Unresolved { ext: &'a str, recorded: bool },
    ReadFailed { bucket: &'a str, reason: &'a str },
    Panicked { bucket: &'a str, message: &'a str },
}

/// Diagnostics sink injected into the aggregator. Called from worker threads.
pub trait ScanObserver: Send + Sync {
    fn on_file(&self, path: &Path, outcome: FileOutcome<'_>);
    fn on_complete(&self, files: usize) {
        let _ = files;
    }
}

/// Observer that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl ScanObserver for NoopObserver {
    fn on_file(&self, _path: &Path, _outcome: FileOutcome<'_>) {}
}
