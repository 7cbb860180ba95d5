// crates/domain/src/config.rs
use derive_builder::Builder;

/// Concurrency limit used when none is configured.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Run-wide switches honoured by the file scanner and aggregator.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct ScanOptions {
    /// Skip line scanning; every resolved file contributes `{files: 1}`.
    #[builder(default)]
    pub count_files_only: bool,
    /// Record unresolved files under `unknown_<ext>` instead of dropping them.
    #[builder(default)]
    pub record_unknown: bool,
    /// Upper bound on files scanned at the same time.
    #[builder(default = "DEFAULT_CONCURRENCY")]
    pub concurrency: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { count_files_only: false, record_unknown: false, concurrency: DEFAULT_CONCURRENCY }
    }
}

impl ScanOptions {
    /// Concurrency limit clamped to at least one worker.
    pub fn worker_count(&self) -> usize {
        self.concurrency.max(1)
    }
}
