// crates/usecase/src/aggregator.rs
//! Parallel scanning and per-language merge.
//!
//! One scan task per input path on a fixed-size worker pool. Workers only
//! produce `(bucket, FileStats)` pairs; the calling thread is the single
//! consumer that merges them into [`StatsByLanguage`].

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    path::{Path, PathBuf},
};

use langcount_domain::{FileStats, StatsByLanguage, config::ScanOptions};
use langcount_ports::{
    catalog::LanguageCatalog,
    progress::{FileOutcome, NoopObserver, ScanObserver},
    scanning::FileScanner,
};
use langcount_shared_kernel::{
    DomainError, InfrastructureError, LanguageKey, Result, path::extension_of,
};
use log::{debug, warn};

/// Result channel slots per worker; senders block once it is full.
const CHANNEL_SLOTS_PER_WORKER: usize = 4;

static NOOP: NoopObserver = NoopObserver;

/// Runs the file scanner over a file set and merges per-language results.
pub struct Aggregator<'a> {
    catalog: &'a dyn LanguageCatalog,
    scanner: &'a dyn FileScanner,
    observer: &'a dyn ScanObserver,
    options: ScanOptions,
}

impl<'a> Aggregator<'a> {
    pub fn new(catalog: &'a dyn LanguageCatalog, scanner: &'a dyn FileScanner, options: ScanOptions) -> Self {
        Self { catalog, scanner, observer: &NOOP, options }
    }

    #[must_use]
    pub fn with_observer(mut self, observer: &'a dyn ScanObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Scans every path and returns the merged per-language map.
    ///
    /// Per-file failures (unresolved language, read errors, panics) are
    /// folded into the map as skipped entries and never fail the batch.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::ThreadPoolCreation`] when the worker
    /// pool cannot be started.
    pub fn aggregate(&self, paths: &[PathBuf]) -> Result<StatsByLanguage> {
        let mut totals = StatsByLanguage::new();
        if paths.is_empty() {
            self.observer.on_complete(0);
            return Ok(totals);
        }

        let workers = self.options.worker_count();
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("langcount-scan-{i}"))
            .build()
            .map_err(|e| InfrastructureError::ThreadPoolCreation { details: e.to_string() })?;

        debug!("dispatching {} files to {workers} workers", paths.len());

        let (tx, rx) = crossbeam_channel::bounded(workers * CHANNEL_SLOTS_PER_WORKER);

        std::thread::scope(|scope| {
            scope.spawn(move || {
                pool.scope(|tasks| {
                    for path in paths {
                        let tx = tx.clone();
                        tasks.spawn(move |_| {
                            if let Some(entry) = self.scan_one(path) {
                                // the receiver outlives every sender
                                let _ = tx.send(entry);
                            }
                        });
                    }
                });
                // `tx` drops here, closing the channel once all tasks are done
            });

            for (key, stats) in &rx {
                totals.add(key, stats);
            }
        });

        self.observer.on_complete(paths.len());
        Ok(totals)
    }

    /// Scans one file, converting a panic into a skipped entry.
    fn scan_one(&self, path: &Path) -> Option<(LanguageKey, FileStats)> {
        let mut resolved: Option<String> = None;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| self.count_file(path, &mut resolved)));

        match outcome {
            Ok(entry) => entry,
            Err(payload) => {
                let bucket = resolved
                    .map(LanguageKey::language)
                    .unwrap_or_else(|| LanguageKey::unknown(&extension_of(path)));
                let message = panic_message(payload.as_ref());
                // the observer itself may be what panicked
                let reported = panic::catch_unwind(AssertUnwindSafe(|| {
                    self.observer.on_file(
                        path,
                        FileOutcome::Panicked { bucket: bucket.as_str(), message: &message },
                    );
                }));
                if reported.is_err() {
                    warn!("{}: observer panicked while reporting a failed scan", path.display());
                }
                Some((bucket, FileStats::skipped_file()))
            }
        }
    }

    fn count_file(&self, path: &Path, resolved: &mut Option<String>) -> Option<(LanguageKey, FileStats)> {
        let language = match self.catalog.resolve_language(path) {
            Ok(language) => language,
            Err(err) => {
                let ext = match err {
                    DomainError::UnresolvedLanguage { ext, .. } => ext,
                    _ => extension_of(path),
                };
                let recorded = self.options.record_unknown;
                self.observer.on_file(path, FileOutcome::Unresolved { ext: &ext, recorded });
                return recorded.then(|| (LanguageKey::unknown(&ext), FileStats::skipped_file()));
            }
        };
        *resolved = Some(language.clone());

        if self.options.count_files_only {
            self.observer.on_file(path, FileOutcome::Counted { language: &language });
            return Some((LanguageKey::language(language), FileStats::one_file()));
        }

        let Some(profile) = self.catalog.profile(&language) else {
            let reason = DomainError::UnknownProfile { name: language.clone() }.to_string();
            self.observer.on_file(path, FileOutcome::ReadFailed { bucket: &language, reason: &reason });
            return Some((LanguageKey::language(language), FileStats::skipped_file()));
        };

        let stats = match self.scanner.scan_file(path, profile) {
            Ok(stats) => {
                self.observer.on_file(path, FileOutcome::Scanned { language: &language, stats: &stats });
                stats
            }
            Err(err) => {
                let reason = err.to_string();
                self.observer.on_file(path, FileOutcome::ReadFailed { bucket: &language, reason: &reason });
                FileStats::skipped_file()
            }
        };
        Some((LanguageKey::language(language), stats))
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
