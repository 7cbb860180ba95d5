// crates/infra/src/observer.rs
use std::path::Path;

use langcount_ports::progress::{FileOutcome, ScanObserver};
use log::{debug, error, info, warn};

/// Forwards per-file scan events to the `log` facade.
///
/// Successful scans log at `debug`, files that could not be counted at
/// `warn`, worker panics at `error`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingObserver;

impl ScanObserver for LoggingObserver {
    fn on_file(&self, path: &Path, outcome: FileOutcome<'_>) {
        let path = path.display();
        match outcome {
            FileOutcome::Scanned { language, stats } => debug!(
                "{path}: {language} lines={} code={} comments={} blanks={}",
                stats.lines, stats.code, stats.comments, stats.blanks
            ),
            FileOutcome::Counted { language } => debug!("{path}: {language}"),
            FileOutcome::Unresolved { ext, recorded: true } => {
                debug!("{path}: no language for extension '{ext}', recorded");
            }
            FileOutcome::Unresolved { ext, recorded: false } => {
                debug!("{path}: no language for extension '{ext}', ignored");
            }
            FileOutcome::ReadFailed { bucket, reason } => {
                warn!("{path}: skipped ({bucket}): {reason}");
            }
            FileOutcome::Panicked { bucket, message } => {
                error!("{path}: scan panicked ({bucket}): {message}");
            }
        }
    }

    fn on_complete(&self, files: usize) {
        info!("scan finished, {files} files");
    }
}
