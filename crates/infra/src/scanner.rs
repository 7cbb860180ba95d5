// crates/infra/src/scanner.rs
use std::{io::BufRead, path::Path};

use langcount_domain::{FileStats, LanguageProfile, LineFold};
use langcount_ports::scanning::FileScanner;
use langcount_shared_kernel::{InfraResult, InfrastructureError};
use log::trace;

use crate::persistence::FileReader;

/// Streams a file from disk one line at a time.
///
/// Memory use is bounded by the longest line, not the file size. Invalid
/// UTF-8 is decoded lossily; a final line without a terminator still counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileScanner;

impl FsFileScanner {
    pub const fn new() -> Self {
        Self
    }
}

impl FileScanner for FsFileScanner {
    fn scan_file(&self, path: &Path, profile: &LanguageProfile) -> InfraResult<FileStats> {
        let mut reader = FileReader::open_buffered(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        scan_reader(&mut reader, profile, path)
    }
}

/// Folds every line of `reader` through the classifier.
///
/// # Errors
///
/// [`InfrastructureError::FileRead`] when a read fails part way; lines
/// already consumed are discarded with it.
pub fn scan_reader<R: BufRead>(
    reader: &mut R,
    profile: &LanguageProfile,
    path: &Path,
) -> InfraResult<FileStats> {
    let mut fold = LineFold::start();
    let mut buf = Vec::with_capacity(256);

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        if read == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let was_plain = fold.state.is_plain();
        fold = fold.feed(&line, profile);
        if was_plain != fold.state.is_plain() {
            trace!("{}:{} span state -> {:?}", path.display(), fold.stats.lines, fold.state);
        }
    }

    Ok(fold.finish())
}
