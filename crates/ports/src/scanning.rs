// crates/ports/src/scanning.rs
use std::path::Path;

use langcount_domain::{FileStats, LanguageProfile};
use langcount_shared_kernel::InfraResult;

/// Port for counting the lines of one file.
pub trait FileScanner: Send + Sync {
    /// # Errors
    ///
    /// [`InfrastructureError::FileRead`](langcount_shared_kernel::InfrastructureError::FileRead)
    /// when the file cannot be opened or a read fails part way.
    fn scan_file(&self, path: &Path, profile: &LanguageProfile) -> InfraResult<FileStats>;
}
