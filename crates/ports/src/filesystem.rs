// crates/ports/src/filesystem.rs
use std::path::PathBuf;

use langcount_shared_kernel::Result;

/// Input parameters controlling file listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingPlan {
    pub roots: Vec<PathBuf>,
    pub respect_gitignore: bool,
    pub include_hidden: bool,
    pub follow_links: bool,
    pub max_depth: Option<usize>,
}

impl Default for ListingPlan {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            respect_gitignore: true,
            include_hidden: true,
            follow_links: false,
            max_depth: None,
        }
    }
}

/// Port for turning input roots into the list of files to scan.
pub trait FileLister: Send + Sync {
    fn list_files(&self, plan: &ListingPlan) -> Result<Vec<PathBuf>>;
}
