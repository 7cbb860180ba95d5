// crates/infra/src/filesystem.rs
use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use ignore::WalkBuilder;
use langcount_ports::filesystem::{FileLister, ListingPlan};
use langcount_shared_kernel::Result;
use log::{debug, error, info, warn};

use crate::persistence::FileReader;

/// Bytes sampled when deciding whether an explicitly named file is text.
const TEXT_SNIFF_BYTES: usize = 512;

/// Directory names never descended into, whatever the ignore settings.
const PRUNED_DIRS: &[&str] = &[".git"];

/// Filesystem adapter implementing the [`FileLister`] port with `ignore`.
///
/// Directories are walked recursively; explicitly named files are kept only
/// when they look like text. Inputs that do not exist are logged and skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct WalkFileLister;

impl WalkFileLister {
    pub const fn new() -> Self {
        Self
    }
}

impl FileLister for WalkFileLister {
    fn list_files(&self, plan: &ListingPlan) -> Result<Vec<PathBuf>> {
        let mut seen = HashSet::new();
        let mut files = Vec::new();

        for root in &plan.roots {
            info!("processing input '{}'", root.display());
            let metadata = match std::fs::metadata(root) {
                Ok(md) => md,
                Err(err) => {
                    error!("{}: {err}", root.display());
                    continue;
                }
            };

            let found = if metadata.is_dir() {
                walk_root(root, plan)
            } else if looks_like_text(root) {
                vec![root.clone()]
            } else {
                warn!("{}: not a text file, skipped", root.display());
                Vec::new()
            };

            // 最初に見つかった順を保ったまま重複を除く
            files.extend(found.into_iter().filter(|p| seen.insert(p.clone())));
        }

        debug!("listed {} files from {} inputs", files.len(), plan.roots.len());
        Ok(files)
    }
}

fn walk_root(root: &Path, plan: &ListingPlan) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(!plan.include_hidden)
        .ignore(plan.respect_gitignore)
        .git_ignore(plan.respect_gitignore)
        .git_global(plan.respect_gitignore)
        .git_exclude(plan.respect_gitignore)
        .parents(plan.respect_gitignore)
        // honour .gitignore files outside of a git checkout too
        .require_git(false)
        .follow_links(plan.follow_links)
        .max_depth(plan.max_depth)
        .sort_by_file_path(|a, b| a.cmp(b))
        .filter_entry(|entry| {
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            !(is_dir && entry.file_name().to_str().is_some_and(|n| PRUNED_DIRS.contains(&n)))
        });

    let mut files = Vec::new();
    for entry in builder.build() {
        match entry {
            Ok(entry) if entry.file_type().is_some_and(|ft| ft.is_file()) => {
                files.push(entry.into_path());
            }
            Ok(_) => {}
            Err(err) => warn!("walk error under '{}': {err}", root.display()),
        }
    }
    files
}

/// Cheap content sniff over the first [`TEXT_SNIFF_BYTES`] bytes.
pub fn looks_like_text(path: &Path) -> bool {
    let mut buf = [0u8; TEXT_SNIFF_BYTES];
    let n = match FileReader::read_prefix(path, &mut buf) {
        Ok(n) => n,
        Err(err) => {
            debug!("{}: cannot sample content: {err}", path.display());
            return false;
        }
    };
    is_text_sample(&buf[..n])
}

fn is_text_sample(sample: &[u8]) -> bool {
    // UTF-16 BOMs carry NULs, accept them before the NUL check
    if sample.starts_with(&[0xEF, 0xBB, 0xBF])
        || sample.starts_with(&[0xFF, 0xFE])
        || sample.starts_with(&[0xFE, 0xFF])
    {
        return true;
    }
    if sample.starts_with(b"%PDF-")
        || sample.starts_with(b"PK\x03\x04")
        || sample.starts_with(b"\x7FELF")
        || sample.starts_with(b"MZ")
        || sample.starts_with(b"\x89PNG\r\n\x1A\n")
        || sample.starts_with(b"\xFF\xD8\xFF")
        || sample.starts_with(b"GIF8")
        || sample.starts_with(b"\x1F\x8B")
    {
        return false;
    }
    if memchr::memchr(0, sample).is_some() {
        return false;
    }
    // the sample may cut a multi-byte sequence at its end
    match std::str::from_utf8(sample) {
        Ok(_) => true,
        Err(err) => err.error_len().is_none(),
    }
}
