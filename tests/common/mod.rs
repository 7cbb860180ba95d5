//! Shared helpers for the binary and end-to-end tests.
#![allow(dead_code)]

use std::{fs, path::Path};

use tempfile::TempDir;

/// Creates a temporary tree from `(relative path, contents)` pairs.
pub fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().expect("create temp dir");
    for (rel, contents) in files {
        write(dir.path(), rel, contents);
    }
    dir
}

pub fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dirs");
    }
    fs::write(path, contents).expect("write fixture");
}

pub const MIXED_C: &str = "int x = 1;\n\n// note\n/* start\nstill comment\nend */\nint y;\n";

pub const PYTHON_DOC: &str = "def f():\n    \"\"\"\n    # not a comment\n    \"\"\"\n    # real comment\n    return 1\n";
