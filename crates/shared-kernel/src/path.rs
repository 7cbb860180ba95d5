// crates/shared-kernel/src/path.rs
use std::path::Path;

/// Lower-cased final path component, or `""` for paths without one.
pub fn lowercase_file_name(path: &Path) -> String {
    path.file_name().map(|n| n.to_string_lossy().to_lowercase()).unwrap_or_default()
}

/// Lower-cased text after the last `.` of the file name, without the dot.
///
/// Dot-files count as extensions (`.bashrc` → `bashrc`); names without a
/// dot give `""`.
pub fn extension_of(path: &Path) -> String {
    let name = lowercase_file_name(path);
    name.rsplit_once('.').map(|(_, ext)| ext.to_string()).unwrap_or_default()
}
