//! Source tree entities and the source-to-target path mapping.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::domain::LayoutConfig;

/// An immediate subdirectory of the scanned root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Base name of the directory, reused as the output subdirectory name.
    pub name: OsString,
    /// Full path as discovered under the root.
    pub path: PathBuf,
}

impl Group {
    pub fn new(path: PathBuf) -> Option<Self> {
        let name = path.file_name()?.to_os_string();
        Some(Self { name, path })
    }
}

/// A file directly inside a group whose extension matched the source extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    stem: OsString,
}

impl SourceFile {
    /// Accept `path` only when its last extension equals `extension` exactly.
    pub fn matching(path: PathBuf, extension: &str) -> Option<Self> {
        if !has_extension(&path, extension) {
            return None;
        }
        let stem = path.file_stem()?.to_os_string();
        Some(Self { path, stem })
    }

    /// File name with the last extension removed.
    pub fn stem(&self) -> &OsStr {
        &self.stem
    }
}

/// Case-sensitive comparison of the last extension. Dotfiles have no extension.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == OsStr::new(extension))
}

/// `<output root>/<group name>`
pub fn output_dir(layout: &LayoutConfig, group_name: &OsStr) -> PathBuf {
    layout.output_root.join(group_name)
}

/// `<output root>/<group name>/<stem>.<target extension>`
pub fn target_path(layout: &LayoutConfig, group_name: &OsStr, stem: &OsStr) -> PathBuf {
    let mut file_name = stem.to_os_string();
    file_name.push(".");
    file_name.push(&layout.target_extension);
    output_dir(layout, group_name).join(file_name)
}
