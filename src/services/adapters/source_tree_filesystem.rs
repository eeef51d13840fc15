use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::SourceTree;

/// Local filesystem implementation of [`SourceTree`].
///
/// Entry classification follows symlinks, so a link to a directory counts
/// as a group and a link to a file counts as a candidate source. Entries
/// whose metadata cannot be read (dangling or looping links) are neither.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemSourceTree;

impl FilesystemSourceTree {
    pub fn new() -> Self {
        Self
    }

    fn list_entries(
        &self,
        dir: &Path,
        keep: impl Fn(&fs::Metadata) -> bool,
    ) -> Result<Vec<PathBuf>, AppError> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            match fs::metadata(&path) {
                Ok(meta) if keep(&meta) => entries.push(path),
                Ok(_) => {}
                Err(err) if err.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "skipping dangling entry");
                }
                Err(err) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %err,
                        "skipping unreadable entry"
                    );
                }
            }
        }
        entries.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(entries)
    }
}

impl SourceTree for FilesystemSourceTree {
    fn check_root(&self, root: &Path) -> Result<(), AppError> {
        match fs::metadata(root) {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(AppError::RootNotDirectory(root.to_path_buf())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                Err(AppError::RootNotFound(root.to_path_buf()))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn list_groups(&self, root: &Path) -> Result<Vec<PathBuf>, AppError> {
        self.list_entries(root, fs::Metadata::is_dir)
    }

    fn list_files(&self, group: &Path) -> Result<Vec<PathBuf>, AppError> {
        self.list_entries(group, fs::Metadata::is_file)
    }

    fn ensure_dir(&self, dir: &Path) -> Result<(), AppError> {
        fs::create_dir_all(dir)
            .map_err(|source| AppError::OutputDirectory { path: dir.to_path_buf(), source })
    }
}
