use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::SourceTree;

/// In-memory source tree for testing.
///
/// Directories map to their file entries; nested directories are declared
/// with [`MemorySourceTree::add_dir`].
#[derive(Default)]
pub struct MemorySourceTree {
    pub dirs: RefCell<BTreeMap<PathBuf, BTreeSet<PathBuf>>>,
    pub files: RefCell<BTreeSet<PathBuf>>,
    pub created_dirs: RefCell<Vec<PathBuf>>,
    pub read_only: RefCell<bool>,
}

impl MemorySourceTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if let Some(entries) = self.dirs.borrow_mut().get_mut(parent) {
                entries.insert(path.clone());
            }
        }
        self.dirs.borrow_mut().entry(path).or_default();
    }

    /// Add a file, creating its parent directory entry if needed.
    pub fn add_file(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let parent = path.parent().map(Path::to_path_buf).unwrap_or_default();
        if !self.dirs.borrow().contains_key(&parent) {
            self.add_dir(parent.clone());
        }
        self.dirs.borrow_mut().entry(parent).or_default().insert(path.clone());
        self.files.borrow_mut().insert(path);
    }

    pub fn with_read_only(self) -> Self {
        *self.read_only.borrow_mut() = true;
        self
    }

    fn entries(&self, dir: &Path) -> Result<BTreeSet<PathBuf>, AppError> {
        self.dirs
            .borrow()
            .get(dir)
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound).into())
    }
}

impl SourceTree for MemorySourceTree {
    fn check_root(&self, root: &Path) -> Result<(), AppError> {
        if self.dirs.borrow().contains_key(root) {
            Ok(())
        } else if self.files.borrow().contains(root) {
            Err(AppError::RootNotDirectory(root.to_path_buf()))
        } else {
            Err(AppError::RootNotFound(root.to_path_buf()))
        }
    }

    fn list_groups(&self, root: &Path) -> Result<Vec<PathBuf>, AppError> {
        let dirs = self.dirs.borrow();
        Ok(self.entries(root)?.into_iter().filter(|p| dirs.contains_key(p)).collect())
    }

    fn list_files(&self, group: &Path) -> Result<Vec<PathBuf>, AppError> {
        let files = self.files.borrow();
        Ok(self.entries(group)?.into_iter().filter(|p| files.contains(p)).collect())
    }

    fn ensure_dir(&self, dir: &Path) -> Result<(), AppError> {
        if *self.read_only.borrow() {
            return Err(AppError::OutputDirectory {
                path: dir.to_path_buf(),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            });
        }
        self.created_dirs.borrow_mut().push(dir.to_path_buf());
        Ok(())
    }
}
