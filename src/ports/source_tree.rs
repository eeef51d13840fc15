//! Discovery of groups and source files, plus output directory creation.
//!
//! The port owns no naming semantics; extension matching and target path
//! mapping live in `domain::layout`.

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for the filesystem side of a batch run.
pub trait SourceTree {
    /// Fail with `RootNotFound` / `RootNotDirectory` unless `root` is a readable directory.
    fn check_root(&self, root: &Path) -> Result<(), AppError>;

    /// Immediate child directories of `root`, sorted by file name.
    fn list_groups(&self, root: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Regular files directly inside `group`, sorted by file name.
    fn list_files(&self, group: &Path) -> Result<Vec<PathBuf>, AppError>;

    /// Create `dir` and any missing parents. Succeeds if it already exists.
    fn ensure_dir(&self, dir: &Path) -> Result<(), AppError>;
}
