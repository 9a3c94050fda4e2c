use crate::shared::Result;
use std::path::{Path, PathBuf};

/// LockfileLocator port for discovering lockfiles below a directory
pub trait LockfileLocator {
    /// Returns every lockfile found under `root`, in a stable order
    fn find_lockfiles(&self, root: &Path) -> Result<Vec<PathBuf>>;
}
