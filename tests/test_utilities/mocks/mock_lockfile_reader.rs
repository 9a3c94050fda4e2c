use brewlock_sbom::prelude::*;
use brewlock_sbom::shared::error::SbomError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock LockfileReader serving lockfile contents from memory
#[derive(Default)]
pub struct MockLockfileReader {
    pub files: HashMap<PathBuf, String>,
}

impl MockLockfileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }
}

impl LockfileReader for MockLockfileReader {
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String> {
        match self.files.get(lockfile_path) {
            Some(content) => Ok(content.clone()),
            None => Err(SbomError::LockfileNotFound {
                path: lockfile_path.to_path_buf(),
                suggestion: "Mock lockfile not registered".to_string(),
            }
            .into()),
        }
    }
}
