use crate::ports::outbound::LockfileReader;
use crate::shared::error::SbomError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum lockfile size (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading lockfiles from the file system
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Reads a file after refusing symlinks, non-regular files and
    /// anything above `MAX_FILE_SIZE`
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read metadata: {}", e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        if metadata.len() > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                metadata.len(),
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, lockfile_path: &Path) -> Result<String> {
        if fs::symlink_metadata(lockfile_path).is_err() {
            return Err(SbomError::LockfileNotFound {
                path: lockfile_path.to_path_buf(),
                suggestion: "Run `brew bundle` to create Brewfile.lock.json, or pass the correct path with --brewlock.".to_string(),
            }
            .into());
        }

        self.safe_read_file(lockfile_path).map_err(|e| {
            SbomError::FileReadError {
                path: lockfile_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
