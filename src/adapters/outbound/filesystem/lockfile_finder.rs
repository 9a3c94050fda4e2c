use crate::ports::outbound::LockfileLocator;
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Default lockfile name written by `brew bundle`
pub const DEFAULT_LOCKFILE_NAME: &str = "Brewfile.lock.json";

/// Directories never descended into during discovery
const SKIPPED_DIRECTORIES: [&str; 2] = [".git", "node_modules"];

/// LockfileFinder adapter: recursive directory walk matching a file name
///
/// Symbolic links are neither followed nor reported. Entries that cannot
/// be read are logged and skipped; only a missing root is an
/// error.
pub struct LockfileFinder {
    file_name: String,
}

impl LockfileFinder {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    fn is_skipped(entry: &DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| SKIPPED_DIRECTORIES.contains(&name))
    }
}

impl Default for LockfileFinder {
    fn default() -> Self {
        Self::new(DEFAULT_LOCKFILE_NAME)
    }
}

impl LockfileLocator for LockfileFinder {
    fn find_lockfiles(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let metadata = fs::metadata(root)
            .with_context(|| format!("Failed to read directory {}", root.display()))?;
        if !metadata.is_dir() {
            anyhow::bail!("{} is not a directory", root.display());
        }

        let mut found: Vec<PathBuf> = WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| !Self::is_skipped(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry during discovery: {}", e);
                    None
                }
            })
            .filter(|entry| {
                entry.file_type().is_file() && entry.file_name() == self.file_name.as_str()
            })
            .map(DirEntry::into_path)
            .collect();

        found.sort();
        Ok(found)
    }
}
