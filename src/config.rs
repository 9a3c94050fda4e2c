//! Configuration for brewlock-sbom.
//!
//! Settings come from, in order of precedence: command-line flags,
//! environment variables (wired through clap), an optional
//! `brewlock-sbom.config.yml` file, and built-in defaults.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use brewlock_sbom::adapters::outbound::filesystem::DEFAULT_LOCKFILE_NAME;
use brewlock_sbom::adapters::outbound::network::DEFAULT_API_URL;
use brewlock_sbom::shared::error::SbomError;
use brewlock_sbom::shared::Result;

use crate::cli::Args;

const CONFIG_FILENAME: &str = "brewlock-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub github_instance: Option<String>,
    pub github_repository: Option<String>,
    pub lockfile_name: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| SbomError::ConfigFileError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    validate_config(&config, path)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile, path: &Path) -> Result<()> {
    if let Some(name) = &config.lockfile_name {
        if name.trim().is_empty() || name.contains('/') {
            return Err(SbomError::ConfigFileError {
                path: path.to_path_buf(),
                details: "lockfile_name must be a non-empty file name without '/'".to_string(),
            }
            .into());
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// `DEBUG` counts as set when it holds any non-empty value
pub fn debug_requested(flag: bool, debug_env: Option<OsString>) -> bool {
    flag || debug_env.is_some_and(|value| !value.is_empty())
}

/// Fully resolved run settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub directory: PathBuf,
    pub brewlock: Option<PathBuf>,
    pub lockfile_name: String,
    pub sha: Option<String>,
    pub git_ref: Option<String>,
    pub github_repository: Option<String>,
    pub github_instance: String,
    pub github_token: Option<String>,
    pub dry_run: bool,
}

impl Settings {
    /// Merges parsed arguments over the config file and defaults
    pub fn resolve(args: Args, file: ConfigFile) -> Self {
        Self {
            directory: args.directory,
            brewlock: args.brewlock,
            lockfile_name: file
                .lockfile_name
                .unwrap_or_else(|| DEFAULT_LOCKFILE_NAME.to_string()),
            sha: args.sha,
            git_ref: args.git_ref,
            github_repository: args.github_repository.or(file.github_repository),
            github_instance: args
                .github_instance
                .or(file.github_instance)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            github_token: args.github_token,
            dry_run: args.dry_run,
        }
    }
}
