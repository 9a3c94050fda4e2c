use crate::shared::Result;

/// Package manager tag used for every Homebrew-derived dependency
pub const BREW_MANAGER: &str = "brew";

/// A single resolved dependency taken from a lockfile.
///
/// Immutable once constructed. Identity is not enforced, so the same
/// name can appear several times in one dependency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    manager: String,
    name: String,
    version: Option<String>,
}

impl Dependency {
    /// Creates a dependency, rejecting an empty manager or name.
    ///
    /// A blank version is treated as unknown and stored as `None`.
    pub fn new(manager: String, name: String, version: Option<String>) -> Result<Self> {
        if manager.trim().is_empty() {
            anyhow::bail!("Dependency manager cannot be empty");
        }
        if name.trim().is_empty() {
            anyhow::bail!("Dependency name cannot be empty");
        }

        let version = version.filter(|v| !v.trim().is_empty());

        Ok(Self {
            manager,
            name,
            version,
        })
    }

    /// Shorthand for a Homebrew dependency
    pub fn brew(name: impl Into<String>, version: Option<String>) -> Result<Self> {
        Self::new(BREW_MANAGER.to_string(), name.into(), version)
    }

    pub fn manager(&self) -> &str {
        &self.manager
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }
}

impl std::fmt::Display for Dependency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}:{}@{}", self.manager, self.name, version),
            None => write!(f, "{}:{}", self.manager, self.name),
        }
    }
}
