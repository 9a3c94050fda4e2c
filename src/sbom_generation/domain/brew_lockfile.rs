use super::Dependency;

/// Host family a Brewfile lock was resolved on.
///
/// Recorded for parity with the lockfile's `system` block; nothing
/// downstream branches on it yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    MacOs,
    Debian,
}

impl OsFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::MacOs => "macos",
            OsFamily::Debian => "deb",
        }
    }
}

impl std::fmt::Display for OsFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parsed Brewfile lock: formula dependencies first, then casks
#[derive(Debug, Clone, PartialEq)]
pub struct BrewLockfile {
    os_family: OsFamily,
    dependencies: Vec<Dependency>,
}

impl BrewLockfile {
    pub fn new(os_family: OsFamily, dependencies: Vec<Dependency>) -> Self {
        Self {
            os_family,
            dependencies,
        }
    }

    pub fn os_family(&self) -> OsFamily {
        self.os_family
    }

    pub fn dependencies(&self) -> &[Dependency] {
        &self.dependencies
    }

    pub fn into_dependencies(self) -> Vec<Dependency> {
        self.dependencies
    }
}
