use crate::shared::error::SbomError;
use crate::shared::Result;

/// Maximum length for one half of an owner/repo identifier
const MAX_SEGMENT_LENGTH: usize = 100;

/// Validated `owner/repo` pair naming the target repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryId {
    owner: String,
    repo: String,
}

impl RepositoryId {
    /// Parses `owner/repo`, failing with `SbomError::InvalidRepository`
    /// unless the identifier holds exactly one `/` with a valid segment on
    /// each side.
    pub fn parse(identifier: &str) -> Result<Self> {
        let invalid = |reason: &str| SbomError::InvalidRepository {
            repository: identifier.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = identifier.split('/');
        let (owner, repo) = match (parts.next(), parts.next(), parts.next()) {
            (Some(owner), Some(repo), None) => (owner, repo),
            _ => return Err(invalid("expected exactly one '/' between owner and repository").into()),
        };

        for (segment, label) in [(owner, "owner"), (repo, "repository name")] {
            if segment.is_empty() {
                return Err(invalid(&format!("{} is empty", label)).into());
            }
            if segment.len() > MAX_SEGMENT_LENGTH {
                return Err(invalid(&format!(
                    "{} is longer than {} characters",
                    label, MAX_SEGMENT_LENGTH
                ))
                .into());
            }
            if !segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            {
                return Err(invalid(&format!(
                    "{} may only contain alphanumerics, '-', '_' and '.'",
                    label
                ))
                .into());
            }
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
        })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl std::fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}
