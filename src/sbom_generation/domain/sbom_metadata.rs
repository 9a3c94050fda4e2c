/// SbomMetadata value object: generation time and the producing tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
}

impl SbomMetadata {
    pub fn new(timestamp: String, tool_name: String, tool_version: String) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}

/// Commit provenance attached to a submission.
///
/// Both fields are optional and stay absent when not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionMetadata {
    sha: Option<String>,
    git_ref: Option<String>,
}

impl SubmissionMetadata {
    pub fn new(sha: Option<String>, git_ref: Option<String>) -> Self {
        Self {
            sha: sha.filter(|s| !s.trim().is_empty()),
            git_ref: git_ref.filter(|r| !r.trim().is_empty()),
        }
    }

    pub fn sha(&self) -> Option<&str> {
        self.sha.as_deref()
    }

    pub fn git_ref(&self) -> Option<&str> {
        self.git_ref.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sbom_metadata_new() {
        let metadata = SbomMetadata::new(
            "2024-01-01T00:00:00Z".to_string(),
            "brewlock-sbom".to_string(),
            "0.1.0".to_string(),
        );

        assert_eq!(metadata.timestamp(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.tool_name(), "brewlock-sbom");
        assert_eq!(metadata.tool_version(), "0.1.0");
    }

    #[test]
    fn test_submission_metadata_keeps_values() {
        let metadata = SubmissionMetadata::new(
            Some("ffac537e6cbbf934b08745a378932722df287a53".to_string()),
            Some("refs/heads/main".to_string()),
        );
        assert_eq!(
            metadata.sha(),
            Some("ffac537e6cbbf934b08745a378932722df287a53")
        );
        assert_eq!(metadata.git_ref(), Some("refs/heads/main"));
    }

    #[test]
    fn test_submission_metadata_blank_values_are_absent() {
        let metadata = SubmissionMetadata::new(Some(String::new()), None);
        assert_eq!(metadata.sha(), None);
        assert_eq!(metadata.git_ref(), None);
        assert_eq!(metadata, SubmissionMetadata::default());
    }
}
