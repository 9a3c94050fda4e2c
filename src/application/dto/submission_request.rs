use crate::sbom_generation::domain::SubmissionMetadata;
use std::path::PathBuf;

/// SubmissionRequest - input of the dependency submission use case
#[derive(Debug, Clone)]
pub struct SubmissionRequest {
    /// Lockfiles to process, in order
    pub lockfiles: Vec<PathBuf>,
    /// Commit SHA and ref recorded in every BOM
    pub submission: SubmissionMetadata,
}

impl SubmissionRequest {
    pub fn new(lockfiles: Vec<PathBuf>, submission: SubmissionMetadata) -> Self {
        Self {
            lockfiles,
            submission,
        }
    }
}
