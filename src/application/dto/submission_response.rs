use crate::ports::outbound::SubmissionReceipt;
use crate::sbom_generation::domain::OsFamily;
use std::path::PathBuf;

/// Result of processing one lockfile
#[derive(Debug, Clone)]
pub struct LockfileSubmission {
    pub lockfile: PathBuf,
    pub os_family: OsFamily,
    pub dependency_count: usize,
    pub serial_number: String,
    pub receipt: SubmissionReceipt,
}

/// SubmissionResponse - output of the dependency submission use case
///
/// Only produced when every lockfile went through; the first failure
/// aborts the run and is returned as an error instead.
#[derive(Debug, Clone, Default)]
pub struct SubmissionResponse {
    pub submitted: Vec<LockfileSubmission>,
}

impl SubmissionResponse {
    pub fn new(submitted: Vec<LockfileSubmission>) -> Self {
        Self { submitted }
    }

    pub fn total_dependencies(&self) -> usize {
        self.submitted.iter().map(|s| s.dependency_count).sum()
    }
}
