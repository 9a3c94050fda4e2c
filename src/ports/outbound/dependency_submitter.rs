use crate::sbom_generation::domain::Bom;
use crate::shared::Result;

/// Outcome of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    /// HTTP status returned by the endpoint (0 when nothing was sent)
    pub status: u16,
    /// Snapshot identifier assigned by the platform, when reported
    pub id: Option<u64>,
    /// Human-readable message from the platform, when reported
    pub message: Option<String>,
}

impl SubmissionReceipt {
    pub fn new(status: u16, id: Option<u64>, message: Option<String>) -> Self {
        Self {
            status,
            id,
            message,
        }
    }
}

/// DependencySubmitter port for delivering a BOM to its destination
///
/// Implementations send the document exactly once. A failure is returned
/// to the caller as-is; retrying is not the submitter's job.
pub trait DependencySubmitter {
    /// Human-readable destination, used in log lines
    fn target(&self) -> String;

    /// Submits one BOM document
    ///
    /// # Errors
    /// Returns `SbomError::SubmissionFailed` for a non-2xx response and
    /// `SbomError::SubmissionRequestFailed` when the request cannot be sent.
    fn submit_bom(&self, bom: &Bom) -> Result<SubmissionReceipt>;
}
