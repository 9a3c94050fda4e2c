use brewlock_sbom::prelude::*;
use brewlock_sbom::shared::error::SbomError;
use std::sync::{Arc, Mutex};

/// Mock DependencySubmitter that records every BOM it receives
#[derive(Default, Clone)]
pub struct MockDependencySubmitter {
    pub submitted: Arc<Mutex<Vec<Bom>>>,
    pub failure: Option<(u16, String)>,
}

impl MockDependencySubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every submission fails with the given HTTP status and body
    pub fn failing_with(status: u16, body: &str) -> Self {
        Self {
            failure: Some((status, body.to_string())),
            ..Self::default()
        }
    }

    pub fn submitted_boms(&self) -> Vec<Bom> {
        self.submitted.lock().unwrap().clone()
    }
}

impl DependencySubmitter for MockDependencySubmitter {
    fn target(&self) -> String {
        "mock://dependency-graph".to_string()
    }

    fn submit_bom(&self, bom: &Bom) -> Result<SubmissionReceipt> {
        self.submitted.lock().unwrap().push(bom.clone());

        if let Some((status, body)) = &self.failure {
            return Err(SbomError::SubmissionFailed {
                endpoint: self.target(),
                status: *status,
                body: body.clone(),
            }
            .into());
        }

        Ok(SubmissionReceipt::new(
            201,
            Some(self.submitted.lock().unwrap().len() as u64),
            Some("Dependency results for the repo have been successfully updated.".to_string()),
        ))
    }
}
