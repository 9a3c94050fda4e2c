use crate::application::dto::{LockfileSubmission, SubmissionRequest, SubmissionResponse};
use crate::ports::outbound::{DependencySubmitter, LockfileReader, ProgressReporter};
use crate::sbom_generation::domain::SubmissionMetadata;
use crate::sbom_generation::services::{BrewLockfileParser, CycloneDxExporter, SbomGenerator};
use crate::shared::Result;
use anyhow::Context;
use std::path::Path;


/// SubmitDependenciesUseCase - parse, export and submit each lockfile
///
/// Lockfiles are handled strictly one after another. The first failure
/// stops the run, so nothing after a failed lockfile is attempted.
///
/// # Type Parameters
/// * `LR` - LockfileReader implementation
/// * `DS` - DependencySubmitter implementation
/// * `PR` - ProgressReporter implementation
pub struct SubmitDependenciesUseCase<LR, DS, PR> {
    lockfile_reader: LR,
    submitter: DS,
    progress_reporter: PR,
}

impl<LR, DS, PR> SubmitDependenciesUseCase<LR, DS, PR>
where
    LR: LockfileReader,
    DS: DependencySubmitter,
    PR: ProgressReporter,
{
    /// Creates a new SubmitDependenciesUseCase with injected dependencies
    pub fn new(lockfile_reader: LR, submitter: DS, progress_reporter: PR) -> Self {
        Self {
            lockfile_reader,
            submitter,
            progress_reporter,
        }
    }

    /// Executes the use case over every lockfile in the request
    pub fn execute(&self, request: SubmissionRequest) -> Result<SubmissionResponse> {
        if request.lockfiles.is_empty() {
            self.progress_reporter
                .report_error("No Brewfile lock files found, nothing to submit");
            return Ok(SubmissionResponse::default());
        }

        self.progress_reporter
            .report(&format!("Submitting to {}", self.submitter.target()));

        let total = request.lockfiles.len();
        let mut submitted = Vec::with_capacity(total);

        for (index, lockfile) in request.lockfiles.iter().enumerate() {
            self.progress_reporter.report_progress(
                index + 1,
                total,
                Some(&format!("Lockfile found: {}", lockfile.display())),
            );

            let submission = self.process_lockfile(lockfile, &request.submission)?;
            submitted.push(submission);
        }

        let response = SubmissionResponse::new(submitted);
        self.progress_reporter.report_completion(&format!(
            "Done: {} lockfile(s), {} dependencies submitted",
            response.submitted.len(),
            response.total_dependencies()
        ));

        Ok(response)
    }

    fn process_lockfile(
        &self,
        lockfile: &Path,
        submission: &SubmissionMetadata,
    ) -> Result<LockfileSubmission> {
        let parsed = BrewLockfileParser::parse_file(&self.lockfile_reader, lockfile)?;
        self.progress_reporter
            .report_detail(&format!("OS family: {}", parsed.os_family()));
        self.progress_reporter.report_detail(&format!(
            "Dependencies count: {}",
            parsed.dependencies().len()
        ));

        let metadata = SbomGenerator::generate_default_metadata();
        let bom = CycloneDxExporter::export(lockfile, parsed.dependencies(), submission, &metadata);
        self.progress_reporter.report(&format!(
            "Generated BOM {} with {} component(s)",
            bom.serial_number,
            bom.components.len()
        ));

        let receipt = self
            .submitter
            .submit_bom(&bom)
            .with_context(|| format!("Failed to submit dependencies for {}", lockfile.display()))?;

        match receipt.id {
            Some(id) => self
                .progress_reporter
                .report(&format!("Submitted BOM (HTTP {}, snapshot {})", receipt.status, id)),
            None => self.progress_reporter.report("Submitted BOM"),
        }

        Ok(LockfileSubmission {
            lockfile: lockfile.to_path_buf(),
            os_family: parsed.os_family(),
            dependency_count: parsed.dependencies().len(),
            serial_number: bom.serial_number,
            receipt,
        })
    }
}
