use crate::ports::outbound::{DependencySubmitter, SubmissionReceipt};
use crate::sbom_generation::domain::Bom;
use crate::sbom_generation::services::CycloneDxExporter;
use crate::shared::Result;
use std::io::{self, Write};

/// StdoutSubmitter adapter used for `--dry-run`
///
/// Prints each BOM to stdout instead of sending it anywhere, so the
/// document can be inspected or piped to another tool.
pub struct StdoutSubmitter;

impl StdoutSubmitter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutSubmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencySubmitter for StdoutSubmitter {
    fn target(&self) -> String {
        "stdout (dry run)".to_string()
    }

    fn submit_bom(&self, bom: &Bom) -> Result<SubmissionReceipt> {
        let json = CycloneDxExporter::to_json(bom)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", json)?;
        stdout.flush()?;
        Ok(SubmissionReceipt::new(0, None, Some("dry run".to_string())))
    }
}
