use crate::sbom_generation::domain::SbomMetadata;
use chrono::{SecondsFormat, Utc};

/// Name reported in the `metadata.tools` block of every BOM
pub const TOOL_NAME: &str = "brewlock-sbom";

/// SbomGenerator service for generating SBOM metadata
///
/// This is the only place that reads the clock; the exporter itself stays
/// a pure function of its inputs.
pub struct SbomGenerator;

impl SbomGenerator {
    /// Generates SBOM metadata stamped with the current UTC time
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> SbomMetadata {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);

        SbomMetadata::new(
            timestamp,
            tool_name.to_string(),
            tool_version.to_string(),
        )
    }

    /// Generates SBOM metadata with this tool's name and compile-time version
    pub fn generate_default_metadata() -> SbomMetadata {
        Self::generate_metadata(TOOL_NAME, env!("CARGO_PKG_VERSION"))
    }
}
