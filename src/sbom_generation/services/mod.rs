mod brew_lockfile_parser;
mod cyclonedx_exporter;
mod sbom_generator;

pub use brew_lockfile_parser::BrewLockfileParser;
pub use cyclonedx_exporter::CycloneDxExporter;
pub use sbom_generator::{SbomGenerator, TOOL_NAME};
