use crate::sbom_generation::domain::bom::{
    BOM_FORMAT, REF_PROPERTY, SHA_PROPERTY, SPEC_VERSION,
};
use crate::sbom_generation::domain::{
    package_url, Bom, BomMetadata, Component, Dependency, Property, SbomMetadata,
    SubmissionMetadata, Tool,
};
use crate::shared::Result;
use std::collections::HashMap;
use std::path::Path;
use uuid::Uuid;

/// CycloneDxExporter: turns parsed dependencies into a CycloneDX 1.6 BOM
///
/// Export is a pure function of its arguments. The clock is read by
/// `SbomGenerator` beforehand and handed in through `SbomMetadata`, and
/// the serial number is derived from the content, so identical inputs
/// produce identical documents.
pub struct CycloneDxExporter;

impl CycloneDxExporter {
    pub fn export(
        source: &Path,
        dependencies: &[Dependency],
        submission: &SubmissionMetadata,
        metadata: &SbomMetadata,
    ) -> Bom {
        let source_name = Self::source_name(source);
        let components = Self::build_components(dependencies);

        Bom {
            bom_format: BOM_FORMAT.to_string(),
            spec_version: SPEC_VERSION.to_string(),
            serial_number: Self::serial_number(&source_name, submission, &components),
            version: 1,
            metadata: BomMetadata {
                timestamp: metadata.timestamp().to_string(),
                tools: vec![Tool {
                    name: metadata.tool_name().to_string(),
                    version: metadata.tool_version().to_string(),
                }],
                component: Component {
                    component_type: "file".to_string(),
                    bom_ref: source_name.clone(),
                    name: source_name,
                    version: None,
                    purl: None,
                },
                properties: Self::build_properties(submission),
            },
            components,
        }
    }

    /// Serializes a BOM as pretty-printed JSON
    pub fn to_json(bom: &Bom) -> Result<String> {
        serde_json::to_string_pretty(bom).map_err(Into::into)
    }

    /// Lockfile path as recorded in the document, without a leading `./`
    fn source_name(source: &Path) -> String {
        source
            .strip_prefix(".")
            .unwrap_or(source)
            .to_string_lossy()
            .into_owned()
    }

    /// One library component per dependency, order preserved.
    ///
    /// Repeated purls get a `#<n>` suffix on their bom-ref because bom-refs
    /// must be unique within a document.
    fn build_components(dependencies: &[Dependency]) -> Vec<Component> {
        let mut seen: HashMap<String, usize> = HashMap::new();

        dependencies
            .iter()
            .map(|dependency| {
                let purl = package_url(dependency);
                let occurrence = seen.entry(purl.clone()).or_insert(0);
                *occurrence += 1;
                let bom_ref = if *occurrence == 1 {
                    purl.clone()
                } else {
                    format!("{}#{}", purl, occurrence)
                };

                Component {
                    component_type: "library".to_string(),
                    bom_ref,
                    name: dependency.name().to_string(),
                    version: dependency.version().map(str::to_string),
                    purl: Some(purl),
                }
            })
            .collect()
    }

    fn build_properties(submission: &SubmissionMetadata) -> Vec<Property> {
        [
            (SHA_PROPERTY, submission.sha()),
            (REF_PROPERTY, submission.git_ref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            value.map(|value| Property {
                name: name.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
    }

    fn serial_number(
        source_name: &str,
        submission: &SubmissionMetadata,
        components: &[Component],
    ) -> String {
        let mut seed = format!(
            "{}\n{}\n{}",
            source_name,
            submission.sha().unwrap_or_default(),
            submission.git_ref().unwrap_or_default()
        );
        for component in components {
            seed.push('\n');
            seed.push_str(&component.bom_ref);
        }

        format!("urn:uuid:{}", Uuid::new_v5(&Uuid::NAMESPACE_URL, seed.as_bytes()))
    }
}
