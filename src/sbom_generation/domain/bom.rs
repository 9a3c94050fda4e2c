//! CycloneDX 1.6 document model.
//!
//! Field names follow the CycloneDX JSON schema. Optional members are
//! skipped when absent so unknown values never show up as placeholders.

use serde::{Deserialize, Serialize};

pub const BOM_FORMAT: &str = "CycloneDX";
pub const SPEC_VERSION: &str = "1.6";

/// Property name carrying the commit SHA in `metadata.properties`
pub const SHA_PROPERTY: &str = "github:sha";
/// Property name carrying the commit ref in `metadata.properties`
pub const REF_PROPERTY: &str = "github:ref";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bom {
    #[serde(rename = "bomFormat")]
    pub bom_format: String,
    #[serde(rename = "specVersion")]
    pub spec_version: String,
    #[serde(rename = "serialNumber")]
    pub serial_number: String,
    pub version: u32,
    pub metadata: BomMetadata,
    pub components: Vec<Component>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BomMetadata {
    pub timestamp: String,
    pub tools: Vec<Tool>,
    pub component: Component,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<Property>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub component_type: String,
    #[serde(rename = "bom-ref")]
    pub bom_ref: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purl: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub value: String,
}

impl Bom {
    /// Value of a `metadata.properties` entry, if present
    pub fn property(&self, name: &str) -> Option<&str> {
        self.metadata
            .properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }
}
