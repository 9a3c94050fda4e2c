pub mod bom;
pub mod brew_lockfile;
pub mod dependency;
pub mod package_url;
pub mod repository_id;
pub mod sbom_metadata;

pub use bom::{Bom, BomMetadata, Component, Property, Tool};
pub use brew_lockfile::{BrewLockfile, OsFamily};
pub use dependency::{Dependency, BREW_MANAGER};
pub use package_url::package_url;
pub use repository_id::RepositoryId;
pub use sbom_metadata::{SbomMetadata, SubmissionMetadata};
