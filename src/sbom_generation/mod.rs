/// Domain layer - dependency model, package URLs and SBOM metadata
pub mod domain;
pub mod services;
