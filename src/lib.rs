//! brewlock-sbom - submit Homebrew lockfile dependencies to GitHub
//!
//! This library reads `Brewfile.lock.json` files, turns their formulae and
//! casks into a CycloneDX 1.6 Software Bill of Materials, and posts that
//! document to GitHub's dependency-submission API.
//!
//! # Architecture
//!
//! - **Domain Layer** (`sbom_generation`): dependency model, package URLs,
//!   the lockfile parser and the CycloneDX exporter
//! - **Application Layer** (`application`): the submission use case
//! - **Ports** (`ports`): interfaces for file access, submission and logging
//! - **Adapters** (`adapters`): file system, GitHub client, tracing reporter
//! - **Shared** (`shared`): error types and the `Result` alias
//!
//! # Example
//!
//! ```no_run
//! use brewlock_sbom::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let submitter = GitHubDependencySubmitter::new(
//!     "octo-org/octo-repo",
//!     Some("ghp_example"),
//!     None,
//! )?;
//!
//! let use_case = SubmitDependenciesUseCase::new(
//!     FileSystemReader::new(),
//!     submitter,
//!     TracingProgressReporter::new(),
//! );
//!
//! let request = SubmissionRequest::new(
//!     vec![PathBuf::from("Brewfile.lock.json")],
//!     SubmissionMetadata::new(Some("ffac537e".to_string()), Some("refs/heads/main".to_string())),
//! );
//! let response = use_case.execute(request)?;
//! println!("{} dependencies submitted", response.total_dependencies());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod sbom_generation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::TracingProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, LockfileFinder, StdoutSubmitter,
    };
    pub use crate::adapters::outbound::network::GitHubDependencySubmitter;
    pub use crate::application::dto::{LockfileSubmission, SubmissionRequest, SubmissionResponse};
    pub use crate::application::use_cases::SubmitDependenciesUseCase;
    pub use crate::ports::outbound::{
        DependencySubmitter, LockfileLocator, LockfileReader, ProgressReporter, SubmissionReceipt,
    };
    pub use crate::sbom_generation::domain::{
        package_url, Bom, BrewLockfile, Dependency, OsFamily, RepositoryId, SbomMetadata,
        SubmissionMetadata,
    };
    pub use crate::sbom_generation::services::{
        BrewLockfileParser, CycloneDxExporter, SbomGenerator,
    };
    pub use crate::shared::Result;
}
