/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the file system, the network and the log.
pub mod dependency_submitter;
pub mod lockfile_locator;
pub mod lockfile_reader;
pub mod progress_reporter;

pub use dependency_submitter::{DependencySubmitter, SubmissionReceipt};
pub use lockfile_locator::LockfileLocator;
pub use lockfile_reader::LockfileReader;
pub use progress_reporter::ProgressReporter;
