/// Mock implementations for testing
mod mock_dependency_submitter;
mod mock_lockfile_reader;
mod mock_progress_reporter;

pub use mock_dependency_submitter::MockDependencySubmitter;
pub use mock_lockfile_reader::MockLockfileReader;
pub use mock_progress_reporter::MockProgressReporter;
