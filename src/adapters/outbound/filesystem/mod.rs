/// Filesystem adapters for lockfile discovery, reading and dry-run output
mod file_reader;
mod lockfile_finder;
mod stdout_submitter;

pub use file_reader::FileSystemReader;
pub use lockfile_finder::{LockfileFinder, DEFAULT_LOCKFILE_NAME};
pub use stdout_submitter::StdoutSubmitter;
