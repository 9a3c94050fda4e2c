/// Console adapters for user-facing progress output
mod progress_reporter;

pub use progress_reporter::TracingProgressReporter;
