/// Data Transfer Objects for application layer
///
/// DTOs carry data between the CLI and the use case, keeping the
/// domain layer isolated.
mod submission_request;
mod submission_response;

pub use submission_request::SubmissionRequest;
pub use submission_response::{LockfileSubmission, SubmissionResponse};
