use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every lockfile was parsed, exported and submitted
    Success = 0,
    /// Lockfile, configuration or submission failure
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Application-specific errors for lockfile parsing and dependency submission.
///
/// Errors travel as `anyhow::Error`; callers that need to branch on the kind
/// use `downcast_ref::<SbomError>()`.
#[derive(Debug, Error)]
pub enum SbomError {
    #[error("Brewfile lock file not found: {path}\n\n💡 Hint: {suggestion}")]
    LockfileNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse Brewfile lock file: {path}\nDetails: {details}\n\n💡 Hint: Regenerate it with `brew bundle` and verify it is valid JSON")]
    LockfileParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Invalid repository identifier: '{repository}'\nReason: {reason}\n\n💡 Hint: Use the owner/repo form, e.g. octo-org/octo-repo")]
    InvalidRepository { repository: String, reason: String },

    #[error("No target repository configured\n\n💡 Hint: Pass --github-repository or set GITHUB_REPOSITORY")]
    MissingRepository,

    #[error("Invalid GitHub API URL: '{url}'\nReason: {reason}")]
    InvalidApiUrl { url: String, reason: String },

    #[error("Invalid config file: {path}\nDetails: {details}")]
    ConfigFileError { path: PathBuf, details: String },

    #[error("GitHub token is missing\n\n💡 Hint: {hint}")]
    MissingToken { hint: String },

    #[error("Dependency submission to {endpoint} failed with HTTP {status}\nResponse: {body}")]
    SubmissionFailed {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Dependency submission request to {endpoint} could not be sent\nDetails: {details}")]
    SubmissionRequestFailed { endpoint: String, details: String },
}

impl SbomError {
    /// HTTP status carried by a failed submission, if any
    pub fn http_status(&self) -> Option<u16> {
        match self {
            SbomError::SubmissionFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
