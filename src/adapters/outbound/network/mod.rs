/// Network adapters for external API calls
mod github_client;

pub use github_client::{GitHubDependencySubmitter, DEFAULT_API_URL};
