use clap::Parser;
use std::path::PathBuf;

/// Submit Homebrew lockfile dependencies to GitHub as CycloneDX SBOMs
#[derive(Parser, Debug)]
#[command(name = "brewlock-sbom")]
#[command(version)]
#[command(
    about = "Submit Homebrew Brewfile.lock.json dependencies to GitHub's dependency graph",
    long_about = None
)]
pub struct Args {
    /// Enable debug logging (also enabled by a non-empty DEBUG variable)
    #[arg(long)]
    pub debug: bool,

    /// Path to a single Brewfile.lock.json (skips discovery)
    #[arg(short = 'i', long, value_name = "PATH")]
    pub brewlock: Option<PathBuf>,

    /// Directory searched recursively for lockfiles
    #[arg(short = 'd', long, value_name = "DIR", default_value = ".")]
    pub directory: PathBuf,

    /// Commit SHA the dependencies belong to
    #[arg(short = 's', long, env = "GITHUB_SHA")]
    pub sha: Option<String>,

    /// Commit ref the dependencies belong to (e.g. refs/heads/main)
    #[arg(short = 'r', long = "ref", env = "GITHUB_REF", value_name = "REF")]
    pub git_ref: Option<String>,

    /// Target repository in owner/repo form
    #[arg(
        short = 'R',
        long,
        env = "GITHUB_REPOSITORY",
        value_name = "OWNER/REPO"
    )]
    pub github_repository: Option<String>,

    /// GitHub API root (defaults to https://api.github.com)
    #[arg(long, env = "GITHUB_API_URL", value_name = "URL")]
    pub github_instance: Option<String>,

    /// GitHub API token
    #[arg(short = 't', long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Path to a brewlock-sbom.config.yml file
    #[arg(short = 'c', long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the generated BOMs to stdout instead of submitting them
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
