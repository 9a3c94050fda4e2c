mod cli;
mod config;

use brewlock_sbom::prelude::*;
use brewlock_sbom::shared::error::{ExitCode, SbomError};
use cli::Args;
use config::{debug_requested, discover_config, load_config_from_path, Settings};
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    // Parse command-line arguments (clap exits with code 2 on invalid input)
    let args = Args::parse_args();

    init_logging(debug_requested(args.debug, std::env::var_os("DEBUG")));

    if let Err(e) = run(args) {
        tracing::error!("{:#}", e);
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Installs the stderr subscriber. `RUST_LOG` overrides the default filter.
fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,brewlock_sbom={}", level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}

fn run(args: Args) -> Result<()> {
    let config_file = match &args.config {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(&args.directory)?.unwrap_or_default(),
    };
    let settings = Settings::resolve(args, config_file);

    if settings.dry_run {
        return submit_all(StdoutSubmitter::new(), &settings);
    }

    let repository = settings
        .github_repository
        .as_deref()
        .ok_or(SbomError::MissingRepository)?;
    let submitter = GitHubDependencySubmitter::new(
        repository,
        settings.github_token.as_deref(),
        Some(&settings.github_instance),
    )?;
    tracing::info!("Target repository: {}", submitter.repository());

    submit_all(submitter, &settings)
}

fn submit_all<DS: DependencySubmitter>(submitter: DS, settings: &Settings) -> Result<()> {
    let lockfiles = match &settings.brewlock {
        Some(path) => vec![path.clone()],
        None => LockfileFinder::new(settings.lockfile_name.as_str())
            .find_lockfiles(&settings.directory)?,
    };

    let request = SubmissionRequest::new(
        lockfiles,
        SubmissionMetadata::new(settings.sha.clone(), settings.git_ref.clone()),
    );

    let use_case = SubmitDependenciesUseCase::new(
        FileSystemReader::new(),
        submitter,
        TracingProgressReporter::new(),
    );
    use_case.execute(request)?;

    Ok(())
}
