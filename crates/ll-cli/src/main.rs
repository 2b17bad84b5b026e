//! CLI entry point for lorem-lint.
//!
//! Fails a CI job when placeholder text ("lorem ipsum") is left in the
//! book's Markdown sources.
//!
//! # Usage
//!
//! ```bash
//! # Scan the whole content directory (repository root = parent of the cwd)
//! lorem-lint
//!
//! # Scan only the content files changed by pull request 1234
//! lorem-lint --pull-request 1234
//!
//! # Explicit repository root and a custom phrase
//! lorem-lint --root ../the-turing-way --phrase "TODO"
//! ```
//!
//! Exit status is 0 when no file contains the phrase and 1 when some do; the
//! offending files are listed on stderr.

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;
use std::process::ExitCode;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ll_core::{Config, ConfigError, GitHubConfig, LintOutcome, PullRequestId, ScanTarget};
use ll_github::PullRequestClient;
use ll_scanner::Scanner;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Check Markdown content for leftover "lorem ipsum" placeholder text.
#[derive(Parser)]
#[command(name = "lorem-lint", version, about, long_about = None)]
struct Cli {
    /// Only scan the content files changed by this pull request.
    #[arg(long, value_name = "PR_NUMBER")]
    pull_request: Option<PullRequestId>,

    /// Repository root.
    ///
    /// Defaults to the parent of the current working directory.
    #[arg(long, env = "LOREM_LINT_ROOT")]
    root: Option<Utf8PathBuf>,

    /// JSON configuration file.
    #[arg(long, env = "LOREM_LINT_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Phrase to look for (case-insensitive).
    #[arg(long)]
    phrase: Option<String>,

    /// Repository-relative content prefix.
    #[arg(long)]
    prefix: Option<String>,

    /// Enable verbose logging (debug level).
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects `RUST_LOG` if set. Otherwise uses `debug` with `--verbose`, or
/// `info` by default. Logs go to stderr alongside the failure listing.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(format!("{level},hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn"))
    });

    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Parent of the current working directory.
fn default_repo_root() -> color_eyre::Result<Utf8PathBuf> {
    let cwd = std::env::current_dir()?;
    let cwd = Utf8PathBuf::from_path_buf(cwd).map_err(|path| {
        ConfigError::invalid_path(path.to_string_lossy().into_owned(), "not valid UTF-8")
    })?;

    let root = cwd
        .parent()
        .map(Utf8Path::to_owned)
        .ok_or_else(|| ConfigError::invalid_path(cwd.clone(), "has no parent directory"))?;

    Ok(root)
}

/// Builds a [`Config`] from defaults, the optional config file, and CLI flags.
///
/// Later sources win. The repository root falls back to the parent of the
/// working directory only when neither the file nor the flags set it.
fn build_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!(%path, "Loading configuration file");
            Config::from_json_file(path)?
        }
        None => Config::default(),
    };

    if let Some(root) = &cli.root {
        config.lint.repo_root.clone_from(root);
    } else if config.lint.repo_root.as_str().is_empty() {
        config.lint.repo_root = default_repo_root()?;
    }
    if let Some(phrase) = &cli.phrase {
        config.lint.phrase.clone_from(phrase);
    }
    if let Some(prefix) = &cli.prefix {
        config.lint.content_prefix.clone_from(prefix);
    }

    config.validate()?;
    Ok(config)
}

// =============================================================================
// COMMAND IMPLEMENTATION
// =============================================================================

/// HTTP client for pull-request targets. Directory scans never touch the network.
fn client_for(
    target: &ScanTarget,
    github: GitHubConfig,
) -> color_eyre::Result<Option<PullRequestClient>> {
    match target {
        ScanTarget::PullRequest(_) => Ok(Some(PullRequestClient::new(github)?)),
        ScanTarget::DirectoryRoot(_) => Ok(None),
    }
}

/// Runs one scan and returns whether it passed.
fn run(cli: &Cli) -> color_eyre::Result<LintOutcome> {
    let config = build_config(cli)?;
    let target = ScanTarget::select(cli.pull_request, &config.lint.content_dir());
    info!(repo_root = %config.lint.repo_root, %target, "Checking for placeholder text");

    let client = client_for(&target, config.github)?;
    let scanner = Scanner::new(config.lint, client);
    let report = scanner.scan(&target)?;

    Ok(report.into_outcome())
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);

    match run(&cli)? {
        LintOutcome::Clean => {
            info!("No placeholder text found");
            Ok(ExitCode::SUCCESS)
        }
        failed @ LintOutcome::Failed(_) => {
            let stderr = std::io::stderr();
            let mut handle = stderr.lock();
            writeln!(handle, "{failed}")?;
            Ok(ExitCode::FAILURE)
        }
    }
}
