//! Placeholder-phrase scanner for Markdown content.
//!
//! This crate checks documentation sources for an undesired phrase
//! (by default "lorem ipsum"), either across a whole content directory or
//! only in the files a pull request touches.
//!
//! # Overview
//!
//! The main entry point is [`Scanner`], which combines:
//!
//! - [`FileWalker`]: lists every file under the content directory
//! - [`ChangedFilesSource`]: lists a pull request's files (over HTTP by default)
//! - [`filter_by_prefix`]: scopes pull-request files to the content prefix
//! - [`decode_lossy`], [`strip_comments`], [`contains_phrase`]: the per-file check
//!
//! # Example
//!
//! ```no_run
//! use ll_core::{GitHubConfig, LintConfig, ScanTarget};
//! use ll_github::PullRequestClient;
//! use ll_scanner::Scanner;
//!
//! let config = LintConfig::default();
//! let target = ScanTarget::DirectoryRoot(config.content_dir());
//! let scanner = Scanner::new(config, PullRequestClient::new(GitHubConfig::default())?);
//!
//! let report = scanner.scan(&target)?;
//! for name in &report.matches {
//!     println!("{name}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! ```text
//! Scanner::scan(target)
//!     │
//!     ├── DirectoryRoot ── FileWalker (ignore crate, no filters)
//!     │
//!     ├── PullRequest ──── ChangedFilesSource ── filter_by_prefix
//!     │
//!     └── per file: read ─► decode_lossy ─► strip_comments ─► contains_phrase
//! ```
//!
//! Everything runs sequentially on the calling thread.

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod filter;
mod source;
mod text;
mod walker;

pub use error::ScanError;
pub use filter::filter_by_prefix;
pub use source::ChangedFilesSource;
pub use text::{contains_phrase, decode_lossy, strip_comments};
pub use walker::FileWalker;

use ll_core::{CandidateFile, LintConfig, ScanReport, ScanTarget};
use tracing::{debug, info, warn};

/// Scans candidate files for the configured phrase.
///
/// # Examples
///
/// ```no_run
/// use ll_core::{GitHubConfig, LintConfig, PullRequestId, ScanTarget};
/// use ll_github::PullRequestClient;
/// use ll_scanner::Scanner;
/// use camino::Utf8PathBuf;
///
/// let config = LintConfig {
///     repo_root: Utf8PathBuf::from("/work/the-turing-way"),
///     ..LintConfig::default()
/// };
/// let scanner = Scanner::new(config, PullRequestClient::new(GitHubConfig::default())?);
///
/// let report = scanner.scan(&ScanTarget::PullRequest(PullRequestId::new(1234)))?;
/// assert!(report.files_scanned >= report.matches.len());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<S> {
    config: LintConfig,
    source: S,
}

impl<S: ChangedFilesSource> Scanner<S> {
    /// Creates a scanner that lists pull-request files through `source`.
    #[must_use]
    pub fn new(config: LintConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Checks every candidate of `target` and reports the ones containing the phrase.
    ///
    /// Files are read one at a time, in enumeration order, which is also the
    /// order of [`ScanReport::matches`].
    ///
    /// # Errors
    ///
    /// Any failure to list or read a file aborts the scan.
    pub fn scan(&self, target: &ScanTarget) -> Result<ScanReport, ScanError> {
        info!(%target, phrase = %self.config.phrase, "Starting scan");

        let candidates = self.candidates(target)?;
        info!(count = candidates.len(), "Collected candidate files");

        let mut report = ScanReport::default();
        for file in &candidates {
            let matched = self.check_file(file)?;
            if matched {
                warn!(path = %file.path, "Found placeholder text");
            } else {
                debug!(path = %file.path, "Clean");
            }
            report.record(file.name.as_str(), matched);
        }

        info!(
            scanned = report.files_scanned,
            matched = report.matches.len(),
            "Scan completed"
        );

        Ok(report)
    }

    /// Resolves `target` into the files that will be read.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::MissingDirectory`] or [`ScanError::Walk`] for a
    /// directory target, and [`ScanError::ChangedFiles`] or
    /// [`ScanError::NoSource`] if the pull request's files cannot be listed.
    pub fn candidates(&self, target: &ScanTarget) -> Result<Vec<CandidateFile>, ScanError> {
        match target {
            ScanTarget::DirectoryRoot(root) => {
                let paths = FileWalker::new(root)?.collect_paths()?;
                Ok(paths.into_iter().map(CandidateFile::from_walk).collect())
            }
            ScanTarget::PullRequest(id) => {
                let changed = self.source.changed_files(*id)?;
                let total = changed.len();
                let kept = filter_by_prefix(changed, &self.config.content_prefix);
                debug!(
                    total,
                    kept = kept.len(),
                    prefix = %self.config.content_prefix,
                    "Filtered pull request files"
                );

                Ok(kept
                    .iter()
                    .map(|name| CandidateFile::from_pull_request(&self.config.repo_root, name))
                    .collect())
            }
        }
    }

    /// Returns `true` if `file` contains the phrase outside HTML comments.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Read`] if the file cannot be read.
    pub fn check_file(&self, file: &CandidateFile) -> Result<bool, ScanError> {
        let bytes = std::fs::read(&file.path).map_err(|e| ScanError::read(&file.path, e))?;
        let text = decode_lossy(&bytes);
        let visible = strip_comments(&text);

        Ok(contains_phrase(&visible, &self.config.phrase))
    }

    /// Returns the scan configuration.
    #[must_use]
    pub fn config(&self) -> &LintConfig {
        &self.config
    }
}
