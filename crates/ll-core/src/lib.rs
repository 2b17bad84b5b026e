//! Core types, configuration, and errors for lorem-lint.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - [`ConfigError`] for configuration loading and validation failures
//! - Configuration structures ([`Config`], [`LintConfig`], [`GitHubConfig`])
//! - Domain types ([`ScanTarget`], [`CandidateFile`], [`ScanReport`], [`LintOutcome`])

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod types;

pub use config::{
    Config, DEFAULT_API_BASE_URL, DEFAULT_CONTENT_PREFIX, DEFAULT_OWNER, DEFAULT_PHRASE,
    DEFAULT_REPO, GitHubConfig, LintConfig,
};
pub use error::ConfigError;
pub use types::{
    CandidateFile, FAILURE_HEADER, LintOutcome, PullRequestId, ScanReport, ScanTarget,
};
