//! Client for the GitHub pull-request files endpoint.
//!
//! lorem-lint uses this crate to find out which files a pull request touches,
//! so that only those are scanned. The client is blocking and makes exactly
//! one unauthenticated request per call.
//!
//! # Example
//!
//! ```no_run
//! use ll_core::{GitHubConfig, PullRequestId};
//! use ll_github::PullRequestClient;
//!
//! let client = PullRequestClient::new(GitHubConfig::default())?;
//! let files = client.fetch_changed_files(PullRequestId::new(1234))?;
//! # Ok::<(), ll_github::GitHubError>(())
//! ```
//!
//! # Crate Dependencies
//!
//! ```text
//! ll-cli ──► ll-scanner ──► ll-github ──► ll-core
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod client;
mod error;

pub use client::{PullRequestClient, USER_AGENT, parse_changed_files};
pub use error::GitHubError;
