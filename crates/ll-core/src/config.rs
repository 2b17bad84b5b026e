//! Configuration structures for lorem-lint.
//!
//! - [`LintConfig`] - what to scan and which phrase to look for
//! - [`GitHubConfig`] - where the pull-request files endpoint lives
//! - [`Config`] - root configuration combining both
//!
//! Every struct is `#[serde(default)]`, so a config file only needs the
//! fields it wants to override. Defaults match the Turing Way book layout.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Phrase that must not appear in finished content.
pub const DEFAULT_PHRASE: &str = "lorem ipsum";

/// Repository-relative prefix of the documentation sources.
pub const DEFAULT_CONTENT_PREFIX: &str = "book/content";

/// Base URL of the GitHub REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Owner of the repository whose pull requests are inspected.
pub const DEFAULT_OWNER: &str = "alan-turing-institute";

/// Name of the repository whose pull requests are inspected.
pub const DEFAULT_REPO: &str = "the-turing-way";

/// Settings for the phrase scan itself.
///
/// # Examples
///
/// ```
/// use ll_core::LintConfig;
/// use camino::Utf8PathBuf;
///
/// let config = LintConfig {
///     repo_root: Utf8PathBuf::from("/work/the-turing-way"),
///     ..LintConfig::default()
/// };
/// assert_eq!(config.content_dir().as_str(), "/work/the-turing-way/book/content");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    /// Repository root. Pull-request paths are resolved against it.
    pub repo_root: Utf8PathBuf,

    /// Repository-relative prefix that scopes which files are scanned.
    pub content_prefix: String,

    /// The undesired phrase, matched case-insensitively.
    pub phrase: String,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            repo_root: Utf8PathBuf::new(),
            content_prefix: DEFAULT_CONTENT_PREFIX.to_owned(),
            phrase: DEFAULT_PHRASE.to_owned(),
        }
    }
}

impl LintConfig {
    /// Directory walked when no pull request is given.
    #[must_use]
    pub fn content_dir(&self) -> Utf8PathBuf {
        self.repo_root.join(&self.content_prefix)
    }
}

/// Location of the pull-request files endpoint.
///
/// # Examples
///
/// ```
/// use ll_core::GitHubConfig;
///
/// let config = GitHubConfig::default();
/// assert_eq!(config.owner, "alan-turing-institute");
/// assert_eq!(config.repo, "the-turing-way");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Base URL of the REST API, without a trailing path.
    pub api_base_url: String,

    /// Repository owner (user or organisation).
    pub owner: String,

    /// Repository name.
    pub repo: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            owner: DEFAULT_OWNER.to_owned(),
            repo: DEFAULT_REPO.to_owned(),
        }
    }
}

/// Root configuration for lorem-lint.
///
/// # Examples
///
/// ```
/// use ll_core::Config;
///
/// let config: Config = serde_json::from_str(r#"{"lint": {"phrase": "TODO"}}"#).unwrap();
/// assert_eq!(config.lint.phrase, "TODO");
/// assert_eq!(config.lint.content_prefix, "book/content");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scan settings.
    pub lint: LintConfig,

    /// Pull-request API settings.
    pub github: GitHubConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json_file(path: &Utf8Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;

        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_owned(),
            source,
        })
    }

    /// Rejects option values that would make a scan meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // An empty phrase would match every file.
        if self.lint.phrase.is_empty() {
            return Err(ConfigError::invalid_option("phrase", "must not be empty"));
        }
        if self.lint.content_prefix.is_empty() {
            return Err(ConfigError::invalid_option(
                "content_prefix",
                "must not be empty",
            ));
        }

        for (option, value) in [
            ("api_base_url", &self.github.api_base_url),
            ("owner", &self.github.owner),
            ("repo", &self.github.repo),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid_option(option, "must not be empty"));
            }
        }

        Ok(())
    }
}
