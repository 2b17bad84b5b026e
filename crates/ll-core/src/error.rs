//! Error types for the ll-core crate.
//!
//! [`ConfigError`] covers everything that can go wrong before a scan starts:
//! resolving the repository root, reading a config file, and validating the
//! assembled options.

use camino::Utf8PathBuf;

/// Errors that can occur while assembling or validating configuration.
///
/// # Examples
///
/// ```
/// use ll_core::ConfigError;
///
/// let error = ConfigError::invalid_option("phrase", "must not be empty");
/// assert!(error.to_string().contains("phrase"));
///
/// fn option_name(err: &ConfigError) -> Option<&str> {
///     match err {
///         ConfigError::InvalidOption { option, .. } => Some(option),
///         ConfigError::InvalidPath { .. }
///         | ConfigError::Read { .. }
///         | ConfigError::Parse { .. } => None,
///     }
/// }
/// assert_eq!(option_name(&error), Some("phrase"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The provided path is invalid or cannot be represented as UTF-8.
    #[error("invalid path '{path}': {reason}")]
    InvalidPath {
        /// The offending path, lossily converted for display.
        path: Utf8PathBuf,
        /// Why the path was rejected.
        reason: String,
    },

    /// A configuration option has an invalid value.
    #[error("invalid configuration option '{option}': {reason}")]
    InvalidOption {
        /// The name of the option.
        option: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// The configuration file could not be read.
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`Config`](crate::Config).
    #[error("failed to parse configuration file {path}: {source}")]
    Parse {
        /// Path of the configuration file.
        path: Utf8PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// Creates a new [`ConfigError::InvalidOption`] error.
    #[inline]
    pub fn invalid_option(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            option: option.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new [`ConfigError::InvalidPath`] error.
    #[inline]
    pub fn invalid_path(path: impl Into<Utf8PathBuf>, reason: impl Into<String>) -> Self {
        Self::InvalidPath {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_path_display() {
        let error = ConfigError::invalid_path("/", "has no parent directory");
        let msg = error.to_string();
        assert!(msg.contains("'/'"));
        assert!(msg.contains("no parent"));
    }

    #[test]
    fn test_invalid_option_display() {
        let error = ConfigError::invalid_option("content_prefix", "must not be empty");
        let msg = error.to_string();
        assert!(msg.contains("content_prefix"));
        assert!(msg.contains("must not be empty"));
    }

    #[test]
    fn test_read_error_keeps_source() {
        use std::error::Error as _;

        let error = ConfigError::Read {
            path: Utf8PathBuf::from("lint.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(error.to_string().contains("lint.json"));
        assert!(error.source().is_some());
    }
}
