//! Error types for the ll-github crate.

/// Errors from listing a pull request's changed files.
///
/// None of these are retried: the caller aborts the run.
#[derive(Debug, thiserror::Error)]
pub enum GitHubError {
    /// The request could not be sent or the body could not be received.
    #[error("request to {url} failed: {source}")]
    Http {
        /// The requested URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a non-success status code.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// The requested URL.
        url: String,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body is not a JSON array of file objects.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl GitHubError {
    /// Creates a new [`GitHubError::Http`] error.
    #[inline]
    pub fn http(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.into(),
            source,
        }
    }

    /// The HTTP status code, if the server answered at all.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http { .. } | Self::Decode(_) | Self::Client(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = GitHubError::Status {
            url: "https://api.github.com/repos/o/r/pulls/1/files".to_owned(),
            status: 404,
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.to_string().contains("HTTP 404"));
        assert!(err.to_string().contains("/pulls/1/files"));
    }

    #[test]
    fn test_decode_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = GitHubError::from(json_err);
        assert!(err.status().is_none());
        assert!(err.to_string().starts_with("unexpected response body"));
    }
}
