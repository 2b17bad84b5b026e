//! Error types for the ll-scanner crate.
//!
//! Every [`ScanError`] aborts the run. The only problem tolerated silently is
//! invalid UTF-8 inside a file, which is dropped during decoding.

use camino::Utf8PathBuf;
use ll_core::PullRequestId;
use ll_github::GitHubError;

/// Errors that can occur while resolving or reading candidate files.
///
/// # Examples
///
/// ```
/// use ll_scanner::ScanError;
///
/// fn describe(err: &ScanError) -> String {
///     match err {
///         ScanError::Walk(e) => format!("walk: {e}"),
///         ScanError::Read { path, .. } => format!("read: {path}"),
///         ScanError::MissingDirectory(dir) => format!("missing: {dir}"),
///         ScanError::NonUtf8Path(p) => format!("non-utf8: {}", p.display()),
///         ScanError::ChangedFiles(e) => format!("pull request: {e}"),
///         ScanError::NoSource(id) => format!("no source for #{id}"),
///     }
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// Failed to walk the content directory.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Failed to read a candidate file.
    #[error("failed to read file {path}: {source}")]
    Read {
        /// The file that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The directory to scan does not exist or is not a directory.
    #[error("content directory does not exist: {0}")]
    MissingDirectory(Utf8PathBuf),

    /// A walked path is not valid UTF-8.
    #[error("path is not valid UTF-8: {}", _0.display())]
    NonUtf8Path(std::path::PathBuf),

    /// The pull request's changed files could not be listed.
    #[error("failed to list pull request files: {0}")]
    ChangedFiles(#[from] GitHubError),

    /// A pull request was scanned without a changed-files source.
    #[error("no changed-files source for pull request #{0}")]
    NoSource(PullRequestId),
}

impl ScanError {
    /// Creates a new [`ScanError::Read`] error.
    #[inline]
    pub fn read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_scan_error_read() {
        let err = ScanError::read(
            "book/content/a.md",
            io::Error::new(io::ErrorKind::NotFound, "not found"),
        );
        assert!(matches!(&err, ScanError::Read { path, .. } if path.as_str() == "book/content/a.md"));
        assert!(err.to_string().contains("book/content/a.md"));
    }

    #[test]
    fn test_scan_error_missing_directory() {
        let err = ScanError::MissingDirectory(Utf8PathBuf::from("book/content"));
        assert_eq!(
            err.to_string(),
            "content directory does not exist: book/content"
        );
    }

    #[test]
    fn test_scan_error_no_source() {
        let err = ScanError::NoSource(PullRequestId::new(17));
        assert_eq!(err.to_string(), "no changed-files source for pull request #17");
    }
}
