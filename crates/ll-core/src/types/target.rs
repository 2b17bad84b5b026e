//! Scan targets and the candidate files they resolve to.

use std::fmt;
use std::str::FromStr;

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Number of a pull request on the hosting platform.
///
/// # Examples
///
/// ```
/// use ll_core::PullRequestId;
///
/// let id: PullRequestId = "1234".parse().unwrap();
/// assert_eq!(id.as_u64(), 1234);
/// assert_eq!(id.to_string(), "1234");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PullRequestId(pub u64);

impl PullRequestId {
    /// Creates a new pull-request id.
    #[inline]
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the inner number.
    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl From<u64> for PullRequestId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for PullRequestId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl fmt::Display for PullRequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a single run scans.
///
/// Exactly one of the two is chosen per invocation, based on whether a
/// pull-request number was supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    /// Only the files changed by this pull request, scoped to the content prefix.
    PullRequest(PullRequestId),

    /// Every file below this directory.
    DirectoryRoot(Utf8PathBuf),
}

impl ScanTarget {
    /// Chooses the target from an optional pull-request number.
    ///
    /// # Examples
    ///
    /// ```
    /// use ll_core::{PullRequestId, ScanTarget};
    /// use camino::Utf8Path;
    ///
    /// let dir = Utf8Path::new("book/content");
    /// assert_eq!(
    ///     ScanTarget::select(None, dir),
    ///     ScanTarget::DirectoryRoot(dir.to_owned())
    /// );
    /// assert_eq!(
    ///     ScanTarget::select(Some(PullRequestId::new(7)), dir),
    ///     ScanTarget::PullRequest(PullRequestId::new(7))
    /// );
    /// ```
    #[must_use]
    pub fn select(pull_request: Option<PullRequestId>, content_dir: &Utf8Path) -> Self {
        match pull_request {
            Some(id) => Self::PullRequest(id),
            None => Self::DirectoryRoot(content_dir.to_owned()),
        }
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PullRequest(id) => write!(f, "pull request #{id}"),
            Self::DirectoryRoot(path) => write!(f, "directory {path}"),
        }
    }
}

/// A file that will be read and checked for the phrase.
///
/// `path` is where the bytes come from; `name` is what gets reported on a
/// match. For a directory walk the name is the base file name, for a pull
/// request it is the repository-relative path returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CandidateFile {
    /// Location on disk.
    pub path: Utf8PathBuf,

    /// Name reported when the file matches.
    pub name: String,
}

impl CandidateFile {
    /// Candidate discovered by walking a directory, reported by base name.
    ///
    /// # Examples
    ///
    /// ```
    /// use ll_core::CandidateFile;
    /// use camino::Utf8PathBuf;
    ///
    /// let file = CandidateFile::from_walk(Utf8PathBuf::from("book/content/intro/a.md"));
    /// assert_eq!(file.name, "a.md");
    /// ```
    #[must_use]
    pub fn from_walk(path: Utf8PathBuf) -> Self {
        let name = path.file_name().unwrap_or(path.as_str()).to_owned();
        Self { path, name }
    }

    /// Candidate listed by a pull request, resolved against the repository root.
    ///
    /// # Examples
    ///
    /// ```
    /// use ll_core::CandidateFile;
    /// use camino::Utf8Path;
    ///
    /// let file = CandidateFile::from_pull_request(Utf8Path::new("/repo"), "book/content/x.md");
    /// assert_eq!(file.path.as_str(), "/repo/book/content/x.md");
    /// assert_eq!(file.name, "book/content/x.md");
    /// ```
    #[must_use]
    pub fn from_pull_request(repo_root: &Utf8Path, filename: &str) -> Self {
        Self {
            path: repo_root.join(filename),
            name: filename.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pull_request_id_parse() {
        assert_eq!("42".parse::<PullRequestId>().unwrap(), PullRequestId(42));
        assert_eq!(" 42 ".parse::<PullRequestId>().unwrap(), PullRequestId(42));
        assert!("abc".parse::<PullRequestId>().is_err());
        assert!("-1".parse::<PullRequestId>().is_err());
    }

    #[test]
    fn test_pull_request_id_serialization() {
        let id = PullRequestId::new(99);
        assert_eq!(serde_json::to_string(&id).unwrap(), "99");
    }

    #[test]
    fn test_scan_target_display() {
        assert_eq!(
            ScanTarget::PullRequest(PullRequestId::new(12)).to_string(),
            "pull request #12"
        );
        assert_eq!(
            ScanTarget::DirectoryRoot(Utf8PathBuf::from("book/content")).to_string(),
            "directory book/content"
        );
    }

    #[test]
    fn test_candidate_from_walk_uses_base_name() {
        let file = CandidateFile::from_walk(Utf8PathBuf::from("root/nested/deeper/page.md"));
        assert_eq!(file.path, Utf8PathBuf::from("root/nested/deeper/page.md"));
        assert_eq!(file.name, "page.md");
    }

    #[test]
    fn test_candidate_from_pull_request_keeps_relative_name() {
        let file = CandidateFile::from_pull_request(Utf8Path::new("repo"), "book/content/a/b.md");
        assert_eq!(file.path, Utf8PathBuf::from("repo/book/content/a/b.md"));
        assert_eq!(file.name, "book/content/a/b.md");
    }
}
