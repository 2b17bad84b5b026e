//! Where a pull request's changed-file list comes from.
//!
//! The [`Scanner`](crate::Scanner) only needs the list of paths, so the HTTP
//! client sits behind [`ChangedFilesSource`]. Tests substitute a fixed list.

use ll_core::PullRequestId;
use ll_github::PullRequestClient;

use crate::error::ScanError;

/// Lists the repository-relative paths changed by a pull request.
pub trait ChangedFilesSource {
    /// Returns the changed paths in the order the host reports them.
    fn changed_files(&self, id: PullRequestId) -> Result<Vec<String>, ScanError>;
}

impl ChangedFilesSource for PullRequestClient {
    fn changed_files(&self, id: PullRequestId) -> Result<Vec<String>, ScanError> {
        Ok(self.fetch_changed_files(id)?)
    }
}

/// `None` stands for a scanner that only walks directories.
impl<T: ChangedFilesSource> ChangedFilesSource for Option<T> {
    fn changed_files(&self, id: PullRequestId) -> Result<Vec<String>, ScanError> {
        match self {
            Some(source) => source.changed_files(id),
            None => Err(ScanError::NoSource(id)),
        }
    }
}

impl<T: ChangedFilesSource + ?Sized> ChangedFilesSource for &T {
    fn changed_files(&self, id: PullRequestId) -> Result<Vec<String>, ScanError> {
        (**self).changed_files(id)
    }
}
