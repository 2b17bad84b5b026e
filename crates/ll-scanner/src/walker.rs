//! Recursive directory listing.
//!
//! [`FileWalker`] lists every file below a root. Unlike a source-code walker
//! it applies no filters at all: hidden files, ignored files and files of any
//! extension are all returned. Siblings are visited in file-name order.
//!
//! Symlinks to files are listed under the link's own path. Symlinked
//! directories are listed neither as files nor descended into.

use camino::{Utf8Path, Utf8PathBuf};
use ignore::WalkBuilder;

use crate::error::ScanError;

/// Lists every file in a directory tree.
///
/// # Examples
///
/// ```no_run
/// use ll_scanner::FileWalker;
/// use camino::Utf8Path;
///
/// let walker = FileWalker::new(Utf8Path::new("book/content"))?;
/// for path in walker.collect_paths()? {
///     println!("{path}");
/// }
/// # Ok::<(), ll_scanner::ScanError>(())
/// ```
#[derive(Debug)]
pub struct FileWalker {
    root: Utf8PathBuf,
}

impl FileWalker {
    /// Creates a walker rooted at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::MissingDirectory`] if `root` doesn't exist or
    /// isn't a directory.
    pub fn new(root: &Utf8Path) -> Result<Self, ScanError> {
        if !root.is_dir() {
            return Err(ScanError::MissingDirectory(root.to_owned()));
        }

        Ok(Self {
            root: root.to_owned(),
        })
    }

    /// Collects the path of every file in the tree, including symlinks to files.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Walk`] if traversal fails,
    /// [`ScanError::NonUtf8Path`] for a path that isn't UTF-8, and
    /// [`ScanError::Read`] for a symlink whose target cannot be resolved.
    pub fn collect_paths(&self) -> Result<Vec<Utf8PathBuf>, ScanError> {
        let mut paths = Vec::new();

        for result in self.build_walker() {
            let entry = result?;
            let Some(file_type) = entry.file_type() else {
                continue;
            };
            if !file_type.is_file() && !file_type.is_symlink() {
                continue;
            }

            let path = entry.path();
            let utf8_path =
                Utf8Path::from_path(path).ok_or_else(|| ScanError::NonUtf8Path(path.to_owned()))?;

            if file_type.is_symlink() && !Self::link_targets_file(utf8_path)? {
                continue;
            }

            paths.push(utf8_path.to_owned());
        }

        Ok(paths)
    }

    /// Resolves a symlink. A dangling link is an error, like any unreadable file.
    fn link_targets_file(link: &Utf8Path) -> Result<bool, ScanError> {
        let metadata = std::fs::metadata(link).map_err(|e| ScanError::read(link, e))?;
        Ok(metadata.is_file())
    }

    fn build_walker(&self) -> ignore::Walk {
        WalkBuilder::new(&self.root)
            // No .gitignore, .ignore or hidden-file filtering
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build()
    }
}
