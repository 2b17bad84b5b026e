//! Scan results and the pass/fail outcome derived from them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// First line of the failure listing.
pub const FAILURE_HEADER: &str = "\"Lorem ipsum\"s found in the following files:";

/// What a scan found.
///
/// `matches` holds the reported names of offending files in the order the
/// files were enumerated.
///
/// # Examples
///
/// ```
/// use ll_core::ScanReport;
///
/// let mut report = ScanReport::default();
/// report.record("a.md", true);
/// report.record("b.md", false);
///
/// assert_eq!(report.files_scanned, 2);
/// assert_eq!(report.matches, vec!["a.md"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Number of files read.
    pub files_scanned: usize,

    /// Names of files containing the phrase.
    pub matches: Vec<String>,
}

impl ScanReport {
    /// Records one scanned file.
    pub fn record(&mut self, name: impl Into<String>, matched: bool) {
        self.files_scanned += 1;
        if matched {
            self.matches.push(name.into());
        }
    }

    /// Returns `true` if no file contained the phrase.
    #[inline]
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.matches.is_empty()
    }

    /// Converts the report into a pass/fail outcome.
    #[must_use]
    pub fn into_outcome(self) -> LintOutcome {
        if self.matches.is_empty() {
            LintOutcome::Clean
        } else {
            LintOutcome::Failed(self.matches)
        }
    }
}

/// Whether the lint passed.
///
/// The binary maps [`Failed`](Self::Failed) to a non-zero exit code. Its
/// `Display` output is the failure listing: a fixed header followed by one
/// filename per line.
///
/// # Examples
///
/// ```
/// use ll_core::LintOutcome;
///
/// let outcome = LintOutcome::Failed(vec!["a.md".to_owned()]);
/// assert!(outcome.is_failure());
/// assert!(outcome.to_string().ends_with("\na.md"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LintOutcome {
    /// No file contained the phrase.
    Clean,

    /// These files contained the phrase.
    Failed(Vec<String>),
}

impl LintOutcome {
    /// Returns `true` for [`Failed`](Self::Failed).
    #[inline]
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// The offending filenames; empty when clean.
    #[must_use]
    pub fn failed_files(&self) -> &[String] {
        match self {
            Self::Clean => &[],
            Self::Failed(files) => files,
        }
    }
}

impl fmt::Display for LintOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clean => f.write_str("no placeholder text found"),
            Self::Failed(files) => {
                f.write_str(FAILURE_HEADER)?;
                for file in files {
                    write!(f, "\n{file}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_clean() {
        let report = ScanReport::default();
        assert!(report.is_clean());
        assert_eq!(report.into_outcome(), LintOutcome::Clean);
    }

    #[test]
    fn test_record_preserves_order() {
        let mut report = ScanReport::default();
        report.record("z.md", true);
        report.record("m.md", false);
        report.record("a.md", true);

        assert_eq!(report.files_scanned, 3);
        assert_eq!(
            report.into_outcome(),
            LintOutcome::Failed(vec!["z.md".to_owned(), "a.md".to_owned()])
        );
    }

    #[test]
    fn test_failed_files() {
        assert!(LintOutcome::Clean.failed_files().is_empty());
        let outcome = LintOutcome::Failed(vec!["a.md".to_owned()]);
        assert_eq!(outcome.failed_files(), ["a.md".to_owned()]);
    }

    #[test]
    fn test_failure_listing() {
        let outcome = LintOutcome::Failed(vec![
            "a.md".to_owned(),
            "book/content/x.md".to_owned(),
        ]);
        insta::assert_snapshot!(outcome.to_string(), @r#"
        "Lorem ipsum"s found in the following files:
        a.md
        book/content/x.md
        "#);
    }

    #[test]
    fn test_report_serialization() {
        let mut report = ScanReport::default();
        report.record("a.md", true);
        report.record("b.md", false);
        insta::assert_json_snapshot!(report, @r#"
        {
          "files_scanned": 2,
          "matches": [
            "a.md"
          ]
        }
        "#);
    }
}
