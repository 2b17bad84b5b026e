//! Domain types for lorem-lint.
//!
//! - `target` - what a run scans and the files it resolves to
//! - `report` - what a run found
//!
//! All public types are re-exported here and at the crate root:
//!
//! ```
//! use ll_core::{CandidateFile, LintOutcome, ScanReport, ScanTarget};
//! ```

mod report;
mod target;

pub use report::{FAILURE_HEADER, LintOutcome, ScanReport};
pub use target::{CandidateFile, PullRequestId, ScanTarget};
