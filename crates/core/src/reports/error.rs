//! Report error types.

use thiserror::Error;

/// Errors raised when an action addresses something that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    /// Report index out of range.
    #[error("Report {index} not found (collection has {len} reports)")]
    ReportNotFound {
        /// Requested index.
        index: usize,
        /// Number of reports.
        len: usize,
    },

    /// Step index out of range.
    #[error("Step {index} not found in report {report} (report has {len} steps)")]
    StepNotFound {
        /// Report index.
        report: usize,
        /// Requested step index.
        index: usize,
        /// Number of steps in the report.
        len: usize,
    },
}
