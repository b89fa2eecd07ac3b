//! Collection mutations.

use super::error::ReportError;
use super::types::{Collection, Report};

/// A single user interaction against the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a new, empty report.
    CreateReport {
        /// Report name.
        name: String,
    },
    /// Remove a report and all its steps.
    DeleteReport {
        /// Report index.
        report: usize,
    },
    /// Append a step to a report.
    AddStep {
        /// Report index.
        report: usize,
        /// Step text.
        text: String,
    },
    /// Remove a step from a report. Later steps shift down by one.
    DeleteStep {
        /// Report index.
        report: usize,
        /// Step index.
        step: usize,
    },
}

/// Whether an action modified the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    /// The collection was modified and must be saved.
    Changed,
    /// Input was blank; nothing happened.
    Unchanged,
}

impl Change {
    /// Returns true for [`Change::Changed`].
    #[must_use]
    pub const fn is_changed(self) -> bool {
        matches!(self, Self::Changed)
    }
}

/// Result of applying an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Applied {
    /// Collection after the action.
    pub collection: Collection,
    /// Whether it differs from the input.
    pub change: Change,
}

impl Applied {
    fn changed(collection: Collection) -> Self {
        Self {
            collection,
            change: Change::Changed,
        }
    }

    fn unchanged(collection: Collection) -> Self {
        Self {
            collection,
            change: Change::Unchanged,
        }
    }
}

/// Applies `action` to `collection`.
///
/// Names and step texts are trimmed; blank input leaves the collection
/// untouched and reports [`Change::Unchanged`].
///
/// # Errors
///
/// Returns an error if a report or step index is out of range.
pub fn apply(mut collection: Collection, action: &Action) -> Result<Applied, ReportError> {
    match action {
        Action::CreateReport { name } => {
            let name = name.trim();
            if name.is_empty() {
                return Ok(Applied::unchanged(collection));
            }
            collection.reports_mut().push(Report::new(name));
        }
        Action::DeleteReport { report } => {
            check_report(&collection, *report)?;
            collection.reports_mut().remove(*report);
        }
        Action::AddStep { report, text } => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(Applied::unchanged(collection));
            }
            check_report(&collection, *report)?;
            collection.reports_mut()[*report].steps.push(text.to_string());
        }
        Action::DeleteStep { report, step } => {
            check_report(&collection, *report)?;
            let steps = &mut collection.reports_mut()[*report].steps;
            if *step >= steps.len() {
                return Err(ReportError::StepNotFound {
                    report: *report,
                    index: *step,
                    len: steps.len(),
                });
            }
            steps.remove(*step);
        }
    }

    Ok(Applied::changed(collection))
}

fn check_report(collection: &Collection, index: usize) -> Result<(), ReportError> {
    if index < collection.len() {
        Ok(())
    } else {
        Err(ReportError::ReportNotFound {
            index,
            len: collection.len(),
        })
    }
}
