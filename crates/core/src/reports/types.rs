//! Report and collection types.

use serde::{Deserialize, Serialize};

/// A named, ordered list of steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Report name. Not required to be unique.
    #[serde(alias = "nome")]
    pub name: String,
    /// Steps in display order.
    #[serde(alias = "passos", default)]
    pub steps: Vec<String>,
}

impl Report {
    /// Creates a report with no steps.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    /// Adds a step to the report.
    #[must_use]
    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.steps.push(step.into());
        self
    }
}

/// The full ordered set of reports, the unit of persistence.
///
/// Serializes as a bare JSON array. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    reports: Vec<Report>,
}

impl Collection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the reports in display order.
    #[must_use]
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Returns the report at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Report> {
        self.reports.get(index)
    }

    /// Number of reports.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    /// Whether the collection holds no reports.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    /// Iterates over reports in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Report> {
        self.reports.iter()
    }

    pub(crate) fn reports_mut(&mut self) -> &mut Vec<Report> {
        &mut self.reports
    }
}

impl From<Vec<Report>> for Collection {
    fn from(reports: Vec<Report>) -> Self {
        Self { reports }
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Report;
    type IntoIter = std::slice::Iter<'a, Report>;

    fn into_iter(self) -> Self::IntoIter {
        self.reports.iter()
    }
}
