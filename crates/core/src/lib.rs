//! Core logic for Stepbook.
//!
//! This crate contains the report model, the flat-file store, and the PDF
//! renderer, with no web dependencies.
//!
//! # Modules
//!
//! - `reports` - Reports, steps, and the actions that mutate them
//! - `store` - JSON file persistence of the whole collection
//! - `document` - Paginated PDF export
//! - `service` - Load-mutate-save cycle tying the above together

pub mod document;
pub mod reports;
pub mod service;
pub mod store;

pub use service::{BookError, Outcome, ReportBook};
