//! Shared errors and configuration for Stepbook.
//!
//! This crate provides common types used across all other crates:
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;

pub use config::{AppConfig, ExportConfig, ServerConfig, StorageConfig};
pub use error::{AppError, AppResult};
