//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Persisted collection file.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Download filenames and document title.
    #[serde(default)]
    pub export: ExportConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON file holding the collection.
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,
}

fn default_data_file() -> PathBuf {
    PathBuf::from("reports.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Download filename of the JSON export.
    #[serde(default = "default_json_filename")]
    pub json_filename: String,
    /// Download filename of the PDF export.
    #[serde(default = "default_pdf_filename")]
    pub pdf_filename: String,
    /// Title printed once at the top of the PDF.
    #[serde(default = "default_document_title")]
    pub document_title: String,
}

fn default_json_filename() -> String {
    "reports.json".to_string()
}

fn default_pdf_filename() -> String {
    "reports.pdf".to_string()
}

fn default_document_title() -> String {
    "Reports / Processes".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            json_filename: default_json_filename(),
            pdf_filename: default_pdf_filename(),
            document_title: default_document_title(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("STEPBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
