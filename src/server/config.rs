//! Server configuration
//!
//! Loads settings from defaults, an optional `config.toml`, and
//! `DOCSHELF_`-prefixed environment variables, then validates them.

use config::{Config, Environment, File};
use serde::Deserialize;

/// Complete server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// IP address to bind the HTTP listener
    pub bind_address: String,

    /// Port for the HTTP listener
    pub port: u16,

    /// Candidate library root directories, checked in priority order against
    /// the process working directory; the first is created if none exist
    pub library_roots: Vec<String>,

    /// Maximum accepted request line length in bytes
    pub max_request_line: usize,

    /// Maximum accepted header count per request
    pub max_headers: usize,
}

impl ServerConfig {
    /// Load configuration with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .set_default("bind_address", "127.0.0.1")?
            .set_default("port", 8080_i64)?
            .set_default(
                "library_roots",
                vec!["pdf_uploads".to_string(), "app/pdfs".to_string()],
            )?
            .set_default("max_request_line", 8192_i64)?
            .set_default("max_headers", 100_i64)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("DOCSHELF"))
            .build()?;

        let config: ServerConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Get bind address and port as a socket address string
    pub fn listen_socket(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.port == 0 {
            return Err(config::ConfigError::Message("Port cannot be 0".into()));
        }

        if self.library_roots.is_empty() {
            return Err(config::ConfigError::Message(
                "library_roots cannot be empty".into(),
            ));
        }

        if self.library_roots.iter().any(|root| root.is_empty()) {
            return Err(config::ConfigError::Message(
                "library_roots entries cannot be empty".into(),
            ));
        }

        if self.max_request_line < 1024 {
            return Err(config::ConfigError::Message(
                "max_request_line must be at least 1024".into(),
            ));
        }

        if self.max_headers == 0 {
            return Err(config::ConfigError::Message(
                "max_headers must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}
