#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_non_empty_string, validate_one_of, validate_path, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATA_PATH: &str = "mock_database.csv";

/// Fully resolved runtime settings after CLI flags and the TOML file are merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub data_path: String,
    pub log_format: String,
    pub log_level: Option<String>,
    pub verbose: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            data_path: DEFAULT_DATA_PATH.to_string(),
            log_format: "compact".to_string(),
            log_level: None,
            verbose: false,
        }
    }
}

impl AppConfig {
    /// `host:port`, resolved by the listener so host names work too.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn log_format(&self) -> LogFormat {
        LogFormat::parse(&self.log_format).unwrap_or_default()
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_positive_number("server.port", self.port as usize, 1)?;
        validate_path("data.path", &self.data_path)?;
        validate_one_of("logging.format", &self.log_format, &["compact", "json"])?;
        Ok(())
    }
}
