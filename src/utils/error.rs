use thiserror::Error;

#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Data source is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("Configuration validation error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Lookup failed: {message}")]
    LookupError { message: String },

    #[error("Server error: {message}")]
    ServerError { message: String },
}

impl VerifyError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            VerifyError::IoError(e) => format!("Could not read a required file: {}", e),
            VerifyError::CsvError(e) => format!("The record file is not valid CSV: {}", e),
            VerifyError::MissingColumn { column } => {
                format!("The record file has no '{}' column", column)
            }
            VerifyError::ConfigValidationError { field, .. }
            | VerifyError::InvalidConfigValueError { field, .. } => {
                format!("Configuration value '{}' is invalid", field)
            }
            VerifyError::LookupError { .. } => "The record lookup failed".to_string(),
            VerifyError::ServerError { message } => format!("The server failed: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            VerifyError::IoError(_) => "Check that the file exists and is readable",
            VerifyError::CsvError(_) => "Check the record file for unbalanced quotes or ragged rows",
            VerifyError::MissingColumn { .. } => {
                "Add a header row containing both 'Name' and 'YOB' columns"
            }
            VerifyError::ConfigValidationError { .. }
            | VerifyError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and restart"
            }
            VerifyError::LookupError { .. } => "Restart the service to reload the record file",
            VerifyError::ServerError { .. } => {
                "Check that the port is free and the host address is valid"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, VerifyError>;
