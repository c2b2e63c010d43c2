use crate::utils::error::{Result, VerifyError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(VerifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(VerifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(VerifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(VerifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value.to_ascii_lowercase().as_str()) {
        return Err(VerifyError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Allowed values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("data.path", "mock_database.csv").is_ok());
        assert!(validate_path("data.path", "").is_err());
        assert!(validate_path("data.path", "bad\0path.csv").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("server.port", 5000, 1).is_ok());
        assert!(validate_positive_number("server.port", 0, 1).is_err());
    }

    #[test]
    fn test_validate_non_empty_string_and_one_of() {
        assert!(validate_non_empty_string("server.host", "0.0.0.0").is_ok());
        assert!(validate_non_empty_string("server.host", "   ").is_err());
        assert!(validate_one_of("logging.format", "JSON", &["compact", "json"]).is_ok());
        assert!(validate_one_of("logging.format", "pretty", &["compact", "json"]).is_err());
    }
}
