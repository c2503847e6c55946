use crate::utils::error::{AppError, Result};

/// Semantic checks run after a configuration has been parsed.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Problem `instance` values are URI references relative to the API root.
pub fn validate_instance_path(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;

    if !value.starts_with('/') {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Instance path must start with '/'".to_string(),
        });
    }

    if value.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(AppError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Instance path cannot contain whitespace or control characters".to_string(),
        });
    }

    Ok(())
}
