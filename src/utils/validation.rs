use crate::utils::error::{HelloError, Result};
use tracing_subscriber::EnvFilter;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(HelloError::InvalidConfigValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_filter_directives(field_name: &str, directives: &str) -> Result<()> {
    validate_non_empty_string(field_name, directives)?;

    EnvFilter::try_new(directives)
        .map(|_| ())
        .map_err(|e| HelloError::InvalidConfigValue {
            field: field_name.to_string(),
            value: directives.to_string(),
            reason: format!("Invalid filter directive: {}", e),
        })
}
