use crate::utils::error::{BootstrapError, Result};
use std::path::Path;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> BootstrapError {
    BootstrapError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(invalid(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if path.as_os_str().is_empty() {
        return Err(invalid(field_name, &display, "Path cannot be empty"));
    }

    if display.contains('\0') {
        return Err(invalid(field_name, &display, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

/// Program and group names are passed as single argv entries, so they must be
/// one non-empty token.
pub fn validate_token(field_name: &str, value: &str) -> Result<()> {
    validate_non_empty_string(field_name, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(invalid(field_name, value, "Value cannot contain whitespace"));
    }
    Ok(())
}

pub fn validate_tokens(field_name: &str, values: &[String]) -> Result<()> {
    values
        .iter()
        .try_for_each(|value| validate_token(field_name, value))
}
