//! Semantic checks applied to create requests before they reach the database.
//!
//! Field presence and types are already enforced when the request body is deserialized;
//! these helpers check values and return them normalized.

use crate::server::error::validation::ValidationError;

/// Trims a required text field, rejecting blank values and values longer than the column.
///
/// Length is counted in characters, matching `VARCHAR(n)`.
pub fn required_text(
    field: &'static str,
    value: String,
    max_len: usize,
) -> Result<String, ValidationError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(ValidationError::BlankField(field));
    }

    within_length(field, trimmed.to_string(), max_len)
}

/// Trims an optional text field, treating blank values as absent.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// [`optional_text`] for a length-limited column.
pub fn optional_bounded_text(
    field: &'static str,
    value: Option<String>,
    max_len: usize,
) -> Result<Option<String>, ValidationError> {
    optional_text(value)
        .map(|v| within_length(field, v, max_len))
        .transpose()
}

fn within_length(
    field: &'static str,
    value: String,
    max_len: usize,
) -> Result<String, ValidationError> {
    if value.chars().count() > max_len {
        return Err(ValidationError::TooLong { field, max_len });
    }

    Ok(value)
}

/// Checks `skip` and `limit` fit the signed 64-bit range the database binds them as.
pub fn page(skip: u64, limit: u64) -> Result<(u64, u64), ValidationError> {
    let max = i64::MAX as u64;

    if skip > max {
        return Err(ValidationError::PageOutOfRange("skip"));
    }
    if limit > max {
        return Err(ValidationError::PageOutOfRange("limit"));
    }

    Ok((skip, limit))
}

/// Normalizes a conference to `AFC` or `NFC`.
pub fn conference(value: String) -> Result<String, ValidationError> {
    let normalized = value.trim().to_uppercase();

    match normalized.as_str() {
        "AFC" | "NFC" => Ok(normalized),
        _ => Err(ValidationError::InvalidConference(value)),
    }
}

/// Checks an optional `#RRGGBB` color, returning it upper-cased.
pub fn optional_color(
    field: &'static str,
    value: Option<String>,
) -> Result<Option<String>, ValidationError> {
    let Some(value) = optional_text(value) else {
        return Ok(None);
    };

    let is_hex_color = value.len() == 7
        && value.starts_with('#')
        && value[1..].chars().all(|c| c.is_ascii_hexdigit());

    if !is_hex_color {
        return Err(ValidationError::InvalidColor { field, value });
    }

    Ok(Some(value.to_uppercase()))
}

/// Checks a money amount is finite and non-negative.
pub fn amount(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidAmount(field));
    }

    Ok(value)
}

pub fn optional_amount(field: &'static str, value: Option<f64>) -> Result<Option<f64>, ValidationError> {
    value.map(|v| amount(field, v)).transpose()
}
