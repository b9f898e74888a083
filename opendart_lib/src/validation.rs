//! Input validation at the resolution boundary.

use chrono::NaiveDate;

use crate::error::RegistryError;

pub const MAX_QUERY_LENGTH: usize = 100;

/// Strip ASCII control characters (0x00-0x1F except space 0x20), trim whitespace,
/// and enforce a byte-length limit.
pub fn sanitize_text(input: &str, max_len: usize) -> Result<String, RegistryError> {
    if input.len() > max_len {
        return Err(RegistryError::InvalidInput(format!(
            "input exceeds maximum length of {} bytes",
            max_len
        )));
    }
    let sanitized: String = input
        .chars()
        .filter(|c| !c.is_ascii_control() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_string();
    if sanitized.is_empty() {
        return Err(RegistryError::InvalidInput(
            "input is empty after sanitization".to_string(),
        ));
    }
    Ok(sanitized)
}

/// Validate a company-name query: enforce length, strip control chars, trim.
pub fn validate_query(input: &str) -> Result<String, RegistryError> {
    sanitize_text(input, MAX_QUERY_LENGTH)
}

/// Validate the requested result count.
pub fn validate_top_k(k: usize) -> Result<usize, RegistryError> {
    if k == 0 {
        return Err(RegistryError::InvalidInput(
            "result count must be at least 1".to_string(),
        ));
    }
    Ok(k)
}

/// Validate a YYYYMMDD date string (disclosure search windows).
pub fn validate_date(input: &str) -> Result<NaiveDate, RegistryError> {
    NaiveDate::parse_from_str(input.trim(), "%Y%m%d").map_err(|_| {
        RegistryError::InvalidInput(format!("invalid date '{}', expected YYYYMMDD", input))
    })
}
