use chrono::NaiveDate;

use crate::server::error::AppError;

/// Reduces a date-like string to its calendar date.
///
/// Only the first 10 characters are considered, so both `2024-03-15` and
/// `2024-03-15T10:00:00Z` yield March 15th. Anything whose prefix is not a valid
/// `YYYY-MM-DD` date is rejected with a validation error naming `field`.
pub fn normalize_date(field: &str, raw: &str) -> Result<NaiveDate, AppError> {
    let trimmed = raw.trim();
    let prefix = trimmed.get(..10).unwrap_or(trimmed);

    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!(
            "Invalid date for {}: expected YYYY-MM-DD, got '{}'",
            field, raw
        ))
    })
}
