//! Input checks that run before any store access.

use chrono::NaiveDate;

use crate::server::error::AppError;

/// Collects missing required fields so they can be reported in one error.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    /// Records `field` as missing when `value` is `None`.
    pub fn take<T>(&mut self, field: &'static str, value: Option<T>) -> Option<T> {
        if value.is_none() {
            self.missing.push(field);
        }
        value
    }

    /// Like [`take`](Self::take), but blank strings also count as missing.
    pub fn take_text(&mut self, field: &'static str, value: Option<String>) -> Option<String> {
        let value = value.filter(|v| !v.trim().is_empty());
        self.take(field, value)
    }

    pub fn check(&self) -> Result<(), AppError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(self.error())
        }
    }

    /// The error listing every field recorded so far.
    pub fn error(&self) -> AppError {
        AppError::Validation(format!(
            "Missing required field(s): {}",
            self.missing.join(", ")
        ))
    }
}

/// Rejects a provided text value that is empty or whitespace only.
pub fn non_blank(field: &str, value: Option<String>) -> Result<Option<String>, AppError> {
    match value {
        Some(v) if v.trim().is_empty() => {
            Err(AppError::Validation(format!("{} must not be empty", field)))
        }
        other => Ok(other),
    }
}

pub fn ensure_date_order(start_date: NaiveDate, due_date: NaiveDate) -> Result<(), AppError> {
    if start_date > due_date {
        return Err(AppError::Validation(format!(
            "startDate ({}) must not be after dueDate ({})",
            start_date, due_date
        )));
    }

    Ok(())
}

/// Fails when a partial update carries no recognized field.
pub fn ensure_not_empty(is_empty: bool) -> Result<(), AppError> {
    if is_empty {
        return Err(AppError::Validation("No fields to update".to_string()));
    }

    Ok(())
}
