//! Rendering dates with strftime-style templates.

use std::fmt::Write;

use chrono::NaiveDate;

use super::error::DateError;

/// ISO 8601 calendar date.
pub const DEFAULT_FORMAT: &str = "%Y-%m-%d";

/// Render `date` with a strftime-style `format`.
///
/// The template is not checked up front. chrono reports unknown specifiers
/// and fields a date cannot supply (e.g. `%H`) as a formatting failure while
/// writing, which surfaces here as [`DateError::InvalidFormat`].
pub fn render(date: NaiveDate, format: &str) -> Result<String, DateError> {
    let mut out = String::new();
    write!(out, "{}", date.format(format)).map_err(|_| DateError::InvalidFormat)?;
    Ok(out)
}
