use thiserror::Error;

/// Errors produced while parsing, shifting, or rendering calendar dates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    /// Text that is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    /// A base-date token that is neither a keyword nor a valid date.
    #[error("Invalid base date '{0}'. Expected YYYY-MM-DD or 'today'.")]
    InvalidBaseDate(String),

    /// The format string could not be rendered for a date.
    ///
    /// Carries no payload: the format string is never echoed back.
    #[error("invalid format string")]
    InvalidFormat,

    /// Shifting produced a date outside the representable calendar range.
    #[error("date offset of {offset_days} days is out of range")]
    OutOfRange { offset_days: i64 },
}
