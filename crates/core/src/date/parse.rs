//! Parsing of calendar dates and base-date tokens.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use super::error::DateError;

/// The only accepted textual date layout.
pub const INPUT_FORMAT: &str = "%Y-%m-%d";

// chrono's %Y/%m/%d also take short years, signs and space padding
static DATE_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}$").expect("valid regex"));

/// A base date as given on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDate {
    /// The current local date (`today` or `now`).
    Today,
    /// An explicit calendar date.
    Literal(NaiveDate),
}

impl BaseDate {
    /// Resolve against the given current date.
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        match self {
            BaseDate::Today => today,
            BaseDate::Literal(date) => date,
        }
    }
}

/// Parse a `YYYY-MM-DD` string into a calendar date.
///
/// The year must have exactly four digits; leading zeros on month and day
/// are optional. Surrounding whitespace is ignored. Dates that do not exist
/// in the calendar (`2023-02-29`, `2025-13-01`) are rejected the same way as
/// malformed text.
pub fn parse_date(input: &str) -> Result<NaiveDate, DateError> {
    let trimmed = input.trim();
    parse_exact(trimmed).ok_or_else(|| DateError::InvalidDate(trimmed.to_string()))
}

/// Parse a base-date token: `today`/`now` (any case) or a `YYYY-MM-DD` date.
///
/// The token is taken as-is; surrounding whitespace makes it invalid.
pub fn parse_base_date(input: &str) -> Result<BaseDate, DateError> {
    if is_today_keyword(input) {
        return Ok(BaseDate::Today);
    }
    parse_exact(input)
        .map(BaseDate::Literal)
        .ok_or_else(|| DateError::InvalidBaseDate(input.to_string()))
}

fn parse_exact(s: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE.is_match(s) {
        return None;
    }
    NaiveDate::parse_from_str(s, INPUT_FORMAT).ok()
}

fn is_today_keyword(s: &str) -> bool {
    s.eq_ignore_ascii_case("today") || s.eq_ignore_ascii_case("now")
}
