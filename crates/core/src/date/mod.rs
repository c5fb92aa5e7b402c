//! Calendar arithmetic for the command-line tools.
//!
//! This module provides:
//! - Strict `YYYY-MM-DD` parsing and `today`/`now` base-date tokens
//! - Age as whole years and months between two dates
//! - Signed day/week offsets with calendar rollover
//! - strftime-style rendering that reports bad templates as errors

pub mod age;
pub mod error;
pub mod format;
pub mod offset;
pub mod parse;

pub use age::{Age, age_between, age_today};
pub use error::DateError;
pub use format::{DEFAULT_FORMAT, render};
pub use offset::{Offset, OffsetUnit, shift};
pub use parse::{BaseDate, INPUT_FORMAT, parse_base_date, parse_date};
