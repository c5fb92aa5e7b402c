//! Age in whole years and months.
//!
//! A birthday "counts" only once its day-of-month has been reached in the
//! reference month, so `2000-05-25` is still 24 years and 11 months old on
//! `2025-05-20`. The comparison uses the plain day-of-month values, which
//! keeps Feb 29 and end-of-month birthdates free of special cases.

use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use tracing::warn;

/// Whole years and leftover months between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    pub years: i32,
    /// Always in `0..=11`.
    pub months: u32,
}

/// Human sentence, e.g. "You are 1 year and 3 months old."
impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit_y = if self.years == 1 { "year" } else { "years" };
        let unit_m = if self.months == 1 { "month" } else { "months" };
        write!(f, "You are {} {unit_y} and {} {unit_m} old.", self.years, self.months)
    }
}

/// Age of someone born on `birth` as of `reference`.
pub fn age_between(birth: NaiveDate, reference: NaiveDate) -> Age {
    if reference < birth {
        warn!(%birth, %reference, "reference date precedes birthdate");
    }

    let mut years = reference.year() - birth.year();
    let mut months = reference.month() as i32 - birth.month() as i32;

    // Anniversary day not reached yet this month
    if reference.day() < birth.day() {
        months -= 1;
    }

    if months < 0 {
        months += 12;
        years -= 1;
    }

    Age { years, months: months as u32 }
}

/// Age of someone born on `birth` as of the current local date.
pub fn age_today(birth: NaiveDate) -> Age {
    age_between(birth, Local::now().date_naive())
}
