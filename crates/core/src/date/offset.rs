//! Signed day/week offsets and calendar shifting.

use chrono::{Duration, NaiveDate};

use super::error::DateError;

/// Units accepted by the offset tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetUnit {
    Days,
    Weeks,
}

impl OffsetUnit {
    /// Number of days in one unit.
    pub fn days_per_unit(self) -> i64 {
        match self {
            OffsetUnit::Days => 1,
            OffsetUnit::Weeks => 7,
        }
    }

    /// Plural noun used in log output.
    pub fn noun(self) -> &'static str {
        match self {
            OffsetUnit::Days => "days",
            OffsetUnit::Weeks => "weeks",
        }
    }
}

/// A signed count of days or weeks to add to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub amount: i64,
    pub unit: OffsetUnit,
}

impl Offset {
    pub fn days(amount: i64) -> Self {
        Self { amount, unit: OffsetUnit::Days }
    }

    pub fn weeks(amount: i64) -> Self {
        Self { amount, unit: OffsetUnit::Weeks }
    }

    /// The offset expressed in days, or `None` if that overflows `i64`.
    pub fn as_days(self) -> Option<i64> {
        self.amount.checked_mul(self.unit.days_per_unit())
    }
}

/// Add `offset` to `date` with normal month/year rollover.
///
/// Any integer amount is accepted; only results that chrono cannot represent
/// fail, with [`DateError::OutOfRange`].
pub fn shift(date: NaiveDate, offset: Offset) -> Result<NaiveDate, DateError> {
    let out_of_range = || DateError::OutOfRange {
        offset_days: offset.as_days().unwrap_or(if offset.amount < 0 {
            i64::MIN
        } else {
            i64::MAX
        }),
    };

    let days = offset.as_days().ok_or_else(out_of_range)?;
    let delta = Duration::try_days(days).ok_or_else(out_of_range)?;
    date.checked_add_signed(delta).ok_or_else(out_of_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[rstest]
    #[case(ymd(2025, 9, 10), 30, ymd(2025, 10, 10))]
    #[case(ymd(2025, 9, 10), -5, ymd(2025, 9, 5))]
    #[case(ymd(2025, 3, 15), 0, ymd(2025, 3, 15))]
    #[case(ymd(2024, 2, 28), 1, ymd(2024, 2, 29))]
    #[case(ymd(2023, 2, 28), 1, ymd(2023, 3, 1))]
    #[case(ymd(2024, 2, 29), 365, ymd(2025, 2, 28))]
    #[case(ymd(2024, 12, 25), 15, ymd(2025, 1, 9))]
    #[case(ymd(2025, 1, 5), -10, ymd(2024, 12, 26))]
    #[case(ymd(1999, 12, 31), 1, ymd(2000, 1, 1))]
    #[case(ymd(2020, 1, 1), 1826, ymd(2024, 12, 31))]
    #[case(ymd(2025, 1, 1), -365, ymd(2024, 1, 2))]
    #[case(ymd(2025, 1, 31), 1, ymd(2025, 2, 1))]
    #[case(ymd(2025, 4, 30), 1, ymd(2025, 5, 1))]
    fn test_shift_days(#[case] base: NaiveDate, #[case] n: i64, #[case] expected: NaiveDate) {
        assert_eq!(shift(base, Offset::days(n)), Ok(expected));
    }

    #[rstest]
    #[case(ymd(2025, 9, 10), 12, ymd(2025, 12, 3))]
    #[case(ymd(2025, 9, 10), -2, ymd(2025, 8, 27))]
    #[case(ymd(2024, 12, 25), 2, ymd(2025, 1, 8))]
    #[case(ymd(2024, 2, 15), 2, ymd(2024, 2, 29))]
    fn test_shift_weeks(#[case] base: NaiveDate, #[case] n: i64, #[case] expected: NaiveDate) {
        assert_eq!(shift(base, Offset::weeks(n)), Ok(expected));
    }

    #[test]
    fn test_weeks_match_seven_days() {
        let base = ymd(2025, 9, 10);
        for n in [-520, -53, -1, 0, 1, 4, 52, 1000] {
            assert_eq!(
                shift(base, Offset::weeks(n)),
                shift(base, Offset::days(7 * n)),
                "mismatch for n = {n}"
            );
        }
    }

    #[test]
    fn test_shift_round_trips() {
        let base = ymd(2024, 2, 29);
        for n in [-100_000, -366, -1, 0, 1, 28, 365, 100_000] {
            let there = shift(base, Offset::days(n)).unwrap();
            assert_eq!(shift(there, Offset::days(-n)), Ok(base));
        }
    }

    #[test]
    fn test_shift_out_of_range() {
        let base = ymd(2025, 1, 1);
        assert!(matches!(
            shift(base, Offset::days(i64::MAX)),
            Err(DateError::OutOfRange { .. })
        ));
        assert!(matches!(
            shift(base, Offset::weeks(i64::MIN)),
            Err(DateError::OutOfRange { offset_days: i64::MIN })
        ));
        assert!(matches!(
            shift(base, Offset::days(-1_000_000_000)),
            Err(DateError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_as_days() {
        assert_eq!(Offset::days(-5).as_days(), Some(-5));
        assert_eq!(Offset::weeks(3).as_days(), Some(21));
        assert_eq!(Offset::weeks(i64::MAX).as_days(), None);
    }
}
