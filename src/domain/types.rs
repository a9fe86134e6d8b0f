//! Strongly-typed temporal value objects used across the core.
//!
//! These wrappers enforce basic invariants (a date that exists on the
//! calendar, a month number within 1..=12) so that once a value reaches the
//! algorithms it can be treated as trusted.
use std::fmt::{Display, Formatter};

use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Days in a calendar week.
pub const DAYS_PER_WEEK: u32 = 7;

/// Weekday index of Monday in the Sunday-first numbering used by the grid.
const MONDAY_INDEX: u32 = 1;

/// Most week buckets a single calendar month can span once partial weeks at
/// both ends are counted.
pub const MAX_WEEKS_PER_MONTH: usize = 5;

/// Errors produced when attempting to construct a constrained temporal value,
/// or when an algorithm rejects its input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    /// Provided year/month/day triple does not exist on the calendar.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Provided month number is outside 1..=12.
    #[error("month number must be within 1..=12, got {0}")]
    InvalidMonth(u32),
    /// Provided zero-based month index is outside 0..=11.
    #[error("month index must be within 0..=11, got {0}")]
    InvalidMonthIndex(usize),
    /// Provided series does not have the expected number of entries.
    #[error("expected {expected} monthly entries, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
    /// Date arithmetic stepped outside the supported calendar range.
    #[error("date arithmetic left the supported calendar range")]
    DateOutOfRange,
}

pub type TemporalResult<T> = Result<T, TemporalError>;

/// Calendar date with no time-of-day or timezone component.
///
/// The four core algorithms compare dates through this type only. Timestamps
/// must be normalized with [`CivilDate::from_datetime`] before they reach the
/// core; comparing a timestamp against a grid cell directly is what shifted
/// cells by one day near midnight in earlier dashboard revisions.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct CivilDate(NaiveDate);

impl CivilDate {
    /// Creates a date, rejecting triples that do not exist on the calendar.
    pub fn new(year: i32, month: u32, day: u32) -> TemporalResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(TemporalError::InvalidDate { year, month, day })
    }

    /// Normalizes a timestamp by dropping its time-of-day portion.
    pub fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self(datetime.date())
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    pub fn day(self) -> u32 {
        self.0.day()
    }

    /// Weekday index with Sunday as 0 and Saturday as 6.
    pub fn weekday_index(self) -> u32 {
        self.0.weekday().num_days_from_sunday()
    }

    /// The next civil day.
    pub fn succ(self) -> TemporalResult<Self> {
        self.0
            .succ_opt()
            .map(Self)
            .ok_or(TemporalError::DateOutOfRange)
    }

    /// The civil day `days` before this one.
    pub fn back(self, days: u64) -> TemporalResult<Self> {
        self.0
            .checked_sub_days(Days::new(days))
            .map(Self)
            .ok_or(TemporalError::DateOutOfRange)
    }

    /// Signed whole-day difference from this date to `other`.
    ///
    /// Positive when `other` lies in the future relative to this date. Both
    /// operands are date-only, so the result is always an exact day count.
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }
}

impl Display for CivilDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CivilDate> for NaiveDate {
    fn from(date: CivilDate) -> Self {
        date.0
    }
}

/// A calendar month identified by year and month number.
///
/// Internally stored as the first day of the month, which keeps every derived
/// quantity (day count, neighbours, weekday of day 1) infallible once the
/// value has been constructed.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct YearMonth(NaiveDate);

impl YearMonth {
    /// Creates a month, rejecting month numbers outside 1..=12.
    pub fn new(year: i32, month: u32) -> TemporalResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(TemporalError::InvalidMonth(month));
        }
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(Self)
            .ok_or(TemporalError::InvalidDate {
                year,
                month,
                day: 1,
            })
    }

    /// The month containing the given date.
    pub fn of(date: CivilDate) -> Self {
        // Day 1 of an existing date's month always exists.
        Self(date.0 - Days::new(u64::from(date.0.day() - 1)))
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// First civil day of the month.
    pub fn first_day(self) -> CivilDate {
        CivilDate(self.0)
    }

    /// The following month, rolling December over into January.
    pub fn next(self) -> TemporalResult<Self> {
        self.0
            .checked_add_months(Months::new(1))
            .map(Self)
            .ok_or(TemporalError::DateOutOfRange)
    }

    /// The preceding month, rolling January back into December.
    pub fn prev(self) -> TemporalResult<Self> {
        self.0
            .checked_sub_months(Months::new(1))
            .map(Self)
            .ok_or(TemporalError::DateOutOfRange)
    }

    /// Number of days in the month, leap years included.
    pub fn day_count(self) -> TemporalResult<u32> {
        let next = self.next()?;
        Ok(next.0.signed_duration_since(self.0).num_days() as u32)
    }

    /// Number of week buckets the month spans.
    ///
    /// Weeks run Monday-first: a month starting on Monday splits into
    /// `ceil(days / 7)` buckets, any other start day contributes one leading
    /// partial week before the remaining full weeks are counted. The count is
    /// clamped to [`MAX_WEEKS_PER_MONTH`]; no calendar month needs a sixth
    /// bucket under this partition.
    pub fn week_count(self) -> TemporalResult<usize> {
        let first_weekday = self.first_day().weekday_index();
        let days = self.day_count()?;

        let weeks = if first_weekday == MONDAY_INDEX {
            days.div_ceil(DAYS_PER_WEEK)
        } else {
            let leading_partial = DAYS_PER_WEEK + 1 - first_weekday;
            1 + days.saturating_sub(leading_partial).div_ceil(DAYS_PER_WEEK)
        };

        Ok((weeks as usize).min(MAX_WEEKS_PER_MONTH))
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m"))
    }
}
