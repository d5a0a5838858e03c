//! Selection-state engine for a two-month calendar date-range picker.
//!
//! [`RangeSelectionModel`] tracks a start/end pair driven by day taps and
//! classifies days against it; [`CalendarViewModel`] owns the displayed month
//! pair and publishes a change notification after every mutation.

mod calendar;
mod clock;
mod consts;
mod day;
mod period;
mod prelude;
mod selection;
mod signal;
mod types;

#[cfg(test)]
mod test_utils;

pub use calendar::CalendarViewModel;
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use day::DayModel;
pub use period::{Period, PeriodError};
pub use selection::{RangeSelectionModel, SelectionConfig, SelectionError, SelectionState};
pub use signal::{Signal, Subscription};
pub use chrono::Weekday;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use crate::prelude::*;
use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, TimeZone};
use std::str::FromStr;

/// A calendar day. There is no time-of-day component, so equality and
/// ordering are always at day granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct Date {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Year {} is outside the supported range {}-{}", "_0", MIN_YEAR, MAX_YEAR)]
    YearOutOfRange(i32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for DateError {}

impl Date {
    /// 0001-01-01
    pub const MIN: Self = Self {
        year:  Year::MIN,
        month: Month::JANUARY,
        day:   Day::FIRST,
    };
    /// 9999-12-31
    pub const MAX: Self = Self {
        year:  Year::MAX,
        month: Month::DECEMBER,
        day:   Day::DECEMBER_LAST,
    };

    /// Creates a date from raw components, validating each one.
    ///
    /// # Errors
    /// Returns the `DateError` variant for the first invalid component.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub fn weekday(&self) -> Weekday {
        self.to_naive().weekday()
    }

    /// Length of this date's month (28-31).
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    pub const fn first_of_month(&self) -> Self {
        Self {
            year:  self.year,
            month: self.month,
            day:   Day::FIRST,
        }
    }

    /// True when both dates fall in the same year and month.
    pub fn same_month(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month
    }

    /// Moves by whole calendar months, clamping the day to the target month's length.
    /// Returns `None` if the result would leave `MIN_YEAR..=MAX_YEAR`.
    pub fn add_months(&self, delta: i32) -> Option<Self> {
        let months = Months::new(delta.unsigned_abs());
        let naive = self.to_naive();
        let shifted = if delta < 0 {
            naive.checked_sub_months(months)
        } else {
            naive.checked_add_months(months)
        }?;
        Self::try_from(shifted).ok()
    }

    /// The same day (clamped) in the following month.
    pub fn succ_month(&self) -> Option<Self> {
        self.add_months(1)
    }

    /// The same day (clamped) in the preceding month.
    pub fn pred_month(&self) -> Option<Self> {
        self.add_months(-1)
    }

    /// The next calendar day; `None` past 9999-12-31.
    pub fn succ_day(&self) -> Option<Self> {
        self.to_naive().succ_opt().and_then(|next| Self::try_from(next).ok())
    }

    /// Whole days from `self` to `other`; negative when `other` is earlier.
    pub fn days_until(&self, other: &Self) -> i64 {
        other.to_naive().signed_duration_since(self.to_naive()).num_days()
    }

    /// Every day of this date's month, day 1 first.
    pub fn month_days(&self) -> impl Iterator<Item = Self> + use<> {
        let (year, month) = (self.year, self.month);
        (MIN_DAY..=self.days_in_month())
            .filter_map(move |day| Day::new(day, year, month).ok())
            .map(move |day| Self { year, month, day })
    }

    /// Converts to a `chrono` date.
    pub fn to_naive(&self) -> NaiveDate {
        // every valid Date lies inside chrono's supported range
        NaiveDate::from_ymd_opt(i32::from(self.year()), u32::from(self.month()), u32::from(self.day()))
            .unwrap_or_default()
    }

    /// Normalizes a zoned timestamp to its calendar day in that zone.
    ///
    /// # Errors
    /// Returns `DateError::YearOutOfRange` for years outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_datetime<Tz: TimeZone>(value: &DateTime<Tz>) -> Result<Self, DateError> {
        Self::try_from(value.date_naive())
    }
}

impl TryFrom<NaiveDate> for Date {
    type Error = DateError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(value.year()).map_err(|_| DateError::YearOutOfRange(value.year()))?;
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(DateError::YearOutOfRange(value.year()));
        }
        // chrono guarantees month 1-12 and a valid day
        let month = u8::try_from(value.month()).map_err(|_| DateError::InvalidFormat(value.to_string()))?;
        let day = u8::try_from(value.day()).map_err(|_| DateError::InvalidFormat(value.to_string()))?;
        Self::new(year, month, day)
    }
}

/// Drops the time of day.
impl TryFrom<NaiveDateTime> for Date {
    type Error = DateError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::try_from(value.date())
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        match parts.as_slice() {
            [year, month, day] => Self::parse_components(year, month, day),
            [_] => Err(DateError::InvalidFormat(trimmed.to_owned())),
            _ => Err(DateError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} components: {trimmed}",
                parts.len()
            ))),
        }
    }
}

impl Date {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, DateError> {
        s.parse::<u16>().map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, DateError> {
        s.parse::<u8>().map_err(|_| DateError::InvalidFormat(s.to_owned()))
    }

    fn parse_components(year: &str, month: &str, day: &str) -> Result<Self, DateError> {
        // InvalidFormat if not numeric, then range validation per component
        let year = Self::parse_u16(year)?;
        let month = Self::parse_u8(month)?;
        let day = Self::parse_u8(day)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
