use std::{cmp::Ordering, iter, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Date, DateError, PERIOD_SEPARATOR, prelude::*};

/// An inclusive range of calendar days.
/// The start date is always less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct Period {
    start: Date,
    end:   Date,
}

/// Error type for period construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PeriodError {
    /// Start date is after end date.
    #[error("Invalid period: start ({start}) is after end ({end})")]
    InvalidRange { start: Date, end: Date },

    /// Error parsing a date component.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid period format.
    #[error("Invalid period format: {0}")]
    InvalidFormat(String),
}

impl Period {
    /// Creates a new period with validation.
    ///
    /// # Errors
    /// Returns `PeriodError::InvalidRange` if start > end.
    pub fn new(start: Date, end: Date) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A period covering a single day.
    pub const fn single(date: Date) -> Self {
        Self { start: date, end: date }
    }

    /// Returns the start date of the period
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the end date of the period
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (Date, Date) {
        (self.start, self.end)
    }

    /// Checks if the period contains a given date (both ends inclusive)
    pub fn contains(&self, date: &Date) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Checks if this period shares at least one day with another
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this period is completely contained within another period
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Number of days covered, counting both ends.
    pub fn len_days(&self) -> u32 {
        // start <= end keeps the span between 0 and the width of the calendar
        u32::try_from(self.start.days_until(&self.end)).map_or(u32::MAX, |span| span + 1)
    }

    /// Every day in the period, ascending.
    pub fn days(&self) -> impl Iterator<Item = Date> + use<> {
        let end = self.end;
        iter::successors(Some(self.start), move |day| day.succ_day().filter(|next| *next <= end))
    }
}

impl From<Period> for (Date, Date) {
    fn from(period: Period) -> Self {
        period.dates()
    }
}

impl TryFrom<(Date, Date)> for Period {
    type Error = PeriodError;

    fn try_from((start, end): (Date, Date)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(PERIOD_SEPARATOR).count();

        match separator_count {
            0 => Err(PeriodError::InvalidFormat(format!(
                "No period separator found (expected '{PERIOD_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(PERIOD_SEPARATOR).ok_or_else(|| {
                    PeriodError::InvalidFormat(format!("Separator '{PERIOD_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = start_str.trim().parse::<Date>()?;
                let end = end_str.trim().parse::<Date>()?;

                Self::new(start, end)
            },
            _ => Err(PeriodError::InvalidFormat(format!(
                "Too many '{PERIOD_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for Period {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
