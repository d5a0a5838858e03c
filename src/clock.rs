//! Source of "today" for day highlighting.

use chrono::{Datelike, Local, NaiveDate};

use crate::{Date, prelude::*};

/// Supplies the current calendar day.
pub trait Clock {
    fn today(&self) -> Date;
}

/// Local wall-clock date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        let now = Local::now();
        match Date::from_datetime(&now) {
            Ok(today) => today,
            Err(err) => {
                // Only reachable with a system clock set outside years 1-9999.
                tracing::warn!(%err, "system date out of range, clamping");
                clamp_out_of_range(now.date_naive())
            },
        }
    }
}

fn clamp_out_of_range(naive: NaiveDate) -> Date {
    if naive.year() < 1 { Date::MIN } else { Date::MAX }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, From)]
pub struct FixedClock(pub Date);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

impl<F> Clock for F
where
    F: Fn() -> Date,
{
    fn today(&self) -> Date {
        self()
    }
}
