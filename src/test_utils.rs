//! Shared constructors for unit tests.

use crate::{Date, Period};

pub fn date(year: u16, month: u8, day: u8) -> Date {
    Date::new(year, month, day).unwrap_or_else(|err| panic!("invalid test date {year}-{month}-{day}: {err}"))
}

pub fn period(start: (u16, u8, u8), end: (u16, u8, u8)) -> Period {
    Period::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2))
        .unwrap_or_else(|err| panic!("invalid test period: {err}"))
}
