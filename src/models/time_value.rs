//! Clock time model.
//!
//! This module defines [`TimeValue`], a clock time that carries both its
//! 12-hour `"H:MMx"` text and its decimal 24-hour value.

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::calculation::HOURS_PER_DAY;
use crate::error::{ScheduleError, ScheduleResult};

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);
const NOON: u32 = 12;
const MIN_CLOCK_LEN: usize = 5;
const MAX_CLOCK_LEN: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    fn from_postfix(postfix: char) -> Option<Self> {
        match postfix.to_ascii_lowercase() {
            'a' => Some(Self::Am),
            'p' => Some(Self::Pm),
            _ => None,
        }
    }

    fn postfix(self) -> char {
        match self {
            Self::Am => 'a',
            Self::Pm => 'p',
        }
    }
}

/// A clock time in both 12-hour text form and decimal 24-hour form.
///
/// Whichever form the value was built from is kept as given; the other is
/// derived at construction. The value is immutable afterwards.
///
/// # Examples
///
/// ```
/// use shift_schedule::models::TimeValue;
/// use rust_decimal::Decimal;
///
/// let time = TimeValue::parse("1:15p").unwrap();
/// assert_eq!(time.hours(), Decimal::new(1325, 2));
///
/// let time = TimeValue::from_decimal_hours(Decimal::new(75, 2)).unwrap();
/// assert_eq!(time.as_str(), "12:45a");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeValue {
    clock: String,
    hours: Decimal,
}

impl TimeValue {
    /// Parses a clock string of the form `H:MMa`, `HH:MMa`, `H:MMp` or `HH:MMp`.
    ///
    /// Surrounding whitespace is ignored and the postfix is case-insensitive.
    /// The trimmed text is stored verbatim.
    ///
    /// # Errors
    ///
    /// - [`ScheduleError::InvalidFormat`] for a wrong length, a missing
    ///   `a`/`p` postfix, a missing colon or non-numeric digits.
    /// - [`ScheduleError::OutOfRange`] for an hour outside 1-12 or minutes
    ///   above 59.
    pub fn parse(input: &str) -> ScheduleResult<Self> {
        let clock = input.trim();

        if !clock.is_ascii() || !(MIN_CLOCK_LEN..=MAX_CLOCK_LEN).contains(&clock.len()) {
            return Err(ScheduleError::format(
                clock,
                "clock time must follow the H:MMa or H:MMp format",
            ));
        }

        let postfix_index = clock.len() - 1;
        let meridiem = clock[postfix_index..]
            .chars()
            .next()
            .and_then(Meridiem::from_postfix)
            .ok_or_else(|| ScheduleError::format(clock, "clock time must end with 'a' or 'p'"))?;

        let colon = clock
            .find(':')
            .ok_or_else(|| ScheduleError::format(clock, "clock time is missing ':'"))?;
        if colon + 3 != postfix_index {
            return Err(ScheduleError::format(
                clock,
                "clock time needs exactly two minute digits",
            ));
        }

        let hour = parse_digits(clock, &clock[..colon])?;
        let minute = parse_digits(clock, &clock[colon + 1..postfix_index])?;

        if !(1..=NOON).contains(&hour) {
            return Err(ScheduleError::range(
                hour,
                "clock hour must be between 1 and 12",
            ));
        }
        if minute >= 60 {
            return Err(ScheduleError::range(minute, "minutes must be below 60"));
        }

        let military_hour = match (meridiem, hour) {
            (Meridiem::Pm, NOON) => NOON,
            (Meridiem::Pm, h) => h + NOON,
            (Meridiem::Am, NOON) => 0,
            (Meridiem::Am, h) => h,
        };

        Ok(Self {
            clock: clock.to_string(),
            hours: Decimal::from(military_hour) + Decimal::from(minute) / MINUTES_PER_HOUR,
        })
    }

    /// Builds a clock time from decimal hours since midnight.
    ///
    /// Minutes are rounded to the nearest whole minute, halves away from
    /// zero. A rounded 60 carries into the next hour, except at 11 PM where
    /// it stays at `11:59p` so the time never leaves the day.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::OutOfRange`] unless `0 <= hours < 24`.
    pub fn from_decimal_hours(hours: Decimal) -> ScheduleResult<Self> {
        if hours < Decimal::ZERO || hours >= HOURS_PER_DAY {
            return Err(ScheduleError::range(
                hours,
                "decimal time must be at least 0 and below 24",
            ));
        }

        let whole = hours.trunc();
        let minutes = ((hours - whole) * MINUTES_PER_HOUR)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

        let (mut hour, mut minute) = match (whole.to_u32(), minutes.to_u32()) {
            (Some(hour), Some(minute)) => (hour, minute),
            _ => {
                return Err(ScheduleError::range(
                    hours,
                    "decimal time could not be split into hours and minutes",
                ));
            }
        };

        if minute == 60 {
            if hour == 23 {
                minute = 59;
            } else {
                hour += 1;
                minute = 0;
            }
        }

        let (display_hour, meridiem) = match hour {
            0 => (NOON, Meridiem::Am),
            h if h < NOON => (h, Meridiem::Am),
            NOON => (NOON, Meridiem::Pm),
            h => (h - NOON, Meridiem::Pm),
        };

        Ok(Self {
            clock: format!("{}:{:02}{}", display_hour, minute, meridiem.postfix()),
            hours,
        })
    }

    /// Returns the clock text, e.g. `"4:30p"`.
    pub fn as_str(&self) -> &str {
        &self.clock
    }

    /// Returns the decimal hours since midnight, e.g. `16.5`.
    pub fn hours(&self) -> Decimal {
        self.hours
    }
}

fn parse_digits(clock: &str, digits: &str) -> ScheduleResult<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ScheduleError::format(
            clock,
            format!("'{}' is not a number", digits),
        ));
    }
    digits
        .parse()
        .map_err(|_| ScheduleError::format(clock, format!("'{}' is not a number", digits)))
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clock)
    }
}

impl FromStr for TimeValue {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeValue {
    type Error = ScheduleError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TimeValue> for String {
    fn from(value: TimeValue) -> Self {
        value.clock
    }
}
