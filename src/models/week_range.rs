//! Week date range model.
//!
//! This module decodes the `"MM/DD/YYYY - MM/DD/YYYY"` week header into two
//! calendar dates. Fields are read from fixed columns, so the layout must
//! match exactly: two-digit month and day, four-digit year, `" - "` between.

use std::fmt;
use std::ops::Range;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ScheduleError, ScheduleResult};

/// Minimum length of a week range text.
pub const WEEK_RANGE_LEN: usize = 23;

/// Column offset between the start date and the end date.
const END_DATE_OFFSET: usize = 13;

const MONTH_COLUMNS: Range<usize> = 0..2;
const DAY_COLUMNS: Range<usize> = 3..5;
const YEAR_COLUMNS: Range<usize> = 6..10;

/// A month/day/year triple as written in the schedule header.
///
/// The values are not checked against the calendar;
/// [`to_naive_date`](Self::to_naive_date) does that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Month, 1-12 for a real date.
    pub month: u32,
    /// Day of month.
    pub day: u32,
    /// Four-digit year.
    pub year: u32,
}

impl CalendarDate {
    /// Returns `(month, day, year)`.
    pub fn as_tuple(&self) -> (u32, u32, u32) {
        (self.month, self.day, self.year)
    }

    /// Converts to a chrono date.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::OutOfRange`] if the triple is not a real date.
    pub fn to_naive_date(&self) -> ScheduleResult<NaiveDate> {
        i32::try_from(self.year)
            .ok()
            .and_then(|year| NaiveDate::from_ymd_opt(year, self.month, self.day))
            .ok_or_else(|| ScheduleError::range(self, "not a valid calendar date"))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.month, self.day, self.year)
    }
}

/// The first and last date of a schedule week.
///
/// # Examples
///
/// ```
/// use shift_schedule::models::WeekDateRange;
///
/// let range = WeekDateRange::parse("11/25/2018 - 12/01/2018").unwrap();
/// assert_eq!(range.start.as_tuple(), (11, 25, 2018));
/// assert_eq!(range.end.as_tuple(), (12, 1, 2018));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekDateRange {
    /// First day of the week.
    pub start: CalendarDate,
    /// Last day of the week.
    pub end: CalendarDate,
}

impl WeekDateRange {
    /// Decodes a week range from its fixed column layout.
    ///
    /// Only the date columns are read; the characters between them are not
    /// checked.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InvalidFormat`] if the text is shorter than 23
    /// characters or any date field is not all digits.
    pub fn parse(text: &str) -> ScheduleResult<Self> {
        if text.len() < WEEK_RANGE_LEN {
            return Err(ScheduleError::format(
                text,
                "week range must look like 'MM/DD/YYYY - MM/DD/YYYY'",
            ));
        }

        Ok(Self {
            start: decode_date(text, 0)?,
            end: decode_date(text, END_DATE_OFFSET)?,
        })
    }
}

impl fmt::Display for WeekDateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

fn decode_date(text: &str, offset: usize) -> ScheduleResult<CalendarDate> {
    Ok(CalendarDate {
        month: decode_field(text, &MONTH_COLUMNS, offset)?,
        day: decode_field(text, &DAY_COLUMNS, offset)?,
        year: decode_field(text, &YEAR_COLUMNS, offset)?,
    })
}

fn decode_field(text: &str, columns: &Range<usize>, offset: usize) -> ScheduleResult<u32> {
    let field = text
        .get(columns.start + offset..columns.end + offset)
        .filter(|f| f.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| {
            ScheduleError::format(
                text,
                format!(
                    "columns {}..{} must be digits",
                    columns.start + offset,
                    columns.end + offset
                ),
            )
        })?;

    field
        .parse()
        .map_err(|_| ScheduleError::format(text, format!("'{}' is not a number", field)))
}
