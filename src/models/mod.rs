//! Core data models for the shift schedule engine.
//!
//! This module contains the clock time, work day, employee week and week
//! schedule models.

mod employee_week;
mod time_value;
mod week_range;
mod week_schedule;
mod work_day;

pub use employee_week::{DaySummary, EmployeeName, EmployeeWeekSchedule, WEEK_LENGTH};
pub use time_value::TimeValue;
pub use week_range::{CalendarDate, WEEK_RANGE_LEN, WeekDateRange};
pub use week_schedule::{DayReport, EmployeeReport, WeekReport, WeekSchedule};
pub use work_day::{DayAssignment, HOUR_SEPARATOR, HourRange, WorkDaySchedule};
