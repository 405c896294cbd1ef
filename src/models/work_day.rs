//! Work day model.
//!
//! This module defines [`WorkDaySchedule`], one day of an employee's week:
//! either a department assignment with an optional hour range, or a note
//! for a day without a shift.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::calculation::{PaidHoursBreakdown, calculate_paid_hours};
use crate::config::MealPolicy;
use crate::error::{ScheduleError, ScheduleResult};

use super::time_value::TimeValue;

/// Separator between the two clock times of an hour range.
pub const HOUR_SEPARATOR: &str = " - ";

/// What a day is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum DayAssignment {
    /// A shift in a department.
    Department {
        /// The department's reference number.
        id: u32,
        /// The department's description.
        label: String,
    },
    /// No department; the text is an informational note (e.g. "Vacation").
    Note {
        /// The note shown for the day.
        text: String,
    },
}

/// The start and end of a shift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourRange {
    /// When the shift starts.
    pub start: TimeValue,
    /// When the shift ends; at or before `start` means the next day.
    pub end: TimeValue,
}

impl HourRange {
    /// Creates a range from two clock times.
    pub fn new(start: TimeValue, end: TimeValue) -> Self {
        Self { start, end }
    }

    /// Parses `"H:MMx - H:MMx"`, splitting on the first `" - "`.
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_schedule::models::HourRange;
    ///
    /// let range = HourRange::parse("9:00a - 5:30p").unwrap();
    /// assert_eq!(range.start.as_str(), "9:00a");
    /// assert_eq!(range.end.as_str(), "5:30p");
    /// ```
    pub fn parse(text: &str) -> ScheduleResult<Self> {
        let (start, end) = text.split_once(HOUR_SEPARATOR).ok_or_else(|| {
            ScheduleError::format(text, "hour range must look like 'H:MMx - H:MMx'")
        })?;

        Ok(Self {
            start: TimeValue::parse(start)?,
            end: TimeValue::parse(end)?,
        })
    }

    /// Calculates raw and paid hours for this range.
    pub fn paid_hours(&self, policy: &MealPolicy) -> PaidHoursBreakdown {
        calculate_paid_hours(self.start.hours(), self.end.hours(), policy)
    }

    /// Formats the range as `"<start> - <end>"`.
    pub fn to_text(&self) -> String {
        format!("{}{}{}", self.start, HOUR_SEPARATOR, self.end)
    }
}

/// One day of an employee's schedule.
///
/// Paid hours are derived from the hour range and recalculated whenever the
/// range changes. A day without hours is paid nothing.
///
/// # Examples
///
/// ```
/// use shift_schedule::models::WorkDaySchedule;
/// use rust_decimal::Decimal;
///
/// let day = WorkDaySchedule::with_hours("Women's Shoes", 6601, "9:00a - 5:00p").unwrap();
/// assert_eq!(day.paid_hours(), Decimal::new(7, 0));
///
/// let off = WorkDaySchedule::note("Vacation");
/// assert_eq!(off.paid_hours(), Decimal::ZERO);
/// assert!(off.department_id().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkDaySchedule {
    assignment: DayAssignment,
    hours: Option<HourRange>,
    paid_hours: Decimal,
    #[serde(skip)]
    meal_policy: MealPolicy,
}

impl WorkDaySchedule {
    /// Creates a department day from an hour range text.
    ///
    /// An empty `hours` string creates the day without hours.
    pub fn with_hours(label: impl Into<String>, id: u32, hours: &str) -> ScheduleResult<Self> {
        let mut day = Self::unscheduled(DayAssignment::Department {
            id,
            label: label.into(),
        });
        day.set_hours(hours)?;
        Ok(day)
    }

    /// Creates a department day from two clock times.
    pub fn with_times(label: impl Into<String>, id: u32, start: TimeValue, end: TimeValue) -> Self {
        let mut day = Self::unscheduled(DayAssignment::Department {
            id,
            label: label.into(),
        });
        day.set_times(Some(HourRange::new(start, end)));
        day
    }

    /// Creates a day with no department and no hours, only a note.
    pub fn note(text: impl Into<String>) -> Self {
        Self::unscheduled(DayAssignment::Note { text: text.into() })
    }

    fn unscheduled(assignment: DayAssignment) -> Self {
        Self {
            assignment,
            hours: None,
            paid_hours: Decimal::ZERO,
            meal_policy: MealPolicy::default(),
        }
    }

    /// Replaces the meal policy and recalculates paid hours under it.
    pub fn with_meal_policy(mut self, policy: MealPolicy) -> Self {
        self.meal_policy = policy;
        self.recalculate();
        self
    }

    /// Sets the hours from `"H:MMx - H:MMx"` text; an empty string clears them.
    ///
    /// On error the previous hours are kept.
    pub fn set_hours(&mut self, hours: &str) -> ScheduleResult<()> {
        let range = if hours.is_empty() {
            None
        } else {
            Some(HourRange::parse(hours)?)
        };
        self.set_times(range);
        Ok(())
    }

    /// Sets the hours from decimal start and end times.
    ///
    /// A negative start clears the hours. On error the previous hours are kept.
    pub fn set_decimal_hours(&mut self, start: Decimal, end: Decimal) -> ScheduleResult<()> {
        let range = if start < Decimal::ZERO {
            None
        } else {
            Some(HourRange::new(
                TimeValue::from_decimal_hours(start)?,
                TimeValue::from_decimal_hours(end)?,
            ))
        };
        self.set_times(range);
        Ok(())
    }

    /// Sets or clears the hour range.
    pub fn set_times(&mut self, range: Option<HourRange>) {
        self.hours = range;
        self.recalculate();
    }

    /// Changes the hours of a department day, keeping its department.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InvalidState`] for a note day; a department has to
    /// be assigned by replacing the whole day first.
    pub fn change_hours(&mut self, hours: &str) -> ScheduleResult<()> {
        if let DayAssignment::Note { text } = &self.assignment {
            return Err(ScheduleError::state(format!(
                "day '{}' has no department to change hours for",
                text
            )));
        }
        self.set_hours(hours)
    }

    fn recalculate(&mut self) {
        self.paid_hours = self
            .breakdown()
            .map(|b| b.paid_hours)
            .unwrap_or(Decimal::ZERO);
    }

    /// Returns the raw/unpaid/paid split, or `None` without hours.
    pub fn breakdown(&self) -> Option<PaidHoursBreakdown> {
        self.hours.as_ref().map(|r| r.paid_hours(&self.meal_policy))
    }

    /// Returns the paid hours for the day.
    pub fn paid_hours(&self) -> Decimal {
        self.paid_hours
    }

    /// Returns what the day is assigned to.
    pub fn assignment(&self) -> &DayAssignment {
        &self.assignment
    }

    /// Returns the department number, or `None` for a note day.
    pub fn department_id(&self) -> Option<u32> {
        match self.assignment {
            DayAssignment::Department { id, .. } => Some(id),
            DayAssignment::Note { .. } => None,
        }
    }

    /// Returns the department description or the note text.
    pub fn label(&self) -> &str {
        match &self.assignment {
            DayAssignment::Department { label, .. } => label,
            DayAssignment::Note { text } => text,
        }
    }

    /// Returns the hour range, if any.
    pub fn hours(&self) -> Option<&HourRange> {
        self.hours.as_ref()
    }

    /// Returns the start time text, or an empty string without hours.
    pub fn start_time(&self) -> &str {
        self.hours.as_ref().map_or("", |r| r.start.as_str())
    }

    /// Returns the end time text, or an empty string without hours.
    pub fn end_time(&self) -> &str {
        self.hours.as_ref().map_or("", |r| r.end.as_str())
    }

    /// Returns `"<start> - <end>"`, or an empty string without hours.
    pub fn hour_range_text(&self) -> String {
        self.hours.as_ref().map(HourRange::to_text).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn dept_day(hours: &str) -> WorkDaySchedule {
        WorkDaySchedule::with_hours("TestDept", 10, hours).unwrap()
    }

    #[test]
    fn test_full_day_deducts_one_hour() {
        assert_eq!(dept_day("9:00a - 5:00p").paid_hours(), dec("7.0"));
    }

    #[test]
    fn test_afternoon_deducts_half_hour() {
        assert_eq!(dept_day("1:00p - 6:00p").paid_hours(), dec("4.5"));
    }

    #[test]
    fn test_closing_shift_past_midnight() {
        let day = dept_day("4:30p - 12:30a");
        assert_eq!(day.paid_hours(), dec("7.0"));
        assert!(day.breakdown().unwrap().crosses_midnight);
    }

    #[test]
    fn test_short_shift_is_fully_paid() {
        assert_eq!(dept_day("1:00p - 3:00p").paid_hours(), dec("2.0"));
    }

    #[test]
    fn test_empty_hours_means_no_shift() {
        let day = dept_day("");
        assert_eq!(day.paid_hours(), Decimal::ZERO);
        assert_eq!(day.start_time(), "");
        assert_eq!(day.end_time(), "");
        assert_eq!(day.hour_range_text(), "");
        assert_eq!(day.department_id(), Some(10));
    }

    #[test]
    fn test_missing_separator_is_format_error() {
        let result = WorkDaySchedule::with_hours("TestDept", 10, "9:00a-5:00p");
        assert!(matches!(result, Err(ScheduleError::InvalidFormat { .. })));
    }

    #[test]
    fn test_with_times() {
        let day = WorkDaySchedule::with_times(
            "TestDept",
            10,
            TimeValue::parse("8:00a").unwrap(),
            TimeValue::parse("4:30p").unwrap(),
        );
        assert_eq!(day.paid_hours(), dec("7.5"));
        assert_eq!(day.hour_range_text(), "8:00a - 4:30p");
    }

    #[test]
    fn test_note_day() {
        let day = WorkDaySchedule::note("Holiday");
        assert_eq!(day.label(), "Holiday");
        assert_eq!(day.department_id(), None);
        assert!(day.hours().is_none());
        assert!(day.breakdown().is_none());
    }

    #[test]
    fn test_set_decimal_hours() {
        let mut day = dept_day("");
        day.set_decimal_hours(dec("9.0"), dec("17.0")).unwrap();
        assert_eq!(day.start_time(), "9:00a");
        assert_eq!(day.end_time(), "5:00p");
        assert_eq!(day.paid_hours(), dec("7.0"));
    }

    #[test]
    fn test_negative_decimal_start_clears_hours() {
        let mut day = dept_day("9:00a - 5:00p");
        day.set_decimal_hours(dec("-1"), dec("-1")).unwrap();
        assert!(day.hours().is_none());
        assert_eq!(day.paid_hours(), Decimal::ZERO);
    }

    #[test]
    fn test_set_times_none_clears_hours() {
        let mut day = dept_day("9:00a - 5:00p");
        day.set_times(None);
        assert_eq!(day.paid_hours(), Decimal::ZERO);
        assert_eq!(day.start_time(), "");
    }

    #[test]
    fn test_rejected_update_keeps_previous_hours() {
        let mut day = dept_day("9:00a - 5:00p");

        assert!(day.set_hours("9:00a - 25:00p").is_err());
        assert_eq!(day.hour_range_text(), "9:00a - 5:00p");
        assert_eq!(day.paid_hours(), dec("7.0"));

        assert!(day.set_decimal_hours(dec("9.0"), dec("24")).is_err());
        assert_eq!(day.hour_range_text(), "9:00a - 5:00p");
        assert_eq!(day.paid_hours(), dec("7.0"));
    }

    #[test]
    fn test_change_hours_on_department_day() {
        let mut day = dept_day("9:00a - 5:00p");
        day.change_hours("1:00p - 3:00p").unwrap();
        assert_eq!(day.paid_hours(), dec("2.0"));
        assert_eq!(day.department_id(), Some(10));
    }

    #[test]
    fn test_change_hours_on_note_day_is_state_error() {
        let mut day = WorkDaySchedule::note("Vacation");
        let result = day.change_hours("9:00a - 5:00p");
        assert!(matches!(result, Err(ScheduleError::InvalidState { .. })));
        assert!(day.hours().is_none());
    }

    #[test]
    fn test_meal_policy_override_recalculates() {
        let mut policy = MealPolicy::default();
        policy.full_meal.unpaid_hours = dec("0.75");
        let day = dept_day("9:00a - 5:00p").with_meal_policy(policy);
        assert_eq!(day.paid_hours(), dec("7.25"));
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(dept_day("9:00a - 5:00p")).unwrap();
        assert_eq!(json["assignment"]["kind"], "department");
        assert_eq!(json["assignment"]["id"], 10);
        assert_eq!(json["hours"]["start"], "9:00a");
        assert_eq!(json["paid_hours"].as_str().map(dec), Some(dec("7")));
        assert!(json.get("meal_policy").is_none());
    }
}
