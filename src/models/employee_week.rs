//! Employee week model.
//!
//! This module defines [`EmployeeWeekSchedule`], the seven day slots of one
//! employee's week, and the per-day summary handed to presentation code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::MealPolicy;
use crate::error::{ScheduleError, ScheduleResult};

use super::work_day::{DayAssignment, WorkDaySchedule};

/// Number of day slots in a week.
pub const WEEK_LENGTH: usize = 7;

/// An employee's name. Middle name is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeName {
    /// First name.
    pub first: String,
    /// Last name.
    pub last: String,
    /// Middle name, if known.
    #[serde(default)]
    pub middle: Option<String>,
}

impl EmployeeName {
    /// Creates a name; an empty middle name is treated as absent.
    pub fn new(first: impl Into<String>, last: impl Into<String>, middle: Option<&str>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
            middle: middle.filter(|m| !m.is_empty()).map(str::to_string),
        }
    }
}

/// What presentation code shows for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// `"<id>\n<label>"` for a department day, the note otherwise.
    pub department: String,
    /// `"<start> - <end>"`, or empty when nothing is scheduled.
    pub hours: String,
}

/// One employee's schedule for a week.
///
/// Slots are filled left to right by [`append_day`](Self::append_day) and
/// [`append_note`](Self::append_note), or written directly by
/// [`set_day`](Self::set_day).
///
/// # Examples
///
/// ```
/// use shift_schedule::models::{EmployeeName, EmployeeWeekSchedule};
/// use rust_decimal::Decimal;
///
/// let mut week = EmployeeWeekSchedule::new(EmployeeName::new("Lisa", "Chen", None));
/// week.append_note("Off").unwrap();
/// week.append_day("Shoes", 6601, "9:00a - 5:00p").unwrap();
/// week.append_day("Handbags", 6602, "1:00p - 3:00p").unwrap();
///
/// assert_eq!(week.week_total_hours(), Decimal::new(9, 0));
/// assert_eq!(week.week_department_hours(6601), Decimal::new(7, 0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeWeekSchedule {
    name: EmployeeName,
    days: [Option<WorkDaySchedule>; WEEK_LENGTH],
    scheduled: usize,
    #[serde(skip)]
    meal_policy: MealPolicy,
}

impl EmployeeWeekSchedule {
    /// Creates an empty week using the default meal policy.
    pub fn new(name: EmployeeName) -> Self {
        Self::with_meal_policy(name, MealPolicy::default())
    }

    /// Creates an empty week whose days are paid under `policy`.
    pub fn with_meal_policy(name: EmployeeName, policy: MealPolicy) -> Self {
        Self {
            name,
            days: Default::default(),
            scheduled: 0,
            meal_policy: policy,
        }
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &EmployeeName {
        &self.name
    }

    /// Returns how many slots have been counted as scheduled.
    pub fn scheduled_days(&self) -> usize {
        self.scheduled
    }

    /// Returns the day at `day`, if one has been set.
    pub fn day(&self, day: usize) -> Option<&WorkDaySchedule> {
        self.days.get(day).and_then(Option::as_ref)
    }

    /// Appends a department day at the next empty slot.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::CapacityExceeded`] once all seven slots are taken,
    /// or a format/range error from `hours`.
    pub fn append_day(&mut self, label: &str, id: u32, hours: &str) -> ScheduleResult<()> {
        let slot = self.next_open_slot()?;
        let day = WorkDaySchedule::with_hours(label, id, hours)?.with_meal_policy(self.meal_policy);
        self.fill(slot, day);
        Ok(())
    }

    /// Appends a note day at the next empty slot.
    pub fn append_note(&mut self, note: &str) -> ScheduleResult<()> {
        let slot = self.next_open_slot()?;
        self.fill(slot, WorkDaySchedule::note(note));
        Ok(())
    }

    fn next_open_slot(&self) -> ScheduleResult<usize> {
        let full = || {
            debug!(employee = %self.name.last, "Rejected append to a full week");
            ScheduleError::CapacityExceeded {
                capacity: WEEK_LENGTH,
                message: "attempted to schedule more than 7 days in a week".to_string(),
            }
        };

        if self.scheduled >= WEEK_LENGTH {
            return Err(full());
        }
        self.days.iter().position(Option::is_none).ok_or_else(full)
    }

    fn fill(&mut self, slot: usize, day: WorkDaySchedule) {
        self.days[slot] = Some(day);
        self.scheduled += 1;
    }

    /// Writes a department day at `day`, replacing whatever was there.
    ///
    /// The scheduled count only grows when the slot was empty or held a note.
    pub fn set_day(&mut self, day: usize, label: &str, id: u32, hours: &str) -> ScheduleResult<()> {
        check_day(day)?;
        let work_day =
            WorkDaySchedule::with_hours(label, id, hours)?.with_meal_policy(self.meal_policy);

        let previously_scheduled = matches!(
            self.days[day].as_ref().map(WorkDaySchedule::assignment),
            Some(DayAssignment::Department { .. })
        );
        if !previously_scheduled {
            self.scheduled = (self.scheduled + 1).min(WEEK_LENGTH);
        }
        self.days[day] = Some(work_day);
        Ok(())
    }

    /// Writes a note day at `day`, replacing whatever was there.
    ///
    /// The scheduled count grows when the slot was empty and shrinks when it
    /// held a department.
    pub fn set_note(&mut self, day: usize, note: &str) -> ScheduleResult<()> {
        check_day(day)?;
        match self.days[day].as_ref().map(WorkDaySchedule::assignment) {
            None => self.scheduled = (self.scheduled + 1).min(WEEK_LENGTH),
            Some(DayAssignment::Department { .. }) => {
                self.scheduled = self.scheduled.saturating_sub(1);
            }
            Some(DayAssignment::Note { .. }) => {}
        }
        self.days[day] = Some(WorkDaySchedule::note(note));
        Ok(())
    }

    /// Changes the hours of an existing department day.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::InvalidState`] when the slot is empty or holds a note.
    pub fn change_day_hours(&mut self, day: usize, hours: &str) -> ScheduleResult<()> {
        self.day_mut(day)?.change_hours(hours)
    }

    /// Returns the paid hours of the day at `day`.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::OutOfRange`] for `day >= 7`,
    /// [`ScheduleError::InvalidState`] for an empty slot.
    pub fn day_hours(&self, day: usize) -> ScheduleResult<Decimal> {
        Ok(self.existing_day(day)?.paid_hours())
    }

    /// Sums paid hours over every filled slot.
    pub fn week_total_hours(&self) -> Decimal {
        self.filled_days().map(WorkDaySchedule::paid_hours).sum()
    }

    /// Sums paid hours over the days assigned to department `id`.
    pub fn week_department_hours(&self, id: u32) -> Decimal {
        self.filled_days()
            .filter(|d| d.department_id() == Some(id))
            .map(WorkDaySchedule::paid_hours)
            .sum()
    }

    /// Returns the department text and hour text for the day at `day`.
    ///
    /// Hours are only shown for department days.
    pub fn day_summary(&self, day: usize) -> ScheduleResult<DaySummary> {
        let work_day = self.existing_day(day)?;
        Ok(match work_day.assignment() {
            DayAssignment::Department { id, label } => DaySummary {
                department: format!("{}\n{}", id, label),
                hours: work_day.hour_range_text(),
            },
            DayAssignment::Note { text } => DaySummary {
                department: text.clone(),
                hours: String::new(),
            },
        })
    }

    fn filled_days(&self) -> impl Iterator<Item = &WorkDaySchedule> {
        self.days.iter().flatten()
    }

    fn existing_day(&self, day: usize) -> ScheduleResult<&WorkDaySchedule> {
        check_day(day)?;
        self.days[day]
            .as_ref()
            .ok_or_else(|| ScheduleError::state(format!("day {} has no schedule", day)))
    }

    fn day_mut(&mut self, day: usize) -> ScheduleResult<&mut WorkDaySchedule> {
        check_day(day)?;
        self.days[day]
            .as_mut()
            .ok_or_else(|| ScheduleError::state(format!("day {} has no schedule", day)))
    }
}

fn check_day(day: usize) -> ScheduleResult<()> {
    if day < WEEK_LENGTH {
        Ok(())
    } else {
        Err(ScheduleError::range(day, "day index must be between 0 and 6"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn empty_week() -> EmployeeWeekSchedule {
        EmployeeWeekSchedule::new(EmployeeName::new("Lisa", "Chen", Some("")))
    }

    #[test]
    fn test_empty_middle_name_is_absent() {
        assert_eq!(empty_week().name().middle, None);
        let name = EmployeeName::new("Ana", "Ruiz", Some("Maria"));
        assert_eq!(name.middle.as_deref(), Some("Maria"));
    }

    #[test]
    fn test_appends_fill_left_to_right() {
        let mut week = empty_week();
        week.append_day("Shoes", 6601, "9:00a - 5:00p").unwrap();
        week.append_note("Off").unwrap();

        assert_eq!(week.day(0).unwrap().department_id(), Some(6601));
        assert_eq!(week.day(1).unwrap().label(), "Off");
        assert!(week.day(2).is_none());
        assert_eq!(week.scheduled_days(), 2);
    }

    #[test]
    fn test_eighth_append_is_capacity_error() {
        let mut week = empty_week();
        for _ in 0..WEEK_LENGTH {
            week.append_day("Shoes", 6601, "9:00a - 5:00p").unwrap();
        }

        let result = week.append_day("Shoes", 6601, "9:00a - 5:00p");
        assert!(matches!(
            result,
            Err(ScheduleError::CapacityExceeded { capacity: 7, .. })
        ));
        assert!(matches!(
            week.append_note("Off"),
            Err(ScheduleError::CapacityExceeded { .. })
        ));
        assert_eq!(week.week_total_hours(), dec("49"));
    }

    #[test]
    fn test_append_skips_slots_set_directly() {
        let mut week = empty_week();
        week.set_day(0, "Shoes", 6601, "9:00a - 5:00p").unwrap();
        week.append_note("Off").unwrap();
        assert_eq!(week.day(1).unwrap().label(), "Off");
    }

    #[test]
    fn test_rejected_append_leaves_slot_empty() {
        let mut week = empty_week();
        assert!(week.append_day("Shoes", 6601, "9:00a to 5:00p").is_err());
        assert!(week.day(0).is_none());
        assert_eq!(week.scheduled_days(), 0);
    }

    #[test]
    fn test_set_day_counts_each_department_slot_once() {
        let mut week = empty_week();
        week.set_day(3, "TestDept", 10, "4:30p - 12:30a").unwrap();
        week.set_day(3, "TestDept", 10, "1:00p - 3:00p").unwrap();
        assert_eq!(week.scheduled_days(), 1);
        assert_eq!(week.day_hours(3).unwrap(), dec("2.0"));
    }

    #[test]
    fn test_set_day_over_note_counts_again() {
        let mut week = empty_week();
        week.append_note("Off").unwrap();
        week.set_day(0, "TestDept", 10, "1:00p - 3:00p").unwrap();
        assert_eq!(week.scheduled_days(), 2);
        assert_eq!(week.day(0).unwrap().department_id(), Some(10));
    }

    #[test]
    fn test_scheduled_count_never_exceeds_week_length() {
        let mut week = empty_week();
        for _ in 0..WEEK_LENGTH {
            week.append_note("Off").unwrap();
        }
        week.set_day(0, "TestDept", 10, "1:00p - 3:00p").unwrap();
        assert_eq!(week.scheduled_days(), WEEK_LENGTH);
    }

    #[test]
    fn test_set_note_replaces_department_day() {
        let mut week = empty_week();
        week.set_day(4, "TestDept", 10, "9:00a - 5:00p").unwrap();
        week.set_note(4, "Called out").unwrap();
        assert_eq!(week.day(4).unwrap().label(), "Called out");
        assert_eq!(week.day_hours(4).unwrap(), Decimal::ZERO);
        assert_eq!(week.week_department_hours(10), Decimal::ZERO);
    }

    #[test]
    fn test_swapping_one_slot_does_not_fill_the_week() {
        let mut week = empty_week();
        for _ in 0..WEEK_LENGTH {
            week.set_day(0, "TestDept", 10, "9:00a - 5:00p").unwrap();
            week.set_note(0, "Off").unwrap();
        }
        assert!(week.scheduled_days() <= 1);

        week.append_note("Vacation").unwrap();
        assert_eq!(week.day(1).unwrap().label(), "Vacation");
        assert_eq!(week.day(0).unwrap().label(), "Off");
    }

    #[test]
    fn test_set_note_over_note_keeps_count() {
        let mut week = empty_week();
        week.set_note(2, "Off").unwrap();
        week.set_note(2, "Vacation").unwrap();
        assert_eq!(week.scheduled_days(), 1);
    }

    #[test]
    fn test_set_day_out_of_range() {
        let mut week = empty_week();
        let result = week.set_day(7, "TestDept", 10, "1:00p - 3:00p");
        assert!(matches!(result, Err(ScheduleError::OutOfRange { .. })));
    }

    #[test]
    fn test_day_hours_on_empty_slot_is_state_error() {
        let week = empty_week();
        assert!(matches!(
            week.day_hours(2),
            Err(ScheduleError::InvalidState { .. })
        ));
        assert!(matches!(
            week.day_hours(9),
            Err(ScheduleError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_week_totals() {
        let mut week = empty_week();
        week.set_day(3, "TestDept", 10, "4:30p - 12:30a").unwrap();
        week.set_day(5, "TestDept", 10, "1:00p - 3:00p").unwrap();
        week.set_day(6, "Other", 20, "1:00p - 6:00p").unwrap();
        week.append_note("Vacation").unwrap();

        assert_eq!(week.day_hours(3).unwrap(), dec("7.0"));
        assert_eq!(week.day_hours(5).unwrap(), dec("2.0"));
        assert_eq!(week.day_hours(0).unwrap(), Decimal::ZERO);
        assert_eq!(week.week_total_hours(), dec("13.5"));
        assert_eq!(week.week_department_hours(10), dec("9.0"));
        assert_eq!(week.week_department_hours(20), dec("4.5"));
        assert_eq!(week.week_department_hours(99), Decimal::ZERO);
    }

    #[test]
    fn test_change_day_hours() {
        let mut week = empty_week();
        week.set_day(1, "TestDept", 10, "9:00a - 5:00p").unwrap();
        week.change_day_hours(1, "9:00a - 1:00p").unwrap();
        assert_eq!(week.day_hours(1).unwrap(), dec("4.0"));
    }

    #[test]
    fn test_change_day_hours_on_note_or_empty_day_is_state_error() {
        let mut week = empty_week();
        week.append_note("Vacation").unwrap();
        assert!(matches!(
            week.change_day_hours(0, "9:00a - 5:00p"),
            Err(ScheduleError::InvalidState { .. })
        ));
        assert!(matches!(
            week.change_day_hours(4, "9:00a - 5:00p"),
            Err(ScheduleError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_day_summary_for_department_day() {
        let mut week = empty_week();
        week.set_day(2, "Women's Shoes", 6601, "9:00a - 5:30p").unwrap();
        let summary = week.day_summary(2).unwrap();
        assert_eq!(summary.department, "6601\nWomen's Shoes");
        assert_eq!(summary.hours, "9:00a - 5:30p");
    }

    #[test]
    fn test_day_summary_for_note_day() {
        let mut week = empty_week();
        week.append_note("Day Off Requested").unwrap();
        let summary = week.day_summary(0).unwrap();
        assert_eq!(summary.department, "Day Off Requested");
        assert_eq!(summary.hours, "");
    }

    #[test]
    fn test_day_summary_for_department_without_hours() {
        let mut week = empty_week();
        week.set_day(0, "Shoes", 6601, "").unwrap();
        let summary = week.day_summary(0).unwrap();
        assert_eq!(summary.department, "6601\nShoes");
        assert_eq!(summary.hours, "");
    }

    #[test]
    fn test_week_uses_its_meal_policy() {
        let mut policy = MealPolicy::default();
        policy.half_meal.unpaid_hours = Decimal::ZERO;
        let mut week =
            EmployeeWeekSchedule::with_meal_policy(EmployeeName::new("A", "B", None), policy);
        week.append_day("Shoes", 6601, "1:00p - 6:00p").unwrap();
        assert_eq!(week.week_total_hours(), dec("5.0"));
    }
}
