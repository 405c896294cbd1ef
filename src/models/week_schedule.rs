//! Week schedule model.
//!
//! This module contains the [`WeekSchedule`] reporting unit: the decoded
//! week range, the department the schedule was printed for, and every
//! employee's week. It also defines the serializable [`WeekReport`] view.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DEFAULT_MAX_EMPLOYEES;
use crate::error::{ScheduleError, ScheduleResult};

use super::employee_week::{DaySummary, EmployeeName, EmployeeWeekSchedule, WEEK_LENGTH};
use super::week_range::WeekDateRange;

/// One week of schedules for a department.
///
/// # Example
///
/// ```
/// use shift_schedule::models::{EmployeeName, EmployeeWeekSchedule, WeekSchedule};
/// use rust_decimal::Decimal;
///
/// let mut schedule = WeekSchedule::new("11/25/2018 - 12/01/2018", "Women's Shoes", 6601)?;
///
/// let mut week = EmployeeWeekSchedule::new(EmployeeName::new("Lisa", "Chen", None));
/// week.append_day("Women's Shoes", 6601, "9:00a - 5:00p")?;
/// week.append_day("Handbags", 6602, "9:00a - 5:00p")?;
/// schedule.add_employee(week)?;
///
/// assert_eq!(schedule.week_range().start.as_tuple(), (11, 25, 2018));
/// assert_eq!(schedule.total_department_hours(), Decimal::new(7, 0));
/// # Ok::<(), shift_schedule::error::ScheduleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSchedule {
    week_range: WeekDateRange,
    week_range_text: String,
    department: String,
    department_id: u32,
    employees: Vec<EmployeeWeekSchedule>,
    max_employees: usize,
}

impl WeekSchedule {
    /// Creates an empty schedule for `department`, decoding `week_range`.
    pub fn new(week_range: &str, department: &str, department_id: u32) -> ScheduleResult<Self> {
        Ok(Self {
            week_range: WeekDateRange::parse(week_range)?,
            week_range_text: week_range.to_string(),
            department: department.to_string(),
            department_id,
            employees: Vec::new(),
            max_employees: DEFAULT_MAX_EMPLOYEES,
        })
    }

    /// Creates a schedule already holding `employees`.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::CapacityExceeded`] when more than 70 employees are given.
    pub fn with_employees(
        week_range: &str,
        department: &str,
        department_id: u32,
        employees: Vec<EmployeeWeekSchedule>,
    ) -> ScheduleResult<Self> {
        let mut schedule = Self::new(week_range, department, department_id)?;
        schedule.check_capacity(employees.len())?;
        schedule.employees = employees;
        Ok(schedule)
    }

    /// Changes the roster capacity (70 unless configured otherwise).
    pub fn with_max_employees(mut self, max_employees: usize) -> ScheduleResult<Self> {
        self.max_employees = max_employees;
        self.check_capacity(self.employees.len())?;
        Ok(self)
    }

    fn check_capacity(&self, count: usize) -> ScheduleResult<()> {
        if count > self.max_employees {
            debug!(
                department_id = self.department_id,
                count,
                max_employees = self.max_employees,
                "Roster over capacity"
            );
            return Err(ScheduleError::CapacityExceeded {
                capacity: self.max_employees,
                message: format!(
                    "cannot schedule {} employees for department {}",
                    count, self.department_id
                ),
            });
        }
        Ok(())
    }

    /// Adds an employee's week.
    ///
    /// # Errors
    ///
    /// [`ScheduleError::CapacityExceeded`] when the roster is full.
    pub fn add_employee(&mut self, employee: EmployeeWeekSchedule) -> ScheduleResult<()> {
        self.check_capacity(self.employees.len() + 1)?;
        self.employees.push(employee);
        Ok(())
    }

    /// Returns the decoded week range.
    pub fn week_range(&self) -> &WeekDateRange {
        &self.week_range
    }

    /// Returns the week range as it was given.
    pub fn week_range_text(&self) -> &str {
        &self.week_range_text
    }

    /// Returns the department the schedule is for.
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Returns the reference number of the department.
    pub fn department_id(&self) -> u32 {
        self.department_id
    }

    /// Returns every employee's week.
    pub fn employees(&self) -> &[EmployeeWeekSchedule] {
        &self.employees
    }

    /// Sums every employee's paid hours in this schedule's department.
    pub fn total_department_hours(&self) -> Decimal {
        self.employees
            .iter()
            .map(|e| e.week_department_hours(self.department_id))
            .sum()
    }

    /// Builds the presentation view of the whole week.
    pub fn report(&self) -> WeekReport {
        WeekReport {
            week_range: self.week_range,
            department: self.department.clone(),
            department_id: self.department_id,
            employees: self
                .employees
                .iter()
                .map(|e| EmployeeReport::new(e, self.department_id))
                .collect(),
            total_department_hours: self.total_department_hours(),
        }
    }
}

/// One day in a [`WeekReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    /// Department and hour text.
    #[serde(flatten)]
    pub summary: DaySummary,
    /// Paid hours after the meal deduction.
    pub paid_hours: Decimal,
}

/// One employee in a [`WeekReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeReport {
    /// The employee's name.
    pub name: EmployeeName,
    /// Seven entries; `None` for an empty slot.
    pub days: Vec<Option<DayReport>>,
    /// Paid hours across every department.
    pub week_total_hours: Decimal,
    /// Paid hours in the report's department.
    pub week_department_hours: Decimal,
}

impl EmployeeReport {
    fn new(week: &EmployeeWeekSchedule, department_id: u32) -> Self {
        let days = (0..WEEK_LENGTH)
            .map(|day| {
                let summary = week.day_summary(day).ok()?;
                let paid_hours = week.day_hours(day).ok()?;
                Some(DayReport {
                    summary,
                    paid_hours,
                })
            })
            .collect();

        Self {
            name: week.name().clone(),
            days,
            week_total_hours: week.week_total_hours(),
            week_department_hours: week.week_department_hours(department_id),
        }
    }
}

/// Serializable view of a [`WeekSchedule`] with every total filled in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekReport {
    /// First and last date of the week.
    pub week_range: WeekDateRange,
    /// The department the schedule is for.
    pub department: String,
    /// The department's reference number.
    pub department_id: u32,
    /// Every employee's week.
    pub employees: Vec<EmployeeReport>,
    /// Paid hours in the department across all employees.
    pub total_department_hours: Decimal,
}
