//! Request types for the shift schedule API.
//!
//! This module defines the JSON request structures for the `/week-report`
//! endpoint. The field values are the raw text pulled out of a printed
//! schedule; they are only validated when converted into models.

use serde::{Deserialize, Serialize};

use crate::config::ConfigLoader;
use crate::error::{ScheduleError, ScheduleResult};
use crate::models::{EmployeeName, EmployeeWeekSchedule, WEEK_LENGTH, WeekSchedule};

/// Request body for the `/week-report` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekReportRequest {
    /// The week header, `"MM/DD/YYYY - MM/DD/YYYY"`.
    pub week_range: String,
    /// The department the schedule was printed for.
    pub department: String,
    /// The department's reference number.
    pub department_id: u32,
    /// Every employee on the schedule.
    #[serde(default)]
    pub employees: Vec<EmployeeRequest>,
}

/// One employee in a week report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Middle name; empty or missing when unknown.
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Up to seven days in week order; `null` leaves a slot empty.
    #[serde(default)]
    pub days: Vec<Option<DayRequest>>,
}

/// One day in a week report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DayRequest {
    /// A department shift.
    Scheduled {
        /// The department description.
        department: String,
        /// The department's reference number.
        department_id: u32,
        /// `"H:MMx - H:MMx"`, or empty for no hours.
        #[serde(default)]
        hours: String,
    },
    /// A day without a department.
    Note {
        /// The text shown for the day.
        note: String,
    },
}

impl WeekReportRequest {
    /// Builds the week schedule described by this request.
    ///
    /// Days are placed at their position in `days`; meal deductions and the
    /// roster limit come from `config`.
    pub fn into_schedule(self, config: &ConfigLoader) -> ScheduleResult<WeekSchedule> {
        let mut schedule =
            WeekSchedule::new(&self.week_range, &self.department, self.department_id)?
                .with_max_employees(config.max_employees())?;

        for employee in self.employees {
            schedule.add_employee(employee.into_week(config)?)?;
        }

        Ok(schedule)
    }
}

impl EmployeeRequest {
    fn into_week(self, config: &ConfigLoader) -> ScheduleResult<EmployeeWeekSchedule> {
        if self.days.len() > WEEK_LENGTH {
            return Err(ScheduleError::CapacityExceeded {
                capacity: WEEK_LENGTH,
                message: format!(
                    "{} {} has {} days in one week",
                    self.first_name,
                    self.last_name,
                    self.days.len()
                ),
            });
        }

        let name = EmployeeName::new(
            self.first_name,
            self.last_name,
            self.middle_name.as_deref(),
        );
        let mut week = EmployeeWeekSchedule::with_meal_policy(name, config.meal_policy());

        for (index, day) in self.days.into_iter().enumerate() {
            match day {
                Some(DayRequest::Scheduled {
                    department,
                    department_id,
                    hours,
                }) => week.set_day(index, &department, department_id, &hours)?,
                Some(DayRequest::Note { note }) => week.set_note(index, &note)?,
                None => {}
            }
        }

        Ok(week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn request_json() -> serde_json::Value {
        serde_json::json!({
            "week_range": "11/25/2018 - 12/01/2018",
            "department": "Women's Shoes",
            "department_id": 6601,
            "employees": [{
                "first_name": "Lisa",
                "last_name": "Chen",
                "days": [
                    null,
                    {"department": "Women's Shoes", "department_id": 6601, "hours": "9:00a - 5:00p"},
                    {"note": "Vacation"}
                ]
            }]
        })
    }

    #[test]
    fn test_deserialize_day_variants() {
        let request: WeekReportRequest = serde_json::from_value(request_json()).unwrap();
        let days = &request.employees[0].days;
        assert!(days[0].is_none());
        assert!(matches!(
            days[1],
            Some(DayRequest::Scheduled {
                department_id: 6601,
                ..
            })
        ));
        assert!(matches!(days[2], Some(DayRequest::Note { .. })));
        assert_eq!(request.employees[0].middle_name, None);
    }

    #[test]
    fn test_into_schedule_places_days_by_position() {
        let request: WeekReportRequest = serde_json::from_value(request_json()).unwrap();
        let schedule = request.into_schedule(&ConfigLoader::default()).unwrap();

        let week = &schedule.employees()[0];
        assert!(week.day(0).is_none());
        assert_eq!(week.day_hours(1).unwrap(), Decimal::new(7, 0));
        assert_eq!(week.day(2).unwrap().label(), "Vacation");
        assert_eq!(week.scheduled_days(), 2);
    }

    #[test]
    fn test_more_than_seven_days_is_capacity_error() {
        let mut json = request_json();
        json["employees"][0]["days"] =
            serde_json::json!([null, null, null, null, null, null, null, {"note": "Off"}]);
        let request: WeekReportRequest = serde_json::from_value(json).unwrap();

        let result = request.into_schedule(&ConfigLoader::default());
        assert!(matches!(
            result,
            Err(ScheduleError::CapacityExceeded { capacity: 7, .. })
        ));
    }

    #[test]
    fn test_bad_hours_are_reported() {
        let mut json = request_json();
        json["employees"][0]["days"][1]["hours"] = serde_json::json!("9:00a - 5:00");
        let request: WeekReportRequest = serde_json::from_value(json).unwrap();

        let result = request.into_schedule(&ConfigLoader::default());
        assert!(matches!(result, Err(ScheduleError::InvalidFormat { .. })));
    }
}
