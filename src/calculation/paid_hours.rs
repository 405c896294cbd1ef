//! Paid hours calculation functionality.
//!
//! This module turns a start and end time (decimal hours since midnight)
//! into paid hours by handling the midnight wraparound and subtracting the
//! unpaid meal period owed under a [`MealPolicy`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::MealPolicy;

/// Hours in a day, added to an end time at or before its start time.
pub const HOURS_PER_DAY: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// The result of calculating paid hours for one shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaidHoursBreakdown {
    /// Shift length before any deduction.
    pub raw_hours: Decimal,
    /// Unpaid meal time subtracted from the raw length.
    pub unpaid_meal_hours: Decimal,
    /// Hours paid after the deduction.
    pub paid_hours: Decimal,
    /// Whether the shift ended on the following day.
    pub crosses_midnight: bool,
}

/// Calculates paid hours for a shift between two decimal clock times.
///
/// An end time at or before the start time means the shift ran past
/// midnight, so a full day is added to the end. The meal deduction is then
/// chosen from the raw length: the full meal tier first, then the half meal
/// tier, otherwise nothing.
///
/// # Examples
///
/// ```
/// use shift_schedule::calculation::calculate_paid_hours;
/// use shift_schedule::config::MealPolicy;
/// use rust_decimal::Decimal;
///
/// // 4:30p to 12:30a is 8 raw hours, 1 hour of it unpaid.
/// let result = calculate_paid_hours(
///     Decimal::new(165, 1),
///     Decimal::new(5, 1),
///     &MealPolicy::default(),
/// );
/// assert!(result.crosses_midnight);
/// assert_eq!(result.raw_hours, Decimal::new(80, 1));
/// assert_eq!(result.paid_hours, Decimal::new(70, 1));
/// ```
pub fn calculate_paid_hours(
    start: Decimal,
    end: Decimal,
    policy: &MealPolicy,
) -> PaidHoursBreakdown {
    let crosses_midnight = end <= start;
    let end = if crosses_midnight {
        end + HOURS_PER_DAY
    } else {
        end
    };

    let raw_hours = end - start;
    let unpaid_meal_hours = policy.unpaid_hours_for(raw_hours);

    PaidHoursBreakdown {
        raw_hours,
        unpaid_meal_hours,
        paid_hours: raw_hours - unpaid_meal_hours,
        crosses_midnight,
    }
}
