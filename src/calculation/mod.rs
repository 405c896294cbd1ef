//! Calculation logic for the shift schedule engine.
//!
//! This module contains the paid hours calculation: midnight wraparound and
//! the tiered unpaid meal deduction.

mod paid_hours;

pub use paid_hours::{HOURS_PER_DAY, PaidHoursBreakdown, calculate_paid_hours};
