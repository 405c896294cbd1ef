//! Weekly retail shift schedules.
//!
//! This crate records each employee's department assignment and clock-time
//! range for a 7-day week, computes paid hours after unpaid meal breaks, and
//! decodes the week's date range from the schedule header.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
