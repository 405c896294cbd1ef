//! Configuration types for schedule hour calculations.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default roster capacity of a week schedule.
pub const DEFAULT_MAX_EMPLOYEES: usize = 70;

/// Metadata about the scheduling policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PolicyMetadata {
    /// The human-readable name of the policy.
    pub name: String,
    /// Where the policy applies (e.g., "CA").
    pub jurisdiction: String,
    /// The date the policy was last checked or took effect.
    pub effective_date: NaiveDate,
}

impl Default for PolicyMetadata {
    fn default() -> Self {
        Self {
            name: "Retail meal period policy".to_string(),
            jurisdiction: "CA".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2018, 11, 27).unwrap_or_default(),
        }
    }
}

/// One tier of the unpaid meal deduction.
///
/// A shift whose raw length reaches `min_worked_hours` loses `unpaid_hours`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct MealTier {
    /// Raw shift length at which this tier applies.
    pub min_worked_hours: Decimal,
    /// Hours deducted when the tier applies.
    pub unpaid_hours: Decimal,
}

/// The tiered meal policy.
///
/// The full meal tier is checked first; the half meal tier only applies when
/// the full one does not.
///
/// # Example
///
/// ```
/// use shift_schedule::config::MealPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = MealPolicy::default();
/// assert_eq!(policy.full_meal.min_worked_hours, Decimal::new(75, 1));
/// assert_eq!(policy.half_meal.unpaid_hours, Decimal::new(5, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct MealPolicy {
    /// 1 hour unpaid from 7.5 raw hours by default.
    pub full_meal: MealTier,
    /// 30 minutes unpaid from 5 raw hours by default.
    pub half_meal: MealTier,
}

impl MealPolicy {
    /// Returns the unpaid hours owed for a shift of `raw_hours`.
    pub fn unpaid_hours_for(&self, raw_hours: Decimal) -> Decimal {
        if raw_hours >= self.full_meal.min_worked_hours {
            self.full_meal.unpaid_hours
        } else if raw_hours >= self.half_meal.min_worked_hours {
            self.half_meal.unpaid_hours
        } else {
            Decimal::ZERO
        }
    }

    /// Checks that the tiers are ordered and can never produce negative paid hours.
    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.half_meal.min_worked_hours > self.full_meal.min_worked_hours {
            return Err("half meal threshold exceeds full meal threshold".to_string());
        }
        for tier in [self.full_meal, self.half_meal] {
            if tier.unpaid_hours.is_sign_negative() {
                return Err(format!("negative unpaid hours {}", tier.unpaid_hours));
            }
            if tier.unpaid_hours > tier.min_worked_hours {
                return Err(format!(
                    "unpaid hours {} exceed threshold {}",
                    tier.unpaid_hours, tier.min_worked_hours
                ));
            }
        }
        Ok(())
    }
}

impl Default for MealPolicy {
    fn default() -> Self {
        Self {
            full_meal: MealTier {
                min_worked_hours: Decimal::from_parts(75, 0, 0, false, 1),
                unpaid_hours: Decimal::ONE,
            },
            half_meal: MealTier {
                min_worked_hours: Decimal::from_parts(5, 0, 0, false, 0),
                unpaid_hours: Decimal::from_parts(5, 0, 0, false, 1),
            },
        }
    }
}

/// Roster limits from roster.yaml.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct RosterConfig {
    /// The most employees a single week schedule may hold.
    pub max_employees: usize,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            max_employees: DEFAULT_MAX_EMPLOYEES,
        }
    }
}

/// The complete schedule configuration loaded from YAML files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleConfig {
    metadata: PolicyMetadata,
    meal_policy: MealPolicy,
    roster: RosterConfig,
}

impl ScheduleConfig {
    /// Creates a new ScheduleConfig from its component parts.
    pub fn new(metadata: PolicyMetadata, meal_policy: MealPolicy, roster: RosterConfig) -> Self {
        Self {
            metadata,
            meal_policy,
            roster,
        }
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the meal policy.
    pub fn meal_policy(&self) -> MealPolicy {
        self.meal_policy
    }

    /// Returns the roster limits.
    pub fn roster(&self) -> RosterConfig {
        self.roster
    }
}
