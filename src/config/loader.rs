//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading schedule
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ScheduleError, ScheduleResult};

use super::types::{MealPolicy, PolicyMetadata, RosterConfig, ScheduleConfig};

/// Loads and provides access to schedule configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── schedule.yaml     # Policy metadata
/// ├── meal_policy.yaml  # Unpaid meal deduction tiers
/// └── roster.yaml       # Roster limits
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_schedule::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Meal policy: {}", loader.metadata().name);
/// # Ok::<(), shift_schedule::error::ScheduleError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ScheduleConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if any file is missing, is not valid YAML, or holds a
    /// meal policy whose tiers could produce negative paid hours.
    pub fn load<P: AsRef<Path>>(path: P) -> ScheduleResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PolicyMetadata>(&path.join("schedule.yaml"))?;

        let meal_policy_path = path.join("meal_policy.yaml");
        let meal_policy = Self::load_yaml::<MealPolicy>(&meal_policy_path)?;
        meal_policy
            .validate()
            .map_err(|message| ScheduleError::ConfigParseError {
                path: meal_policy_path.display().to_string(),
                message,
            })?;

        let roster = Self::load_yaml::<RosterConfig>(&path.join("roster.yaml"))?;

        debug!(
            policy = %metadata.name,
            max_employees = roster.max_employees,
            "Loaded schedule configuration"
        );

        Ok(Self {
            config: ScheduleConfig::new(metadata, meal_policy, roster),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ScheduleResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ScheduleError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ScheduleError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying schedule configuration.
    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        self.config.metadata()
    }

    /// Returns the meal policy used for paid hour calculations.
    pub fn meal_policy(&self) -> MealPolicy {
        self.config.meal_policy()
    }

    /// Returns the maximum number of employees per week schedule.
    pub fn max_employees(&self) -> usize {
        self.config.roster().max_employees
    }
}
