//! Configuration loading and management for the shift schedule engine.
//!
//! This module loads the meal deduction policy and roster limits from YAML
//! files. Every value has a built-in default, so the schedule models work
//! without any configuration on disk.
//!
//! # Example
//!
//! ```no_run
//! use shift_schedule::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded policy: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    DEFAULT_MAX_EMPLOYEES, MealPolicy, MealTier, PolicyMetadata, RosterConfig, ScheduleConfig,
};
