//! Configuration management
//!
//! Loads form surface settings from config.toml with environment overrides.
//! Every value has a built-in default so the surface also runs without a
//! config file.

use std::time::Duration;

use ::config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Form surface configuration
#[derive(Debug, Deserialize, Clone)]
pub struct FormConfig {
    /// Submission attempts allowed per session
    pub max_attempts: u32,

    /// Simulated submission delay in milliseconds
    pub submit_delay_ms: u64,

    /// Interval between fact rotations in milliseconds
    pub fact_interval_ms: u64,

    /// Maximum accepted field input length (characters)
    pub max_field_length: usize,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            submit_delay_ms: 2000,
            fact_interval_ms: 4000,
            max_field_length: 512,
        }
    }
}

impl FormConfig {
    /// Load configuration from config.toml with FORMGATE_* environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("max_attempts", 5_i64)?
            .set_default("submit_delay_ms", 2000_i64)?
            .set_default("fact_interval_ms", 4000_i64)?
            .set_default("max_field_length", 512_i64)?
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("FORMGATE"))
            .build()?;

        let config: FormConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.max_attempts == 0 {
            return Err(ConfigError::Message(
                "max_attempts must be greater than 0".into(),
            ));
        }

        if self.submit_delay_ms == 0 {
            return Err(ConfigError::Message(
                "submit_delay_ms must be greater than 0".into(),
            ));
        }

        if self.fact_interval_ms == 0 {
            return Err(ConfigError::Message(
                "fact_interval_ms must be greater than 0".into(),
            ));
        }

        if self.max_field_length == 0 {
            return Err(ConfigError::Message(
                "max_field_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Get the simulated submission delay as Duration
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    /// Get the fact rotation interval as Duration
    pub fn fact_interval(&self) -> Duration {
        Duration::from_millis(self.fact_interval_ms)
    }
}
