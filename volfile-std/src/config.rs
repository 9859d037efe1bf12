//! Dispatch configuration.

use std::env::{self, VarError};
use volfile_core::ConfigError;

/// Environment variable read by [`DispatchConfig::from_env`].
pub const LOG_LEVEL_VAR: &str = "VOLFILE_LOG_LEVEL";

/// Settings injected into a [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    /// Verbosity threshold. Warnings are emitted at level 1 and above.
    pub log_level: u32,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchConfig {
    /// Level 0 (silent).
    pub const fn new() -> Self {
        Self { log_level: 0 }
    }

    /// Set the verbosity threshold.
    pub fn with_log_level(mut self, log_level: u32) -> Self {
        self.log_level = log_level;
        self
    }

    /// Whether advisory warnings should be emitted.
    pub fn warnings_enabled(&self) -> bool {
        self.log_level >= 1
    }

    /// Read the log level from `VOLFILE_LOG_LEVEL`, defaulting when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new().with_log_level_var(env::var(LOG_LEVEL_VAR))
    }

    fn with_log_level_var(self, var: Result<String, VarError>) -> Result<Self, ConfigError> {
        match var {
            Ok(value) => self.with_log_level_str(&value),
            Err(VarError::NotPresent) => Ok(self),
            Err(VarError::NotUnicode(raw)) => Err(ConfigError::InvalidLogLevel {
                var: LOG_LEVEL_VAR,
                value: raw.to_string_lossy().into_owned(),
            }),
        }
    }

    fn with_log_level_str(self, value: &str) -> Result<Self, ConfigError> {
        let level = value
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidLogLevel {
                var: LOG_LEVEL_VAR,
                value: value.to_owned(),
            })?;
        Ok(self.with_log_level(level))
    }
}
