use std::path::PathBuf;

use crate::api::{DEFAULT_ENV_LOG_FILE, DEFAULT_PLANET_RADIUS};
use crate::error::ConfigError;
use crate::operations::transform::validate_radius;

/// Environment variable naming the environment log file.
pub const ENV_LOG_FILE_VAR: &str = "ENV_LOG_FILE";

/// Environment variable overriding the default planet radius.
pub const PLANET_RADIUS_VAR: &str = "DRIFTER_PLANET_RADIUS";

/// Runtime settings of the boundary layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where environment records are appended.
    pub env_log_file: PathBuf,
    /// Radius of generated planets.
    pub planet_radius: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            env_log_file: PathBuf::from(DEFAULT_ENV_LOG_FILE),
            planet_radius: DEFAULT_PLANET_RADIUS,
        }
    }
}

impl Config {
    /// Resolves the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an unusable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves the configuration through `lookup`, falling back to defaults
    /// for unset or empty variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the radius does not parse as
    /// a finite positive number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let set = |name: &str| lookup(name).filter(|v: &String| !v.is_empty());
        let mut config = Self::default();

        if let Some(path) = set(ENV_LOG_FILE_VAR) {
            config.env_log_file = PathBuf::from(path);
        }

        if let Some(value) = set(PLANET_RADIUS_VAR) {
            config.planet_radius = value
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|r| validate_radius(*r).is_ok())
                .ok_or(ConfigError::InvalidValue {
                    name: PLANET_RADIUS_VAR,
                    value,
                })?;
        }

        Ok(config)
    }
}
