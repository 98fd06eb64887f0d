//! Configuration module with business-specific sub-modules
//!
//! - `environment` - Environment detection and logging configuration
//! - `otp` - One-time passcode token policy
//!
//! [`AppConfig::load_for`] layers, from lowest to highest precedence:
//! per-environment defaults, `config.<env>.toml` (optional), and
//! `JARVI__*` environment variables (`__` separates nested keys, e.g.
//! `JARVI__OTP__TOKEN__MIN_LENGTH=32`).

pub mod environment;
pub mod otp;

use std::path::Path;

use ::config::{Config, Environment as EnvSource, File, FileFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validation::ValidationErrors;

pub use environment::{Environment, LogFormat, LoggingConfig};
pub use otp::{OtpConfig, TokenPolicy};

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "JARVI";

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// OTP configuration
    #[serde(default)]
    pub otp: OtpConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            otp: OtpConfig::for_environment(environment),
        }
    }

    /// Load configuration from the working directory.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(".")
    }

    /// Load configuration from the files in `dir`.
    ///
    /// `.env` and `.env.<env>` are read first when present so they can
    /// select the environment and supply `JARVI__*` overrides. Variables
    /// already set in the process are never replaced.
    pub fn load_from(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();

        dotenvy::from_path(dir.join(".env")).ok();
        let environment = Environment::from_env();
        dotenvy::from_path(dir.join(environment.env_file())).ok();

        Self::load_for(environment, dir.join(environment.config_file()))
    }

    /// Load configuration for an explicit environment and config file path
    pub fn load_for(environment: Environment, config_file: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let defaults = Self::for_environment(environment);

        let settings = Config::builder()
            .add_source(Config::try_from(&defaults)?)
            .add_source(
                File::from(config_file.as_ref())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(EnvSource::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = ValidationErrors::new();
        let policy = &self.otp.token;

        if policy.min_length == 0 && self.environment.is_production() {
            errors.add_error(
                "otp.token.min_length",
                "must be at least 1 in production",
                "OUT_OF_RANGE",
            );
        }
        if policy.min_length > policy.max_length {
            errors.add_error(
                "otp.token.min_length",
                format!(
                    "must not exceed max_length ({} > {})",
                    policy.min_length, policy.max_length
                ),
                "OUT_OF_RANGE",
            );
        }
        if self.logging.level.trim().is_empty() {
            errors.add_error("logging.level", "must not be empty", "REQUIRED");
        }

        if errors.has_errors() {
            return Err(ConfigError::Invalid {
                message: errors.summary(),
            });
        }
        Ok(())
    }
}
