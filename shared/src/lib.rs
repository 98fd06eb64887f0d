//! Shared utilities and common types for Jarvi server crates
//!
//! This crate provides functionality used across all workspace members:
//! - Configuration types and the layered loader
//! - Validation helpers

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, ConfigError, Environment, LogFormat, LoggingConfig, OtpConfig, TokenPolicy};
pub use utils::validation;
