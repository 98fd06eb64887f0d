//! One-time passcode configuration

use serde::{Deserialize, Serialize};

use super::environment::Environment;

/// Length bounds applied to raw tokens before a code is derived from them.
///
/// Lengths are counted in bytes of the UTF-8 encoding, which is what the
/// hash consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenPolicy {
    /// Minimum token length in bytes
    #[serde(default = "default_min_length")]
    pub min_length: usize,

    /// Maximum token length in bytes
    #[serde(default = "default_max_length")]
    pub max_length: usize,
}

impl Default for TokenPolicy {
    fn default() -> Self {
        Self {
            min_length: default_min_length(),
            max_length: default_max_length(),
        }
    }
}

impl TokenPolicy {
    /// Policy that accepts any non-empty token up to the default maximum
    pub fn permissive() -> Self {
        Self {
            min_length: 1,
            max_length: default_max_length(),
        }
    }

    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }
}

/// OTP configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Boundary policy for raw tokens
    #[serde(default)]
    pub token: TokenPolicy,
}

impl OtpConfig {
    /// Create OTP config for environment
    pub fn for_environment(env: Environment) -> Self {
        let token = match env {
            Environment::Development => TokenPolicy::permissive(),
            Environment::Staging | Environment::Production => TokenPolicy::default(),
        };
        Self { token }
    }

    pub fn with_token_policy(mut self, token: TokenPolicy) -> Self {
        self.token = token;
        self
    }
}

fn default_min_length() -> usize {
    16
}

fn default_max_length() -> usize {
    4096
}
