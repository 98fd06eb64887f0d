//! Opaque token from which a one-time passcode is derived.

use std::fmt;

use jarvi_shared::config::TokenPolicy;
use jarvi_shared::validation::validators;

use crate::errors::OtpError;

/// A secret token, consumed as the bytes of its UTF-8 encoding.
///
/// Issuance, storage and expiry of tokens belong to the caller. Any string
/// is a valid token for derivation; [`Token::parse`] is the stricter
/// constructor for values arriving from outside the process.
#[derive(Clone, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wraps any string, including the empty string.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Validates a raw token against a length policy.
    ///
    /// Blank input is always rejected, whatever the policy's minimum.
    pub fn parse(raw: &str, policy: &TokenPolicy) -> Result<Self, OtpError> {
        if !validators::not_empty(raw) {
            return Err(OtpError::EmptyToken);
        }

        if !validators::length_between(raw, policy.min_length, policy.max_length) {
            let actual = raw.len();
            return Err(if actual < policy.min_length {
                OtpError::TokenTooShort {
                    min: policy.min_length,
                    actual,
                }
            } else {
                OtpError::TokenTooLong {
                    max: policy.max_length,
                    actual,
                }
            });
        }

        Ok(Self(raw.to_string()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// The raw secret. Do not log it.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
