//! One-time passcode value object.

use std::fmt;
use std::str::FromStr;

use jarvi_shared::validation::validators;
use serde::{Deserialize, Serialize};

use crate::errors::OtpError;

/// Number of decimal digits in a code
pub const CODE_LENGTH: usize = 6;

/// Size of the code space (`10^CODE_LENGTH`)
pub const CODE_MODULUS: u32 = 1_000_000;

/// A six-digit decimal passcode, `000000` through `999999`.
///
/// Held as a string so leading zeros survive. A `Code` is only ever the
/// return value of a derivation or the result of parsing a candidate; it
/// is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(String);

impl Code {
    /// Parses a candidate that must be exactly six ASCII digits.
    ///
    /// No trimming is applied: `" 12345"` and `"123456\n"` are rejected.
    pub fn parse(candidate: &str) -> Result<Self, OtpError> {
        if validators::is_ascii_digits(candidate, CODE_LENGTH) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(OtpError::InvalidCodeFormat)
        }
    }

    /// Renders `value mod 1_000_000`, left-padded with zeros.
    pub fn from_value(value: u32) -> Self {
        Self(format!("{:0width$}", value % CODE_MODULUS, width = CODE_LENGTH))
    }

    /// Numeric value of the code
    pub fn value(&self) -> u32 {
        self.0
            .bytes()
            .fold(0, |acc, digit| acc * 10 + u32::from(digit - b'0'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Code {
    type Err = OtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Code {
    type Error = OtpError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if validators::is_ascii_digits(&value, CODE_LENGTH) {
            Ok(Self(value))
        } else {
            Err(OtpError::InvalidCodeFormat)
        }
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl AsRef<str> for Code {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
