//! Error types for one-time passcode operations

use thiserror::Error;

/// Errors raised at the OTP boundary.
///
/// Derivation and verification never fail. These variants come from
/// parsing raw input into a [`Token`](crate::Token) or [`Code`](crate::Code),
/// or from a rejected submission.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    #[error("Token must not be empty")]
    EmptyToken,

    #[error("Token too short (min: {min}, actual: {actual})")]
    TokenTooShort { min: usize, actual: usize },

    #[error("Token too long (max: {max}, actual: {actual})")]
    TokenTooLong { max: usize, actual: usize },

    #[error("Code must be exactly 6 decimal digits")]
    InvalidCodeFormat,

    /// Deliberately shared by every rejected submission.
    #[error("Invalid or expired code")]
    InvalidOrExpiredCode,
}

impl OtpError {
    /// Stable code for programmatic handling by callers
    pub fn error_code(&self) -> &'static str {
        match self {
            OtpError::EmptyToken | OtpError::TokenTooShort { .. } | OtpError::TokenTooLong { .. } => {
                "INVALID_TOKEN"
            }
            OtpError::InvalidCodeFormat | OtpError::InvalidOrExpiredCode => "INVALID_CODE",
        }
    }

    /// Whether the error concerns the token rather than the submitted code
    pub fn is_token_error(&self) -> bool {
        self.error_code() == "INVALID_TOKEN"
    }
}
