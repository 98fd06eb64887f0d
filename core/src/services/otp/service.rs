//! Boundary service applying the token policy before derivation

use jarvi_shared::config::OtpConfig;

use crate::domain::entities::{Code, Token};
use crate::errors::{OtpError, OtpResult};

use super::codec::OtpCodec;
use super::traits::CodeDerivation;

/// Entry point for callers holding raw, untrusted strings.
///
/// The service owns no mutable state. Expiry, single-use and attempt
/// limits are enforced by whoever stores the token.
#[derive(Debug, Clone)]
pub struct OtpService<C: CodeDerivation = OtpCodec> {
    codec: C,
    config: OtpConfig,
}

impl OtpService<OtpCodec> {
    /// Create a service backed by the SHA-256 codec
    pub fn new(config: OtpConfig) -> Self {
        Self::with_codec(OtpCodec::new(), config)
    }
}

impl<C: CodeDerivation> OtpService<C> {
    /// Create a service with a custom derivation
    pub fn with_codec(codec: C, config: OtpConfig) -> Self {
        Self { codec, config }
    }

    pub fn config(&self) -> &OtpConfig {
        &self.config
    }

    /// Derive the code to hand to a delivery channel.
    ///
    /// # Errors
    ///
    /// Returns a token error if `raw_token` violates the configured policy.
    pub fn issue_code(&self, raw_token: &str) -> OtpResult<Code> {
        let token = self.accept_token(raw_token)?;
        let code = self.codec.derive(&token);

        tracing::debug!(
            token_len = token.len(),
            event = "otp_derived",
            "Derived one-time code"
        );

        Ok(code)
    }

    /// Check a submitted code against a stored token.
    ///
    /// # Errors
    ///
    /// * a token error if `raw_token` violates the configured policy
    /// * `OtpError::InvalidOrExpiredCode` for any wrong or malformed candidate
    pub fn check_code(&self, raw_token: &str, candidate: &str) -> OtpResult<()> {
        let token = self.accept_token(raw_token)?;

        if self.codec.verify(&token, candidate) {
            tracing::debug!(event = "otp_accepted", "One-time code accepted");
            return Ok(());
        }

        tracing::warn!(
            well_formed = Code::parse(candidate).is_ok(),
            event = "otp_rejected",
            "One-time code rejected"
        );
        Err(OtpError::InvalidOrExpiredCode)
    }

    /// Predicate form of [`check_code`](Self::check_code).
    pub fn is_match(&self, raw_token: &str, candidate: &str) -> bool {
        self.check_code(raw_token, candidate).is_ok()
    }

    fn accept_token(&self, raw_token: &str) -> OtpResult<Token> {
        Token::parse(raw_token, &self.config.token).map_err(|e| {
            tracing::warn!(
                error = %e,
                event = "otp_token_rejected",
                "Token rejected by policy"
            );
            e
        })
    }
}

impl Default for OtpService<OtpCodec> {
    fn default() -> Self {
        Self::new(OtpConfig::default())
    }
}
