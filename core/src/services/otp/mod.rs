//! One-time passcode module
//!
//! This module provides the "derive, don't store" passcode workflow:
//! - `OtpCodec` maps a token to a six-digit code with SHA-256
//! - `CodeDerivation` is the seam other derivations plug into
//! - `OtpService` applies the token policy to raw input before deriving
//!   or verifying
//!
//! Codes are recomputed whenever they are needed. Only the token is ever
//! persisted or transported by callers.

mod codec;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use codec::{derive, verify, OtpCodec};
pub use service::OtpService;
pub use traits::CodeDerivation;
