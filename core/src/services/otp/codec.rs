//! SHA-256 backed passcode codec

use sha2::{Digest, Sha256};

use crate::domain::entities::{Code, Token};

use super::traits::CodeDerivation;

/// Bytes of the digest read as the code seed (8 hex characters)
const SEED_BYTES: usize = 4;

/// Derives six-digit codes from tokens with SHA-256.
///
/// The first 32 bits of the digest, read big-endian, are reduced modulo
/// one million. Reading the first four digest bytes big-endian is the same
/// as parsing the first eight characters of the lowercase hex digest.
#[derive(Debug, Clone, Copy, Default)]
pub struct OtpCodec;

impl OtpCodec {
    pub const fn new() -> Self {
        Self
    }

    fn seed(token: &Token) -> u32 {
        let digest = Sha256::digest(token.as_bytes());
        let mut seed = [0u8; SEED_BYTES];
        seed.copy_from_slice(&digest[..SEED_BYTES]);
        u32::from_be_bytes(seed)
    }
}

impl CodeDerivation for OtpCodec {
    fn derive(&self, token: &Token) -> Code {
        Code::from_value(Self::seed(token))
    }
}

/// Derive the six-digit code for a token string.
///
/// ```
/// assert_eq!(jarvi_core::derive("abc"), "432319");
/// ```
pub fn derive(token: &str) -> String {
    OtpCodec.derive(&Token::from(token)).into_inner()
}

/// Check a candidate code against a token string.
///
/// ```
/// assert!(jarvi_core::verify("abc", "432319"));
/// assert!(!jarvi_core::verify("abc", "43231"));
/// ```
pub fn verify(token: &str, candidate: &str) -> bool {
    OtpCodec.verify(&Token::from(token), candidate)
}
