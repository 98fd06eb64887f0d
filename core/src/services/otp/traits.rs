//! Trait for code derivation strategies

use constant_time_eq::constant_time_eq;
use jarvi_shared::validation::validators;

use crate::domain::entities::{Code, Token, CODE_LENGTH};

/// A pure, deterministic mapping from a token to a passcode.
///
/// Implementations must be total over all tokens and free of side effects,
/// so they can be shared across threads without coordination.
pub trait CodeDerivation: Send + Sync {
    /// Derive the code for a token
    fn derive(&self, token: &Token) -> Code;

    /// Re-derive the code for `token` and compare it with `candidate`.
    ///
    /// A candidate that is not exactly six ASCII digits is `false`. The
    /// comparison itself runs in constant time over the code bytes.
    fn verify(&self, token: &Token, candidate: &str) -> bool {
        if !validators::is_ascii_digits(candidate, CODE_LENGTH) {
            return false;
        }

        let expected = self.derive(token);
        constant_time_eq(expected.as_str().as_bytes(), candidate.as_bytes())
    }
}
