//! Domain entities representing core business objects.

pub mod code;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use code::{Code, CODE_LENGTH, CODE_MODULUS};
pub use token::Token;
