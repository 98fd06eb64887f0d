//! # Jarvi Core
//!
//! Core domain layer for the Jarvi backend. It derives deterministic
//! six-digit one-time passcodes from opaque tokens and verifies submitted
//! codes by re-deriving them, so the code itself is never stored.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
