//! Domain layer containing the OTP value objects.

pub mod entities;

pub use entities::*;
