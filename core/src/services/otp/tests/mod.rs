//! Tests for the OTP codec and service

mod service_tests;
