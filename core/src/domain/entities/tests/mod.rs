//! Tests for domain entities
