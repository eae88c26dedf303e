//! Edge Cases and Error Handling Tests
//!
//! Tests for unusual inputs, error conditions, and boundary cases:
//! - Syntax errors in standalone and embedded scripts
//! - Invalid ranges, exclusion patterns and config files
//! - Missing inputs
//! - Empty files and files without matches

pub mod error_handling_tests;
