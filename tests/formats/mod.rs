//! Output Format Tests
//!
//! Tests for verifying consistency across output formats:
//! - csv format (spreadsheet-friendly, written with a byte order mark)
//! - json format (machine-readable)
//!
//! Ensures that both formats contain the same records in the same order
//! and that repeated runs produce identical reports.

pub mod consistency_tests;
