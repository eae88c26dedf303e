//! Common test utilities and fixtures for extract-text integration tests
//!
//! This module provides:
//! - `TestRepo` builder for creating source trees and running the binary
//! - Custom assertions for validating CLI output and extracted records

#![allow(dead_code)]

pub mod assertions;
pub mod test_repo;

pub use assertions::*;
pub use test_repo::TestRepo;
