//! Common test utilities and helpers
//!
//! This module provides shared functionality for integration tests:
//! - Assertion helpers for float comparisons and markdown tables
//! - Build report fixtures and temporary project directories
//!
//! # Usage
//!
//! ```rust,no_run
//! mod common;
//! use common::{assertions::*, fixtures};
//!
//! let (dir, report) = fixtures::project_with_report(fixtures::SAMPLE_REPORT).unwrap();
//! ```

pub mod assertions;
pub mod fixtures;

use assert_cmd::Command;

/// Command for the next-build-parser binary with logging silenced
#[allow(dead_code)]
pub fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_next-build-parser"));
    cmd.env_remove("RUST_LOG");
    cmd
}
