//! CI/CD integration module
//!
//! Provides:
//! - First Load JS budget enforcement with configurable thresholds
//! - Exit codes for automated workflows

pub mod budget;

pub use budget::{BudgetChecker, BudgetResult, BudgetStatus};
