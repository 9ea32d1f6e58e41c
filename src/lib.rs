#![warn(missing_docs)]
#![warn(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! next-build-parser library
//!
//! This library parses the route table printed by `next build` and derives
//! size statistics, rankings and optimization recommendations from it.
//! It can be used programmatically in addition to the CLI interface.
//!
//! # Basic Example
//!
//! Parsing a build report and ranking its routes:
//!
//! ```
//! use next_build_parser::analyzer::top_by_first_load;
//! use next_build_parser::parser::{parse_build_table, RouteType};
//!
//! let report = "\
//! Route (app)                              Size     First Load JS
//! ┌ ○ /_not-found                          880 B          89.6 kB
//! ├ ● /[locale]/dashboard                  43.4 kB        1.18 MB
//! └ ƒ /[locale]/ai/[programId]             13.4 kB         165 kB
//! + First Load JS shared by all            88.7 kB";
//!
//! let routes = parse_build_table(report);
//! assert_eq!(routes.len(), 3);
//! assert_eq!(routes[2].route_type, RouteType::Dynamic);
//!
//! let heaviest = top_by_first_load(&routes, 1);
//! assert_eq!(heaviest[0].path, "/[locale]/dashboard");
//! assert!((heaviest[0].first_load_size_kb - 1208.32).abs() < 1e-9);
//! ```
//!
//! # Advanced Example: Dashboard and Budget
//!
//! ```
//! use next_build_parser::analyzer::{compute_dashboard_metrics, PerformanceScore};
//! use next_build_parser::cicd::{BudgetChecker, BudgetStatus};
//! use next_build_parser::config::FirstLoadBudget;
//! use next_build_parser::parser::parse_build_table;
//!
//! let routes = parse_build_table("┌ ○ /  1 kB  90 kB\n└ ● /blog  2 kB  620 kB");
//!
//! let metrics = compute_dashboard_metrics(&routes).unwrap();
//! assert_eq!(metrics.size_distribution.large, 1);
//! assert_eq!(metrics.performance.score, PerformanceScore::Fair);
//!
//! let budget = FirstLoadBudget {
//!     target_size_kb: Some(200),
//!     warn_threshold_kb: Some(500),
//!     max_size_kb: Some(1000),
//! };
//! assert!(budget.validate().is_ok());
//! assert_eq!(BudgetChecker::new(budget).check(&routes).status, BudgetStatus::Warning);
//! ```

/// Route statistics, recommendations and comparisons
pub mod analyzer;
/// CI/CD budget enforcement
pub mod cicd;
/// Command-line interface definition
pub mod cli;
/// Command handlers for CLI operations
pub mod cmd;
/// Configuration file management
pub mod config;
/// Error types with contextual suggestions
pub mod error;
/// Shared formatting utilities
pub mod fmt;
/// Infrastructure traits for filesystem access
pub mod infra;
/// Build output parsing
pub mod parser;
/// Markdown, console and JSON rendering
pub mod report;
/// Persistent user settings
pub mod settings;
