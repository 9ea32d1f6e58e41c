//! Command handlers for next-build-parser CLI
//!
//! This module contains all command implementations, organized by functionality.
//! Each submodule handles a specific CLI command.

pub mod analyze;
pub mod compare;
pub mod completions;
pub mod init;
pub mod input;
pub mod settings;

// Re-export command functions for convenient access
pub use analyze::{cmd_analyze, AnalysisMode, AnalyzeOptions};
pub use compare::cmd_compare;
pub use completions::cmd_completions;
pub use init::cmd_init;
pub use settings::{cmd_settings, SettingsAction};
