//! Error types with contextual suggestions
//!
//! Provides structured error types for the command layer that include:
//! - Actionable error messages
//! - Suggested fixes and recovery actions
//! - Documentation links
//! - Proper exit codes for CI/CD
//!
//! Parsing and analytics never fail; these errors come from input handling,
//! configuration, settings and budget enforcement.

use std::path::PathBuf;
use thiserror::Error;

/// next-build-parser command errors with contextual suggestions
#[derive(Error, Debug)]
pub enum BuildParserError {
    /// Build output file not found
    #[error("Build output not found: {path}")]
    InputNotFound {
        /// Path that was given
        path: PathBuf,
    },

    /// Input contained no recognizable route rows
    #[error("No routes found in {source_name}")]
    NoRoutesFound {
        /// File name or "stdin"
        source_name: String,
    },

    /// Invalid analysis mode
    #[error("Unknown analysis mode: '{mode}'")]
    InvalidAnalysisMode {
        /// Invalid mode name
        mode: String,
        /// List of valid modes
        valid_modes: Vec<String>,
    },

    /// Unknown settings key
    #[error("Unknown setting: '{key}'")]
    UnknownSetting {
        /// Key that was given
        key: String,
        /// Keys the CLI understands
        known: Vec<String>,
    },

    /// First Load JS budget exceeded
    #[error("First Load JS of {route} ({actual_kb:.2} kB) exceeds maximum ({max_kb} kB)")]
    BudgetExceeded {
        /// Heaviest route
        route: String,
        /// Its First Load JS in kB
        actual_kb: f64,
        /// Maximum allowed size in kB
        max_kb: u64,
        /// Percentage over budget
        percentage_over: f64,
    },

    /// Config file already present
    #[error("Configuration file already exists: {path}")]
    ConfigExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Generic I/O error with context
    #[error("I/O error: {context}")]
    Io {
        /// Context about where the error occurred
        context: String,
        #[source]
        /// IO error source
        source: std::io::Error,
    },
}

impl BuildParserError {
    /// Get actionable suggestion for resolving this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use next_build_parser::error::BuildParserError;
    ///
    /// let error = BuildParserError::InvalidAnalysisMode {
    ///     mode: "sizes".to_string(),
    ///     valid_modes: vec!["dashboard".to_string(), "routes".to_string()],
    /// };
    ///
    /// assert_eq!(error.suggestion().unwrap(), "Valid modes: dashboard, routes");
    /// ```
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::InputNotFound { path } => Some(format!(
                "Check that {} exists, or pipe the output directly: next build | next-build-parser analyze",
                path.display()
            )),
            Self::NoRoutesFound { .. } => Some(
                "Paste the full route table printed by 'next build', including the ┌ ├ └ markers"
                    .to_string(),
            ),
            Self::InvalidAnalysisMode { valid_modes, .. } => {
                Some(format!("Valid modes: {}", valid_modes.join(", ")))
            }
            Self::UnknownSetting { known, .. } => {
                Some(format!("Known settings: {}", known.join(", ")))
            }
            Self::BudgetExceeded {
                percentage_over, ..
            } => Some(format!(
                "Route is {:.1}% over budget. Consider:\n  \
                     - Splitting heavy components with next/dynamic\n  \
                     - Running 'next-build-parser analyze -m first-load' to find the heaviest routes\n  \
                     - Moving shared dependencies out of the root layout",
                percentage_over
            )),
            Self::ConfigExists { .. } => {
                Some("Use 'next-build-parser init --force' to overwrite it".to_string())
            }
            Self::Io { context, .. } => Some(format!(
                "Check file permissions and that {} is accessible",
                context
            )),
        }
    }

    /// Get documentation URL for this error.
    pub fn docs_url(&self) -> Option<&str> {
        match self {
            Self::BudgetExceeded { .. } => {
                Some("https://github.com/next-build-parser/next-build-parser#ci-integration")
            }
            Self::ConfigExists { .. } => {
                Some("https://github.com/next-build-parser/next-build-parser#configuration")
            }
            _ => None,
        }
    }

    /// Get appropriate exit code for this error.
    ///
    /// Follows sysexits.h conventions.
    ///
    /// # Examples
    ///
    /// ```
    /// use next_build_parser::error::BuildParserError;
    ///
    /// let error = BuildParserError::BudgetExceeded {
    ///     route: "/dashboard".to_string(),
    ///     actual_kb: 1208.32,
    ///     max_kb: 1000,
    ///     percentage_over: 20.8,
    /// };
    ///
    /// assert_eq!(error.exit_code(), 1); // Generic error for CI failure
    /// ```
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputNotFound { .. } => 66,        // EX_NOINPUT
            Self::NoRoutesFound { .. } => 65,        // EX_DATAERR
            Self::InvalidAnalysisMode { .. } => 64,  // EX_USAGE
            Self::UnknownSetting { .. } => 64,       // EX_USAGE
            Self::BudgetExceeded { .. } => 1,        // CI should fail
            Self::ConfigExists { .. } => 73,         // EX_CANTCREAT
            Self::Io { .. } => 74,                   // EX_IOERR
        }
    }
}

/// Error formatter with colors and structured output
pub struct ErrorFormatter;

impl ErrorFormatter {
    /// Format error with suggestions and documentation links
    pub fn format(error: &anyhow::Error) -> String {
        use console::style;

        let mut output = String::new();

        output.push_str(&format!("{} {}\n", style("error:").red().bold(), error));

        let mut source = error.source();
        let mut indent = 1;
        while let Some(err) = source {
            output.push_str(&format!(
                "{}{} {}\n",
                "  ".repeat(indent),
                style("caused by:").yellow(),
                err
            ));
            source = err.source();
            indent += 1;
        }

        if let Some(bp_error) = error.downcast_ref::<BuildParserError>() {
            if let Some(suggestion) = bp_error.suggestion() {
                output.push_str(&format!(
                    "\n{} {}\n",
                    style("help:").cyan().bold(),
                    suggestion
                ));
            }

            if let Some(docs) = bp_error.docs_url() {
                output.push_str(&format!("{} {}\n", style("docs:").blue(), docs));
            }
        }

        output
    }

    /// Get exit code from error
    pub fn exit_code(error: &anyhow::Error) -> i32 {
        if let Some(bp_error) = error.downcast_ref::<BuildParserError>() {
            bp_error.exit_code()
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_budget_exceeded_has_actionable_suggestion() {
        let err = BuildParserError::BudgetExceeded {
            route: "/dashboard".to_string(),
            actual_kb: 1208.32,
            max_kb: 1000,
            percentage_over: 20.832,
        };

        let suggestion = err.suggestion().unwrap();
        assert!(suggestion.contains("20.8% over budget"));
        assert!(suggestion.contains("next/dynamic"));
        assert_eq!(
            err.to_string(),
            "First Load JS of /dashboard (1208.32 kB) exceeds maximum (1000 kB)"
        );
    }

    #[test]
    fn test_unknown_setting_lists_known_keys() {
        let err = BuildParserError::UnknownSetting {
            key: "sidebar".to_string(),
            known: vec!["compact".to_string()],
        };
        assert_eq!(err.suggestion().unwrap(), "Known settings: compact");
        assert_eq!(err.exit_code(), 64);
    }

    #[test]
    fn test_exit_codes_follow_conventions() {
        let not_found = BuildParserError::InputNotFound {
            path: PathBuf::from("build.txt"),
        };
        assert_eq!(not_found.exit_code(), 66);

        let no_routes = BuildParserError::NoRoutesFound {
            source_name: "stdin".to_string(),
        };
        assert_eq!(no_routes.exit_code(), 65);

        let exists = BuildParserError::ConfigExists {
            path: PathBuf::from(".next-build-parser.toml"),
        };
        assert_eq!(exists.exit_code(), 73);

        let io = BuildParserError::Io {
            context: "stdin".to_string(),
            source: std::io::Error::other("closed"),
        };
        assert_eq!(io.exit_code(), 74);
    }

    #[test]
    fn test_formatter_includes_help_and_docs() {
        console::set_colors_enabled(false);
        let err: anyhow::Error = BuildParserError::ConfigExists {
            path: PathBuf::from(".next-build-parser.toml"),
        }
        .into();

        let formatted = ErrorFormatter::format(&err);
        assert!(formatted.starts_with("error: Configuration file already exists"));
        assert!(formatted.contains("help: Use 'next-build-parser init --force'"));
        assert!(formatted.contains("docs: https://"));
        assert_eq!(ErrorFormatter::exit_code(&err), 73);
    }

    #[test]
    fn test_formatter_prints_cause_chain() {
        console::set_colors_enabled(false);
        let err = Err::<(), _>(std::io::Error::other("disk on fire"))
            .context("Failed to read build.txt")
            .unwrap_err();

        let formatted = ErrorFormatter::format(&err);
        assert!(formatted.contains("error: Failed to read build.txt"));
        assert!(formatted.contains("caused by: disk on fire"));
        assert_eq!(ErrorFormatter::exit_code(&err), 1);
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;
        let err = BuildParserError::Io {
            context: "settings".to_string(),
            source: std::io::Error::other("denied"),
        };
        assert!(err.source().is_some());
    }
}
