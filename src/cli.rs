//! Command-line interface definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::cmd::settings::SettingsAction;

/// Next.js build output analyzer
///
/// next-build-parser reads the route table printed by `next build` and
/// reports route sizes, rankings, optimization recommendations and budget
/// checks.
#[derive(Parser)]
#[command(name = "next-build-parser", author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    pub no_emoji: bool,

    /// Command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level commands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a `next build` report
    Analyze {
        /// Report file, or "-" for stdin (default)
        #[arg(value_name = "FILE")]
        file: Option<String>,

        /// Analysis mode: dashboard, routes, first-load, page-size, recommendations
        #[arg(short, long, default_value = "dashboard")]
        mode: String,

        /// Number of routes in ranking tables (default from config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Check the heaviest route against the First Load JS budget (fail if exceeded)
        #[arg(long)]
        check: bool,
    },

    /// Compare two build reports
    Compare {
        /// Before report
        before: String,

        /// After report
        after: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create .next-build-parser.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Read or change persistent settings
    Settings {
        /// Settings action
        #[command(subcommand)]
        action: SettingsAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
