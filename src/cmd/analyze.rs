//! Analyze command implementation
//!
//! Provides the analysis modes of `next-build-parser analyze`:
//! - dashboard: Colored overview with recommendations
//! - routes: Every route as a markdown table
//! - first-load / page-size: Heaviest routes as a markdown table
//! - recommendations: One recommendation per line

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::input::read_input;
use crate::analyzer::{
    compute_dashboard_metrics, generate_recommendations, recommend, top_by_first_load,
    top_by_page_size, NO_ROUTES_MESSAGE,
};
use crate::cicd::{BudgetChecker, BudgetResult, BudgetStatus};
use crate::config::{ConfigFile, ConfigLoader, DisplaySettings};
use crate::error::BuildParserError;
use crate::parser::{parse_build_table, RouteRecord};
use crate::report::{
    format_dashboard_report, rows_to_markdown_table_with_width, ConsoleOptions, JsonOutput,
};
use crate::settings::{JsonSettingsStore, SettingsStore};

/// Output of `analyze`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    /// Console dashboard
    Dashboard,
    /// All routes in report order
    Routes,
    /// Top routes by First Load JS
    FirstLoad,
    /// Top routes by page size
    PageSize,
    /// Recommendation lines
    Recommendations,
}

impl AnalysisMode {
    /// Mode names accepted on the command line
    pub const NAMES: [&'static str; 5] = [
        "dashboard",
        "routes",
        "first-load",
        "page-size",
        "recommendations",
    ];
}

impl FromStr for AnalysisMode {
    type Err = BuildParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dashboard" => Ok(Self::Dashboard),
            "routes" => Ok(Self::Routes),
            "first-load" => Ok(Self::FirstLoad),
            "page-size" => Ok(Self::PageSize),
            "recommendations" => Ok(Self::Recommendations),
            _ => Err(BuildParserError::InvalidAnalysisMode {
                mode: s.to_string(),
                valid_modes: Self::NAMES.iter().map(|m| m.to_string()).collect(),
            }),
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Dashboard => "dashboard",
            Self::Routes => "routes",
            Self::FirstLoad => "first-load",
            Self::PageSize => "page-size",
            Self::Recommendations => "recommendations",
        };
        f.write_str(name)
    }
}

/// Options of the `analyze` command
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    /// Report file, `None` or `-` for stdin
    pub file: Option<String>,
    /// Analysis mode name
    pub mode: String,
    /// Number of routes in ranking tables
    pub limit: Option<usize>,
    /// Print the JSON envelope instead of text
    pub json: bool,
    /// Enforce the First Load JS budget
    pub check: bool,
}

/// Analyze a `next build` report
///
/// # Examples
///
/// ```no_run
/// use next_build_parser::cmd::analyze::{cmd_analyze, AnalyzeOptions};
///
/// cmd_analyze(&AnalyzeOptions {
///     file: Some("build-output.txt".to_string()),
///     mode: "first-load".to_string(),
///     ..Default::default()
/// })?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The mode is unknown
/// - The input cannot be read
/// - `check` is set and the heaviest route is over the max budget
pub fn cmd_analyze(options: &AnalyzeOptions) -> Result<()> {
    let mode: AnalysisMode = options.mode.parse()?;
    let project_root = env::current_dir().context("Failed to determine current directory")?;
    let config = load_config(&project_root);

    let input = read_input(options.file.as_deref())?;
    let routes = parse_build_table(&input.text);
    log::debug!(
        "Parsed {} routes from {} ({} mode)",
        routes.len(),
        input.source_name,
        mode
    );

    let budget = if options.check {
        Some(check_budget(&config, &routes, &input.source_name)?)
    } else {
        None
    };

    if options.json {
        let mut output = JsonOutput::new(&routes);
        if let Some(result) = &budget {
            output = output.with_budget(result);
        }
        println!("{}", output.to_json()?);
    } else {
        let console_options = ConsoleOptions {
            compact: load_compact(&project_root),
            route_width: config.display.route_width,
        };
        print!(
            "{}",
            render_analysis(mode, &routes, &config.display, options.limit, &console_options)?
        );
        if let Some(result) = &budget {
            result.print();
        }
    }

    match budget {
        Some(result) => enforce_budget(&result),
        None => Ok(()),
    }
}

/// Render the text output of an analysis mode
pub fn render_analysis(
    mode: AnalysisMode,
    routes: &[RouteRecord],
    display: &DisplaySettings,
    limit: Option<usize>,
    console_options: &ConsoleOptions,
) -> Result<String> {
    let limit = limit.unwrap_or(display.top_limit);
    let width = display.route_width;

    let output = match mode {
        AnalysisMode::Dashboard => match compute_dashboard_metrics(routes) {
            Some(metrics) => {
                format_dashboard_report(&metrics, &recommend(routes), console_options)?
            }
            None => format!("{}\n", NO_ROUTES_MESSAGE),
        },
        AnalysisMode::Routes => rows_to_markdown_table_with_width(routes, width) + "\n",
        AnalysisMode::FirstLoad => {
            rows_to_markdown_table_with_width(&top_by_first_load(routes, limit), width) + "\n"
        }
        AnalysisMode::PageSize => {
            rows_to_markdown_table_with_width(&top_by_page_size(routes, limit), width) + "\n"
        }
        AnalysisMode::Recommendations => generate_recommendations(routes).join("\n") + "\n",
    };

    Ok(output)
}

fn load_config(project_root: &Path) -> ConfigFile {
    ConfigLoader::load(project_root).unwrap_or_else(|e| {
        log::warn!("{:#}; using default configuration", e);
        ConfigFile::default()
    })
}

fn load_compact(project_root: &Path) -> bool {
    match JsonSettingsStore::open(project_root).and_then(|store| store.get("compact")) {
        Ok(value) => value.unwrap_or(false),
        Err(e) => {
            log::warn!("{:#}; using default settings", e);
            false
        }
    }
}

fn check_budget(
    config: &ConfigFile,
    routes: &[RouteRecord],
    source_name: &str,
) -> Result<BudgetResult> {
    let budget = match &config.first_load_budget {
        Some(budget) if !budget.is_empty() => budget.clone(),
        _ => anyhow::bail!(
            "--check requires a [first-load-budget] section in {}. Run 'next-build-parser init' to create one",
            crate::config::CONFIG_FILE_NAME
        ),
    };

    if routes.is_empty() {
        return Err(BuildParserError::NoRoutesFound {
            source_name: source_name.to_string(),
        }
        .into());
    }

    Ok(BudgetChecker::new(budget).check(routes))
}

fn enforce_budget(result: &BudgetResult) -> Result<()> {
    if result.status != BudgetStatus::OverBudget {
        return Ok(());
    }

    Err(BuildParserError::BudgetExceeded {
        route: result.route.clone().unwrap_or_default(),
        actual_kb: result.size_kb,
        max_kb: result.max_size_kb.unwrap_or_default(),
        percentage_over: result.percentage_over(),
    }
    .into())
}
