//! JSON output for scripting and CI/CD tools

use super::utils::to_json_string;
use crate::analyzer::{compute_dashboard_metrics, generate_recommendations, DashboardMetrics};
use crate::cicd::{BudgetResult, BudgetStatus};
use crate::parser::RouteRecord;
use anyhow::Result;
use serde::Serialize;

/// JSON envelope for `analyze --json`
///
/// Unparseable sizes serialize as `null`.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// False when a budget check failed
    pub success: bool,
    /// Parsed routes in report order
    pub routes: Vec<RouteRecord>,
    /// Dashboard metrics, absent for an empty report
    pub dashboard: Option<DashboardMetrics>,
    /// Recommendation lines
    pub recommendations: Vec<String>,
    /// Budget check result (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<BudgetInfo>,
}

/// Budget check results for JSON output
#[derive(Debug, Clone, Serialize)]
pub struct BudgetInfo {
    /// Budget status
    pub status: BudgetStatus,
    /// Whether budget check passed (true if not over budget)
    pub passed: bool,
    /// Heaviest route
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// First Load JS of the heaviest route in kB
    pub size_kb: f64,
    /// Target size in kB (if set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_kb: Option<u64>,
    /// Warning threshold in kB (if set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warn_threshold_kb: Option<u64>,
    /// Max size in kB (if set)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_size_kb: Option<u64>,
    /// Human-readable message
    pub message: String,
}

impl BudgetInfo {
    /// Convert from BudgetResult
    pub fn from_result(result: &BudgetResult) -> Self {
        Self {
            status: result.status,
            passed: result.passed(),
            route: result.route.clone(),
            size_kb: result.size_kb,
            target_kb: result.target_kb,
            warn_threshold_kb: result.warn_threshold_kb,
            max_size_kb: result.max_size_kb,
            message: result.message.clone(),
        }
    }
}

impl JsonOutput {
    /// Build the envelope for a parsed report
    pub fn new(records: &[RouteRecord]) -> Self {
        Self {
            success: true,
            routes: records.to_vec(),
            dashboard: compute_dashboard_metrics(records),
            recommendations: generate_recommendations(records),
            budget: None,
        }
    }

    /// Add budget check result
    pub fn with_budget(mut self, result: &BudgetResult) -> Self {
        self.success = result.passed();
        self.budget = Some(BudgetInfo::from_result(result));
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        to_json_string(self)
    }
}
