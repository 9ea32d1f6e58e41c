//! First Load JS budget enforcement for CI/CD
//!
//! Implements three-tier budget system on the heaviest route:
//! - Target: Ideal size goal (informational)
//! - Warning: Threshold for warnings (exit 0 with warning)
//! - Max: Hard limit (exit 1 if exceeded)

use crate::analyzer::top_by_first_load;
use crate::config::FirstLoadBudget;
use crate::fmt::{format_kb, CHECKMARK, CROSSMARK, WARNING};
use crate::parser::RouteRecord;
use console::style;
use serde::{Deserialize, Serialize};

/// Status of First Load JS budget check
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// At or under target size
    UnderTarget,
    /// Between target and warning threshold
    AboveTarget,
    /// Between warning and max
    Warning,
    /// Over max size
    OverBudget,
}

/// Result of budget check with detailed information
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetResult {
    /// Budget status
    pub status: BudgetStatus,
    /// Heaviest route, if any route had a usable size
    pub route: Option<String>,
    /// First Load JS of the heaviest route in kB
    pub size_kb: f64,
    /// Target size if set
    pub target_kb: Option<u64>,
    /// Warning threshold if set
    pub warn_threshold_kb: Option<u64>,
    /// Maximum allowed size if set
    pub max_size_kb: Option<u64>,
    /// Human-readable message
    pub message: String,
}

impl BudgetResult {
    /// Get exit code for CI/CD (0 = pass, 1 = fail)
    pub fn exit_code(&self) -> i32 {
        match self.status {
            BudgetStatus::UnderTarget | BudgetStatus::AboveTarget | BudgetStatus::Warning => 0,
            BudgetStatus::OverBudget => 1,
        }
    }

    /// Whether the check passed
    pub fn passed(&self) -> bool {
        self.status != BudgetStatus::OverBudget
    }

    /// Percentage by which the max size is exceeded, 0 when within it
    pub fn percentage_over(&self) -> f64 {
        match self.max_size_kb {
            Some(max) if max > 0 && self.size_kb > max as f64 => {
                (self.size_kb - max as f64) / max as f64 * 100.0
            }
            _ => 0.0,
        }
    }

    /// Print colored status message
    pub fn print(&self) {
        let status_icon = match self.status {
            BudgetStatus::UnderTarget | BudgetStatus::AboveTarget => style(CHECKMARK).green(),
            BudgetStatus::Warning => style(WARNING).yellow(),
            BudgetStatus::OverBudget => style(CROSSMARK).red(),
        };

        let size_str = match self.status {
            BudgetStatus::UnderTarget | BudgetStatus::AboveTarget => {
                style(format_kb(self.size_kb)).green()
            }
            BudgetStatus::Warning => style(format_kb(self.size_kb)).yellow(),
            BudgetStatus::OverBudget => style(format_kb(self.size_kb)).red(),
        };

        println!("\n{} First Load JS Budget: {}", status_icon, size_str);
        if let Some(route) = &self.route {
            println!("   Heaviest route: {}", style(route).cyan());
        }
        println!("   {}", self.message);

        if let Some(target) = self.target_kb {
            println!("   {}", style(format!("Target: {} kB", target)).dim());
        }

        if let Some(warn) = self.warn_threshold_kb {
            let warn_str = if self.status == BudgetStatus::Warning {
                style(format!("Warning: {} kB", warn)).yellow()
            } else {
                style(format!("Warning: {} kB", warn)).dim()
            };
            println!("   {}", warn_str);
        }

        if let Some(max) = self.max_size_kb {
            let max_str = if self.status == BudgetStatus::OverBudget {
                style(format!("Max: {} kB (EXCEEDED)", max)).red()
            } else {
                style(format!("Max: {} kB", max)).dim()
            };
            println!("   {}", max_str);
        }
    }
}

/// First Load JS budget checker
pub struct BudgetChecker {
    budget: FirstLoadBudget,
}

impl BudgetChecker {
    /// Create a new budget checker
    pub fn new(budget: FirstLoadBudget) -> Self {
        Self { budget }
    }

    /// Determine budget status based on size and thresholds
    ///
    /// Priority order: max > warn > target
    fn determine_status(&self, size_kb: f64) -> BudgetStatus {
        if let Some(max) = self.budget.max_size_kb {
            if size_kb > max as f64 {
                return BudgetStatus::OverBudget;
            }
        }

        if let Some(warn) = self.budget.warn_threshold_kb {
            if size_kb > warn as f64 {
                return BudgetStatus::Warning;
            }
        }

        if let Some(target) = self.budget.target_size_kb {
            if size_kb <= target as f64 {
                return BudgetStatus::UnderTarget;
            } else {
                return BudgetStatus::AboveTarget;
            }
        }

        // Within max/warn but no target: above target if any limit is set
        if self.budget.max_size_kb.is_some() || self.budget.warn_threshold_kb.is_some() {
            BudgetStatus::AboveTarget
        } else {
            BudgetStatus::UnderTarget
        }
    }

    /// Check the heaviest route of a report against the budget
    ///
    /// Routes whose First Load JS could not be parsed are ignored; a report
    /// without any usable size is checked as 0 kB.
    ///
    /// # Examples
    ///
    /// ```
    /// use next_build_parser::cicd::{BudgetChecker, BudgetStatus};
    /// use next_build_parser::config::FirstLoadBudget;
    /// use next_build_parser::parser::parse_build_table;
    ///
    /// let budget = FirstLoadBudget {
    ///     target_size_kb: Some(200),
    ///     warn_threshold_kb: Some(500),
    ///     max_size_kb: Some(1000),
    /// };
    /// let routes = parse_build_table("┌ ○ /  1 kB  90 kB\n└ ○ /docs  1 kB  600 kB");
    /// let result = BudgetChecker::new(budget).check(&routes);
    /// assert_eq!(result.status, BudgetStatus::Warning);
    /// assert_eq!(result.route.as_deref(), Some("/docs"));
    /// ```
    pub fn check(&self, records: &[RouteRecord]) -> BudgetResult {
        let heaviest = top_by_first_load(records, 1)
            .into_iter()
            .find(|r| r.first_load_size_kb.is_finite());

        match heaviest {
            Some(record) => {
                let mut result = self.check_size(record.first_load_size_kb);
                result.route = Some(record.path);
                result
            }
            None => self.check_size(0.0),
        }
    }

    /// Check a single First Load JS size in kB against the budget
    pub fn check_size(&self, size_kb: f64) -> BudgetResult {
        let status = self.determine_status(size_kb);

        let message = match status {
            BudgetStatus::UnderTarget => match self.budget.target_size_kb {
                Some(target) => format!("Under target by {:.2} kB", target as f64 - size_kb),
                None => "Size OK".to_string(),
            },
            BudgetStatus::AboveTarget => match self.budget.target_size_kb {
                Some(target) => format!(
                    "Above target by {:.2} kB (still within limits)",
                    size_kb - target as f64
                ),
                None => "Size OK".to_string(),
            },
            BudgetStatus::Warning => match self.budget.warn_threshold_kb {
                Some(warn) => format!(
                    "Warning: {:.2} kB over threshold (consider code splitting)",
                    size_kb - warn as f64
                ),
                None => "Warning threshold exceeded".to_string(),
            },
            BudgetStatus::OverBudget => match self.budget.max_size_kb {
                Some(max) => format!(
                    "FAILED: {:.2} kB over budget (optimization required)",
                    size_kb - max as f64
                ),
                None => "Budget exceeded".to_string(),
            },
        };

        BudgetResult {
            status,
            route: None,
            size_kb,
            target_kb: self.budget.target_size_kb,
            warn_threshold_kb: self.budget.warn_threshold_kb,
            max_size_kb: self.budget.max_size_kb,
            message,
        }
    }
}
