//! Configuration file data structures

use crate::analyzer::DEFAULT_TOP_LIMIT;
use crate::report::DEFAULT_ROUTE_WIDTH;
use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = ".next-build-parser.toml";

/// next-build-parser configuration file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Report display settings
    #[serde(default)]
    pub display: DisplaySettings,

    /// First Load JS budget settings
    #[serde(
        rename = "first-load-budget",
        skip_serializing_if = "Option::is_none"
    )]
    pub first_load_budget: Option<FirstLoadBudget>,
}

/// Report display settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Longest route path shown before it is shortened in the middle
    #[serde(rename = "route-width", default = "default_route_width")]
    pub route_width: usize,

    /// Number of routes in ranking tables
    #[serde(rename = "top-limit", default = "default_top_limit")]
    pub top_limit: usize,
}

fn default_route_width() -> usize {
    DEFAULT_ROUTE_WIDTH
}

fn default_top_limit() -> usize {
    DEFAULT_TOP_LIMIT
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            route_width: DEFAULT_ROUTE_WIDTH,
            top_limit: DEFAULT_TOP_LIMIT,
        }
    }
}

/// First Load JS budget, evaluated against the heaviest route
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirstLoadBudget {
    /// Maximum size in kB (hard limit, CI fails)
    #[serde(rename = "max-size-kb", skip_serializing_if = "Option::is_none")]
    pub max_size_kb: Option<u64>,

    /// Warning threshold in kB (CI passes with warning)
    #[serde(rename = "warn-threshold-kb", skip_serializing_if = "Option::is_none")]
    pub warn_threshold_kb: Option<u64>,

    /// Target size in kB (ideal target)
    #[serde(rename = "target-size-kb", skip_serializing_if = "Option::is_none")]
    pub target_size_kb: Option<u64>,
}

impl FirstLoadBudget {
    /// Validate that budget thresholds are properly ordered
    ///
    /// Ensures: target <= warn <= max
    pub fn validate(&self) -> Result<()> {
        if let (Some(target), Some(warn)) = (self.target_size_kb, self.warn_threshold_kb) {
            if target > warn {
                anyhow::bail!(
                    "Target size ({} kB) cannot exceed warning threshold ({} kB)",
                    target,
                    warn
                );
            }
        }

        if let (Some(warn), Some(max)) = (self.warn_threshold_kb, self.max_size_kb) {
            if warn > max {
                anyhow::bail!(
                    "Warning threshold ({} kB) cannot exceed max size ({} kB)",
                    warn,
                    max
                );
            }
        }

        if let (Some(target), Some(max)) = (self.target_size_kb, self.max_size_kb) {
            if target > max {
                anyhow::bail!(
                    "Target size ({} kB) cannot exceed max size ({} kB)",
                    target,
                    max
                );
            }
        }

        Ok(())
    }

    /// Whether any threshold is set
    pub fn is_empty(&self) -> bool {
        self.target_size_kb.is_none()
            && self.warn_threshold_kb.is_none()
            && self.max_size_kb.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_default_display_settings() {
        let config = ConfigFile::default();
        assert_eq!(config.display.route_width, 60);
        assert_eq!(config.display.top_limit, 10);
        assert!(config.first_load_budget.is_none());
    }

    #[test]
    fn test_config_file_parses_kebab_case_keys() {
        let toml = r#"
[display]
route-width = 40

[first-load-budget]
target-size-kb = 200
warn-threshold-kb = 500
max-size-kb = 1000
"#;
        let config: ConfigFile = toml_edit::de::from_str(toml).unwrap();
        assert_eq!(config.display.route_width, 40);
        assert_eq!(config.display.top_limit, 10);

        let budget = config.first_load_budget.unwrap();
        assert_eq!(budget.target_size_kb, Some(200));
        assert_eq!(budget.warn_threshold_kb, Some(500));
        assert_eq!(budget.max_size_kb, Some(1000));
    }

    #[test]
    fn test_empty_toml_is_default_config() {
        let config: ConfigFile = toml_edit::de::from_str("").unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_budget_validate_with_correct_order_succeeds() {
        let budget = FirstLoadBudget {
            target_size_kb: Some(100),
            warn_threshold_kb: Some(150),
            max_size_kb: Some(200),
        };
        assert!(budget.validate().is_ok());
    }

    #[test]
    fn test_budget_validate_with_equal_thresholds_succeeds() {
        let budget = FirstLoadBudget {
            target_size_kb: Some(200),
            warn_threshold_kb: Some(200),
            max_size_kb: Some(200),
        };
        assert!(budget.validate().is_ok());
    }

    #[test]
    fn test_budget_validate_with_target_exceeds_warn_returns_error() {
        let budget = FirstLoadBudget {
            target_size_kb: Some(200),
            warn_threshold_kb: Some(100),
            max_size_kb: None,
        };
        let err = budget.validate().unwrap_err().to_string();
        assert!(err.contains("warning threshold"));
    }

    #[test]
    fn test_budget_validate_with_warn_exceeds_max_returns_error() {
        let budget = FirstLoadBudget {
            target_size_kb: None,
            warn_threshold_kb: Some(300),
            max_size_kb: Some(200),
        };
        assert!(budget.validate().is_err());
    }

    #[test]
    fn test_budget_validate_with_target_exceeds_max_returns_error() {
        let budget = FirstLoadBudget {
            target_size_kb: Some(300),
            warn_threshold_kb: None,
            max_size_kb: Some(200),
        };
        assert!(budget.validate().is_err());
    }

    #[test]
    fn test_budget_is_empty() {
        assert!(FirstLoadBudget::default().is_empty());
        let budget = FirstLoadBudget {
            max_size_kb: Some(1),
            ..Default::default()
        };
        assert!(!budget.is_empty());
    }
}
