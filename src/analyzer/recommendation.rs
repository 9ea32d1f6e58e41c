//! Recommendation types

use console::Emoji;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fmt::{
    BULB, CHART, CHECKMARK, CYCLE, FOLDERS, LIGHTNING, PACKAGE, PLUG, SHUFFLE, TARGET, TOOLS,
    TOP, WARNING,
};

/// How urgent a recommendation is
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Neutral observation
    Info,
    /// Something the build already does well
    Positive,
    /// Worth optimizing
    Warning,
    /// Should be prioritized
    Critical,
}

/// A single observation about a build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    /// Urgency
    pub severity: Severity,
    /// Short heading, e.g. "Bundle Optimization"
    pub title: &'static str,
    /// Full sentence(s) of the observation
    pub message: String,
}

impl Recommendation {
    pub(crate) fn new(severity: Severity, title: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            title,
            message: message.into(),
        }
    }

    /// Leading icon of the rendered line
    ///
    /// Falls back to ASCII when the terminal does not want emoji.
    pub fn icon(&self) -> Emoji<'static, 'static> {
        match self.title {
            "Build Overview" | "Largest Page Size" => CHART,
            "Route Types" => SHUFFLE,
            "Critical" => WARNING,
            "Warning" => PACKAGE,
            "Good" | "Excellent" | "Overall Assessment" => CHECKMARK,
            "Largest First Load JS" => TOP,
            "Complex Dynamic Routes" => CYCLE,
            "High Dynamic Ratio" => LIGHTNING,
            "Optimization Opportunity" | "SSG Expansion" => BULB,
            "Bundle Optimization" | "Priority Actions" => TARGET,
            "Action Required" => TOOLS,
            "API Routes" => PLUG,
            "Nested Routes" => FOLDERS,
            _ => match self.severity {
                Severity::Positive => CHECKMARK,
                Severity::Critical | Severity::Warning => WARNING,
                Severity::Info => CHART,
            },
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} **{}**: {}", self.icon(), self.title, self.message)
    }
}
