//! Dashboard metrics for a parsed build report
//!
//! A structured summary of the same statistics the recommendation engine
//! reports on. The two are computed independently.

use super::distribution::{finite_sum, percent_of, SizeDistribution};
use super::ranking::{top_by_first_load, top_by_page_size};
use crate::parser::{RouteRecord, RouteType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of routes kept in each dashboard ranking
pub const DASHBOARD_TOP_LIMIT: usize = 5;

/// Overall build health
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceScore {
    /// Mostly small routes and a low average
    Excellent,
    /// Mostly small, or mostly medium with a moderate average
    Good,
    /// Neither good nor poor
    Fair,
    /// High average or many very large routes
    Poor,
}

impl fmt::Display for PerformanceScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        };
        f.write_str(label)
    }
}

/// Aggregate sizes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    /// Number of routes
    pub total_routes: usize,
    /// Mean First Load JS, kB
    pub avg_first_load_kb: f64,
    /// Mean page size, kB
    pub avg_page_size_kb: f64,
    /// Sum of First Load JS, kB
    pub total_first_load_kb: f64,
    /// Sum of page sizes, kB
    pub total_page_size_kb: f64,
}

/// Count and share of one route type
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeShare {
    /// Number of routes
    pub count: usize,
    /// Percentage of all routes (0-100)
    pub ratio: f64,
}

/// Route type breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteTypeBreakdown {
    /// Static routes
    #[serde(rename = "static")]
    pub static_routes: TypeShare,
    /// SSG routes
    pub incremental_static: TypeShare,
    /// Dynamic routes
    pub dynamic: TypeShare,
}

/// Top-N rankings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopRoutes {
    /// Heaviest by First Load JS
    pub by_first_load: Vec<RouteRecord>,
    /// Heaviest by page size
    pub by_page_size: Vec<RouteRecord>,
}

/// Issue counters and short hints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issues {
    /// Routes over 1 MB, plus one if the build is mostly dynamic
    pub critical: usize,
    /// Routes between 500 kB and 1 MB
    pub warnings: usize,
    /// Short optimization hints
    pub optimizations: Vec<String>,
}

/// Performance summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    /// Health score
    pub score: PerformanceScore,
    /// Routes under 200 kB
    pub routes_under_200kb: usize,
    /// Routes in [200, 500) kB
    pub routes_200_to_500kb: usize,
}

/// Structured metrics snapshot of a build report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    /// Aggregate sizes
    pub overview: Overview,
    /// Route type counts and ratios
    pub route_types: RouteTypeBreakdown,
    /// First Load JS histogram
    pub size_distribution: SizeDistribution,
    /// Top routes by each metric
    pub top_routes: TopRoutes,
    /// Issues and hints
    pub issues: Issues,
    /// Health score
    pub performance: Performance,
}

/// Compute dashboard metrics
///
/// Returns `None` when there are no routes, so "no data" is distinct from a
/// report with no issues.
///
/// # Examples
///
/// ```
/// use next_build_parser::analyzer::{compute_dashboard_metrics, PerformanceScore};
/// use next_build_parser::parser::parse_build_table;
///
/// assert!(compute_dashboard_metrics(&[]).is_none());
///
/// let routes = parse_build_table("┌ ○ /  1 kB  90 kB\n└ ○ /about  1 kB  95 kB");
/// let metrics = compute_dashboard_metrics(&routes).unwrap();
/// assert_eq!(metrics.overview.total_routes, 2);
/// assert_eq!(metrics.performance.score, PerformanceScore::Excellent);
/// ```
pub fn compute_dashboard_metrics(records: &[RouteRecord]) -> Option<DashboardMetrics> {
    if records.is_empty() {
        return None;
    }

    let total = records.len();
    let total_first_load_kb = finite_sum(records.iter().map(|r| r.first_load_size_kb));
    let total_page_size_kb = finite_sum(records.iter().map(|r| r.page_size_kb));
    let avg_first_load_kb = total_first_load_kb / total as f64;
    let avg_page_size_kb = total_page_size_kb / total as f64;

    let share = |route_type: RouteType| {
        let count = records
            .iter()
            .filter(|r| r.route_type == route_type)
            .count();
        TypeShare {
            count,
            ratio: percent_of(count, total),
        }
    };
    let route_types = RouteTypeBreakdown {
        static_routes: share(RouteType::Static),
        incremental_static: share(RouteType::IncrementalStatic),
        dynamic: share(RouteType::Dynamic),
    };

    let size_distribution = SizeDistribution::from_records(records);
    let very_heavy = records
        .iter()
        .filter(|r| r.first_load_size_kb > 1024.0)
        .count();
    let mostly_dynamic = route_types.dynamic.ratio > 60.0;

    let score = performance_score(&size_distribution, total, avg_first_load_kb);

    let mut optimizations = Vec::new();
    if mostly_dynamic {
        optimizations.push("Consider converting dynamic routes to SSG".to_string());
    }
    if size_distribution.very_large > 0 {
        optimizations.push("Implement code splitting for heavy routes".to_string());
    }
    if (route_types.incremental_static.count as f64) < total as f64 * 0.3 {
        optimizations.push("Expand SSG usage for better performance".to_string());
    }

    Some(DashboardMetrics {
        overview: Overview {
            total_routes: total,
            avg_first_load_kb,
            avg_page_size_kb,
            total_first_load_kb,
            total_page_size_kb,
        },
        route_types,
        size_distribution,
        top_routes: TopRoutes {
            by_first_load: top_by_first_load(records, DASHBOARD_TOP_LIMIT),
            by_page_size: top_by_page_size(records, DASHBOARD_TOP_LIMIT),
        },
        issues: Issues {
            critical: very_heavy + usize::from(mostly_dynamic),
            warnings: size_distribution.large,
            optimizations,
        },
        performance: Performance {
            score,
            routes_under_200kb: size_distribution.small,
            routes_200_to_500kb: size_distribution.medium,
        },
    })
}

/// Score decision order: excellent, good, poor, otherwise fair
fn performance_score(
    distribution: &SizeDistribution,
    total: usize,
    avg_first_load_kb: f64,
) -> PerformanceScore {
    let more_than = |count: usize, fraction: f64| count as f64 > total as f64 * fraction;

    if more_than(distribution.small, 0.7) && avg_first_load_kb < 300.0 {
        PerformanceScore::Excellent
    } else if more_than(distribution.small, 0.5)
        || (more_than(distribution.medium, 0.5) && avg_first_load_kb < 400.0)
    {
        PerformanceScore::Good
    } else if avg_first_load_kb > 500.0 || more_than(distribution.very_large, 0.1) {
        PerformanceScore::Poor
    } else {
        PerformanceScore::Fair
    }
}
