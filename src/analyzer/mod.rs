//! Route analytics over parsed build reports
//!
//! Provides the statistics built on top of [`crate::parser`]:
//! - Top-N rankings by First Load JS and page size
//! - Size distribution buckets
//! - Recommendation engine
//! - Dashboard metrics
//! - Before/after report comparison

pub mod comparison;
pub mod dashboard;
pub mod distribution;
pub mod ranking;
pub mod recommendation;
pub mod recommendations;

// Public exports for common analyzer types
pub use comparison::{compare_reports, ChangeStatus, ComparisonResults, RouteChange};
pub use dashboard::{
    compute_dashboard_metrics, DashboardMetrics, Issues, Overview, Performance,
    PerformanceScore, RouteTypeBreakdown, TopRoutes, TypeShare, DASHBOARD_TOP_LIMIT,
};
pub use distribution::{SizeBucket, SizeDistribution};
pub use ranking::{top_by_first_load, top_by_page_size, DEFAULT_TOP_LIMIT};
pub use recommendation::{Recommendation, Severity};
pub use recommendations::{generate_recommendations, recommend, NO_ROUTES_MESSAGE};
