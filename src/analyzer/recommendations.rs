//! Recommendation engine for parsed build reports
//!
//! Every check looks at the whole route set and emits at most one entry.
//! Percentages always use the total route count as denominator. Thresholds
//! are strict or inclusive exactly as written below; the tests pin the
//! boundary values.

use super::distribution::{finite_sum, percent_of, SizeDistribution};
use super::ranking::{top_by_first_load, top_by_page_size};
use super::recommendation::{Recommendation, Severity};
use crate::fmt::{format_kb, format_percent};
use crate::parser::{RouteRecord, RouteType};

/// Message returned when the report contained no routes
pub const NO_ROUTES_MESSAGE: &str = "No routes found. Please check your build output format.";

/// First Load JS above which a route needs immediate attention, kB
const VERY_HEAVY_KB: f64 = 1024.0;
/// First Load JS above which a route counts as bloated, kB
const BLOATED_KB: f64 = 500.0;
/// Page size above which the largest page gets its own entry, kB
const LARGE_PAGE_KB: f64 = 300.0;
/// Average First Load JS under which a build with no critical issues is praised, kB
const HEALTHY_AVERAGE_KB: f64 = 300.0;

/// Generate recommendations as display strings
///
/// Empty input yields exactly one entry, [`NO_ROUTES_MESSAGE`].
///
/// # Examples
///
/// ```
/// use next_build_parser::analyzer::{generate_recommendations, NO_ROUTES_MESSAGE};
///
/// assert_eq!(generate_recommendations(&[]), vec![NO_ROUTES_MESSAGE.to_string()]);
/// ```
pub fn generate_recommendations(records: &[RouteRecord]) -> Vec<String> {
    if records.is_empty() {
        return vec![NO_ROUTES_MESSAGE.to_string()];
    }
    recommend(records).iter().map(ToString::to_string).collect()
}

/// Generate structured recommendations
///
/// Empty input yields no entries; use [`generate_recommendations`] for the
/// fallback message.
pub fn recommend(records: &[RouteRecord]) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    if records.is_empty() {
        return recommendations;
    }

    let total = records.len();
    let threshold = |fraction: f64| total as f64 * fraction;

    let avg_first_load = finite_sum(records.iter().map(|r| r.first_load_size_kb)) / total as f64;
    let avg_page_size = finite_sum(records.iter().map(|r| r.page_size_kb)) / total as f64;

    recommendations.push(Recommendation::new(
        Severity::Info,
        "Build Overview",
        format!(
            "{} total routes | Average First Load: {} | Average Page Size: {}",
            total,
            format_kb(avg_first_load),
            format_kb(avg_page_size)
        ),
    ));

    let count_of = |route_type: RouteType| {
        records
            .iter()
            .filter(|r| r.route_type == route_type)
            .count()
    };
    let static_count = count_of(RouteType::Static);
    let ssg_count = count_of(RouteType::IncrementalStatic);
    let dynamic_count = count_of(RouteType::Dynamic);

    let static_ratio = percent_of(static_count, total);
    let ssg_ratio = percent_of(ssg_count, total);
    let dynamic_ratio = percent_of(dynamic_count, total);

    recommendations.push(Recommendation::new(
        Severity::Info,
        "Route Types",
        format!(
            "Static {} ({}) | SSG {} ({}) | Dynamic {} ({})",
            format_percent(static_ratio),
            static_count,
            format_percent(ssg_ratio),
            ssg_count,
            format_percent(dynamic_ratio),
            dynamic_count
        ),
    ));

    push_size_distribution(&mut recommendations, records, total);
    push_heaviest_routes(&mut recommendations, records);

    if dynamic_count > 0 {
        let complex_dynamic = records
            .iter()
            .filter(|r| r.route_type == RouteType::Dynamic && r.dynamic_segment_count() > 1)
            .count();

        if complex_dynamic > 0 {
            recommendations.push(Recommendation::new(
                Severity::Info,
                "Complex Dynamic Routes",
                format!(
                    "{} route(s) have multiple dynamic segments. Consider using `generateStaticParams` for better performance.",
                    complex_dynamic
                ),
            ));
        }

        if dynamic_ratio > 60.0 {
            recommendations.push(Recommendation::new(
                Severity::Warning,
                "High Dynamic Ratio",
                format!(
                    "{} dynamic routes. Evaluate if some can be converted to SSG using `generateStaticParams` or ISR (Incremental Static Regeneration).",
                    format_percent(dynamic_ratio)
                ),
            ));
        } else if dynamic_ratio < 20.0 && ssg_ratio > 50.0 {
            recommendations.push(Recommendation::new(
                Severity::Positive,
                "Excellent",
                format!(
                    "High SSG usage ({}) with low dynamic routes. This is optimal for performance and SEO.",
                    format_percent(ssg_ratio)
                ),
            ));
        }
    }

    if static_count == 0 && ssg_count == 0 && dynamic_count > 0 {
        recommendations.push(Recommendation::new(
            Severity::Info,
            "Optimization Opportunity",
            "All routes are dynamic. Consider implementing SSG for routes that don't require real-time data using `generateStaticParams` or ISR.",
        ));
    }

    if ssg_count > 0 && ssg_ratio < 30.0 {
        recommendations.push(Recommendation::new(
            Severity::Info,
            "SSG Expansion",
            format!(
                "Only {} routes use SSG. Consider converting more routes to SSG for better performance, especially content-heavy pages.",
                format_percent(ssg_ratio)
            ),
        ));
    }

    let bloated = records
        .iter()
        .filter(|r| r.first_load_size_kb > BLOATED_KB)
        .count();
    if bloated as f64 > threshold(0.2) {
        recommendations.push(Recommendation::new(
            Severity::Warning,
            "Bundle Optimization",
            format!(
                "{} of routes exceed 500 kB. Implement: 1) Dynamic imports for heavy components, 2) Route-based code splitting, 3) Remove unused dependencies.",
                format_percent(percent_of(bloated, total))
            ),
        ));
    }

    let very_heavy: Vec<&RouteRecord> = records
        .iter()
        .filter(|r| r.first_load_size_kb > VERY_HEAVY_KB)
        .collect();
    if !very_heavy.is_empty() {
        let names = very_heavy
            .iter()
            .take(3)
            .map(|r| format!("`{}`", r.path))
            .collect::<Vec<_>>()
            .join(", ");
        recommendations.push(Recommendation::new(
            Severity::Critical,
            "Action Required",
            format!(
                "Routes {} need immediate attention. Techniques: 1) Use `next/dynamic` for heavy components, 2) Split vendor chunks, 3) Analyze bundle with `@next/bundle-analyzer`.",
                names
            ),
        ));
    }

    let distribution = SizeDistribution::from_records(records);
    if distribution.small as f64 > threshold(0.7) {
        recommendations.push(Recommendation::new(
            Severity::Positive,
            "Performance Score",
            format!(
                "{} of routes are under 200 kB (excellent). Your build is well-optimized!",
                format_percent(percent_of(distribution.small, total))
            ),
        ));
    } else if distribution.medium as f64 > threshold(0.5) {
        recommendations.push(Recommendation::new(
            Severity::Info,
            "Performance Score",
            format!(
                "{} of routes are 200-500 kB (good). Consider further optimization for routes in this range.",
                format_percent(percent_of(distribution.medium, total))
            ),
        ));
    }

    let api_routes = records.iter().filter(|r| r.is_api_route()).count();
    if api_routes > 0 {
        recommendations.push(Recommendation::new(
            Severity::Info,
            "API Routes",
            format!(
                "{} API route(s) detected. Ensure these are properly optimized and consider Edge Runtime for better performance.",
                api_routes
            ),
        ));
    }

    // split("/") counts the empty piece before the leading slash
    let nested = records
        .iter()
        .filter(|r| r.path.split('/').count() > 3)
        .count();
    if nested as f64 > threshold(0.3) {
        recommendations.push(Recommendation::new(
            Severity::Info,
            "Nested Routes",
            format!(
                "{} of routes are deeply nested. Consider route organization and ensure proper code splitting at route boundaries.",
                format_percent(percent_of(nested, total))
            ),
        ));
    }

    let critical_issues = very_heavy.len() + usize::from(dynamic_ratio > 60.0);
    if critical_issues == 0 && avg_first_load < HEALTHY_AVERAGE_KB {
        recommendations.push(Recommendation::new(
            Severity::Positive,
            "Overall Assessment",
            format!(
                "Your build is well-optimized! Average First Load JS is {}, which is excellent. Keep up the good work!",
                format_kb(avg_first_load)
            ),
        ));
    } else if critical_issues > 0 {
        recommendations.push(Recommendation::new(
            Severity::Critical,
            "Priority Actions",
            format!(
                "{} critical issue(s) identified. Focus on: 1) Optimizing routes over 1 MB, 2) Converting dynamic routes to SSG where possible, 3) Implementing code splitting strategies.",
                critical_issues
            ),
        ));
    }

    recommendations
}

fn push_size_distribution(
    recommendations: &mut Vec<Recommendation>,
    records: &[RouteRecord],
    total: usize,
) {
    let distribution = SizeDistribution::from_records(records);

    if distribution.very_large > 0 {
        recommendations.push(Recommendation::new(
            Severity::Critical,
            "Critical",
            format!(
                "{} route(s) exceed 1 MB First Load JS. These significantly impact performance and should be prioritized for optimization.",
                distribution.very_large
            ),
        ));
    }

    if distribution.large > 0 {
        recommendations.push(Recommendation::new(
            Severity::Warning,
            "Warning",
            format!(
                "{} route(s) between 500 kB - 1 MB. Consider code splitting, lazy loading, or removing unused dependencies.",
                distribution.large
            ),
        ));
    }

    if distribution.small as f64 > total as f64 * 0.5 {
        recommendations.push(Recommendation::new(
            Severity::Positive,
            "Good",
            format!(
                "{} of routes are under 200 kB, which is excellent for performance.",
                format_percent(percent_of(distribution.small, total))
            ),
        ));
    }
}

fn push_heaviest_routes(recommendations: &mut Vec<Recommendation>, records: &[RouteRecord]) {
    let top_first_load = top_by_first_load(records, 3);
    if let Some(heaviest) = top_first_load.first() {
        let mut message = format!(
            "`{}` ({}) - Review dependencies, implement dynamic imports, and consider route-based code splitting.",
            heaviest.path, heaviest.first_load_size_display
        );
        if top_first_load.len() > 1 {
            let top_avg = finite_sum(top_first_load.iter().map(|r| r.first_load_size_kb))
                / top_first_load.len() as f64;
            message.push_str(&format!(
                " Top {} routes average {} First Load JS; focus optimization efforts there for maximum impact.",
                top_first_load.len(),
                format_kb(top_avg)
            ));
        }
        recommendations.push(Recommendation::new(
            Severity::Info,
            "Largest First Load JS",
            message,
        ));
    }

    if let Some(largest_page) = top_by_page_size(records, 1).first() {
        if largest_page.page_size_kb > LARGE_PAGE_KB {
            recommendations.push(Recommendation::new(
                Severity::Warning,
                "Largest Page Size",
                format!(
                    "`{}` ({}) - Consider tree-shaking, removing unused code, and splitting large components.",
                    largest_page.path, largest_page.page_size_display
                ),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::{CHART, SHUFFLE};

    fn route(symbol: &str, path: &str, page_kb: f64, first_load_kb: f64) -> RouteRecord {
        RouteRecord::from_cells(
            symbol,
            path,
            &format!("{} kB", page_kb),
            &format!("{} kB", first_load_kb),
        )
    }

    fn titles(records: &[RouteRecord]) -> Vec<&'static str> {
        recommend(records).into_iter().map(|r| r.title).collect()
    }

    fn has(records: &[RouteRecord], title: &str) -> bool {
        titles(records).iter().any(|t| *t == title)
    }

    fn find(records: &[RouteRecord], title: &str) -> Recommendation {
        recommend(records)
            .into_iter()
            .find(|r| r.title == title)
            .unwrap_or_else(|| panic!("missing recommendation '{}'", title))
    }

    fn sample_routes() -> Vec<RouteRecord> {
        crate::parser::parse_build_table(
            "┌ ○ /_not-found                                            880 B          89.6 kB
├ ● /[locale]                                              2.88 kB         897 kB
├   ├ /en
├ ● /[locale]/auth/callback                                6.41 kB         131 kB
├ ● /[locale]/dashboard                                    43.4 kB        1.18 MB
├ ƒ /[locale]/dashboard/ai/summary-performance/[programId] 13.4 kB         165 kB
├ ● /[locale]/login                                        9.74 kB         185 kB
└ ● /[locale]/sso                                          428 B          94.8 kB",
        )
    }

    #[test]
    fn test_empty_input_returns_fallback_message_only() {
        assert_eq!(
            generate_recommendations(&[]),
            vec![NO_ROUTES_MESSAGE.to_string()]
        );
        assert!(recommend(&[]).is_empty());
    }

    #[test]
    fn test_sample_report_recommendations_in_order() {
        assert_eq!(
            titles(&sample_routes()),
            vec![
                "Build Overview",
                "Route Types",
                "Critical",
                "Warning",
                "Good",
                "Largest First Load JS",
                "Complex Dynamic Routes",
                "Excellent",
                "Bundle Optimization",
                "Action Required",
                "Performance Score",
                "Priority Actions",
            ]
        );
    }

    #[test]
    fn test_sample_report_message_contents() {
        let routes = sample_routes();
        let strings = generate_recommendations(&routes);

        assert_eq!(
            strings[0],
            format!(
                "{} **Build Overview**: 7 total routes | Average First Load: 395.8 kB | Average Page Size: 11.0 kB",
                CHART
            )
        );
        assert_eq!(
            strings[1],
            format!(
                "{} **Route Types**: Static 14.3% (1) | SSG 71.4% (5) | Dynamic 14.3% (1)",
                SHUFFLE
            )
        );

        let heaviest = find(&routes, "Largest First Load JS");
        assert!(heaviest.message.starts_with("`/[locale]/dashboard` (1.18 MB)"));
        assert!(heaviest.message.contains("Top 3 routes average 763.4 kB"));

        let action = find(&routes, "Action Required");
        assert!(action.message.contains("`/[locale]/dashboard`"));
        assert_eq!(action.severity, Severity::Critical);

        assert!(find(&routes, "Priority Actions").message.starts_with("1 critical issue(s)"));
    }

    #[test]
    fn test_exactly_one_mb_is_critical_but_not_very_heavy() {
        let routes = vec![route("○", "/edge", 1.0, 1024.0)];
        assert!(has(&routes, "Critical"));
        assert!(!has(&routes, "Action Required"));
        // No critical issues, but the average is far above 300 kB
        assert!(!has(&routes, "Priority Actions"));
        assert!(!has(&routes, "Overall Assessment"));
    }

    #[test]
    fn test_exactly_500_kb_is_large_but_not_bloated() {
        let routes = vec![route("○", "/edge", 1.0, 500.0)];
        assert!(has(&routes, "Warning"));
        assert!(!has(&routes, "Bundle Optimization"));
    }

    #[test]
    fn test_just_over_500_kb_counts_as_bloated() {
        let routes = vec![route("○", "/edge", 1.0, 500.5)];
        assert!(has(&routes, "Bundle Optimization"));
    }

    #[test]
    fn test_half_small_routes_is_not_good() {
        let routes = vec![route("○", "/a", 1.0, 100.0), route("○", "/b", 1.0, 300.0)];
        assert!(!has(&routes, "Good"));

        let routes = vec![
            route("○", "/a", 1.0, 100.0),
            route("○", "/b", 1.0, 100.0),
            route("○", "/c", 1.0, 300.0),
        ];
        assert!(has(&routes, "Good"));
    }

    #[test]
    fn test_single_route_has_no_top_average() {
        let routes = vec![route("○", "/only", 1.0, 100.0)];
        let heaviest = find(&routes, "Largest First Load JS");
        assert!(!heaviest.message.contains("average"));
    }

    #[test]
    fn test_large_page_size_boundary() {
        assert!(!has(&[route("○", "/p", 300.0, 100.0)], "Largest Page Size"));
        let big = find(&[route("○", "/p", 300.5, 100.0)], "Largest Page Size");
        assert!(big.message.starts_with("`/p` (300.5 kB)"));
    }

    #[test]
    fn test_dynamic_ratio_of_exactly_60_percent_is_not_high() {
        let routes = vec![
            route("ƒ", "/a", 1.0, 100.0),
            route("ƒ", "/b", 1.0, 100.0),
            route("ƒ", "/c", 1.0, 100.0),
            route("○", "/d", 1.0, 100.0),
            route("○", "/e", 1.0, 100.0),
        ];
        assert!(!has(&routes, "High Dynamic Ratio"));
        assert!(has(&routes, "Overall Assessment"));
    }

    #[test]
    fn test_all_dynamic_routes() {
        let routes = vec![route("ƒ", "/a", 1.0, 100.0), route("ƒ", "/b", 1.0, 100.0)];
        let found = titles(&routes);

        assert!(found.contains(&"High Dynamic Ratio"));
        assert!(found.contains(&"Optimization Opportunity"));
        assert!(found.contains(&"Priority Actions"));
        assert!(!found.contains(&"Overall Assessment"));
        assert!(find(&routes, "Priority Actions").message.starts_with("1 critical"));
    }

    #[test]
    fn test_ssg_praise_requires_a_dynamic_route() {
        let without_dynamic = vec![route("●", "/a", 1.0, 100.0), route("●", "/b", 1.0, 100.0)];
        assert!(!has(&without_dynamic, "Excellent"));

        let mut with_dynamic: Vec<RouteRecord> = (0..5)
            .map(|i| route("●", &format!("/ssg{}", i), 1.0, 100.0))
            .collect();
        with_dynamic.push(route("ƒ", "/live", 1.0, 100.0));
        assert!(has(&with_dynamic, "Excellent"));
    }

    #[test]
    fn test_complex_dynamic_needs_two_bracketed_segments() {
        assert!(!has(&[route("ƒ", "/blog/[slug]", 1.0, 100.0)], "Complex Dynamic Routes"));
        assert!(has(&[route("ƒ", "/[lang]/blog/[slug]", 1.0, 100.0)], "Complex Dynamic Routes"));
        // Only dynamic routes are considered
        assert!(!has(&[route("●", "/[lang]/blog/[slug]", 1.0, 100.0)], "Complex Dynamic Routes"));
    }

    #[test]
    fn test_ssg_expansion_below_30_percent() {
        let routes = vec![
            route("●", "/a", 1.0, 100.0),
            route("○", "/b", 1.0, 100.0),
            route("○", "/c", 1.0, 100.0),
            route("○", "/d", 1.0, 100.0),
        ];
        assert!(find(&routes, "SSG Expansion").message.starts_with("Only 25.0%"));

        let no_ssg = vec![route("○", "/a", 1.0, 100.0)];
        assert!(!has(&no_ssg, "SSG Expansion"));
    }

    #[test]
    fn test_performance_score_thresholds() {
        // 7 of 10 under 200 kB is not more than 70%
        let mut routes: Vec<RouteRecord> = (0..7)
            .map(|i| route("○", &format!("/s{}", i), 1.0, 100.0))
            .collect();
        routes.extend((0..3).map(|i| route("○", &format!("/m{}", i), 1.0, 300.0)));
        assert!(!has(&routes, "Performance Score"));

        let medium: Vec<RouteRecord> = (0..3)
            .map(|i| route("○", &format!("/m{}", i), 1.0, 300.0))
            .collect();
        let score = find(&medium, "Performance Score");
        assert!(score.message.contains("200-500 kB (good)"));
    }

    #[test]
    fn test_api_routes_are_counted() {
        let routes = vec![
            route("ƒ", "/api/users", 0.0, 0.0),
            route("ƒ", "/api/posts/[id]", 0.0, 0.0),
            route("○", "/", 1.0, 90.0),
        ];
        assert!(find(&routes, "API Routes").message.starts_with("2 API route(s)"));
    }

    #[test]
    fn test_deep_nesting_threshold() {
        // "/a/b/c" splits into 4 pieces
        let routes = vec![
            route("○", "/a/b/c", 1.0, 100.0),
            route("○", "/a", 1.0, 100.0),
            route("○", "/b", 1.0, 100.0),
        ];
        assert!(has(&routes, "Nested Routes"));

        let shallow = vec![route("○", "/a/b", 1.0, 100.0)];
        assert!(!has(&shallow, "Nested Routes"));
    }

    fn routes_of(symbols: &[&str], prefix: &str, first_load_kb: f64) -> Vec<RouteRecord> {
        symbols
            .iter()
            .enumerate()
            .map(|(i, symbol)| route(symbol, &format!("{}{}", prefix, i), 1.0, first_load_kb))
            .collect()
    }

    #[test]
    fn test_bundle_optimization_needs_more_than_20_percent() {
        // 1 of 5 over 500 kB is exactly 20%
        let mut routes = routes_of(&["○"; 4], "/light", 100.0);
        routes.push(route("○", "/heavy0", 1.0, 600.0));
        assert!(!has(&routes, "Bundle Optimization"));

        routes[0] = route("○", "/heavy1", 1.0, 600.0);
        assert!(find(&routes, "Bundle Optimization")
            .message
            .starts_with("40.0% of routes exceed 500 kB"));
    }

    #[test]
    fn test_nested_routes_need_more_than_30_percent() {
        // 3 of 10 nested is exactly 30%
        let mut routes = routes_of(&["○"; 3], "/a/b/c", 100.0);
        routes.extend(routes_of(&["○"; 7], "/flat", 100.0));
        assert!(!has(&routes, "Nested Routes"));

        routes[9] = route("○", "/a/b/d", 1.0, 100.0);
        assert!(find(&routes, "Nested Routes")
            .message
            .starts_with("40.0% of routes are deeply nested"));
    }

    #[test]
    fn test_ssg_expansion_stops_at_exactly_30_percent() {
        let mut routes = routes_of(&["●"; 3], "/ssg", 100.0);
        routes.extend(routes_of(&["○"; 7], "/static", 100.0));
        assert!(!has(&routes, "SSG Expansion"));

        routes[0] = route("○", "/static-extra", 1.0, 100.0);
        assert!(find(&routes, "SSG Expansion")
            .message
            .starts_with("Only 20.0%"));
    }

    #[test]
    fn test_ssg_praise_boundaries() {
        // Dynamic exactly 20% with SSG 60%
        let mut routes = routes_of(&["ƒ"], "/dyn", 100.0);
        routes.extend(routes_of(&["●"; 3], "/ssg", 100.0));
        routes.extend(routes_of(&["○"], "/static", 100.0));
        assert!(!has(&routes, "Excellent"));

        // SSG exactly 50% with dynamic 10%
        let mut routes = routes_of(&["ƒ"], "/dyn", 100.0);
        routes.extend(routes_of(&["●"; 5], "/ssg", 100.0));
        routes.extend(routes_of(&["○"; 4], "/static", 100.0));
        assert!(!has(&routes, "Excellent"));

        // One more SSG route crosses 50%
        routes[9] = route("●", "/ssg-extra", 1.0, 100.0);
        assert!(find(&routes, "Excellent")
            .message
            .starts_with("High SSG usage (60.0%)"));
    }

    #[test]
    fn test_overflowing_size_never_renders_infinity() {
        let huge = format!("{} kB", "9".repeat(400));
        let routes = vec![RouteRecord::from_cells("○", "/", "1 kB", &huge)];

        let overview = &generate_recommendations(&routes)[0];
        assert!(!overview.contains("inf"), "{}", overview);
        assert!(overview.contains("Average First Load: 0 B"));
    }

    #[test]
    fn test_action_required_names_at_most_three_routes() {
        let routes: Vec<RouteRecord> = (0..5)
            .map(|i| route("●", &format!("/heavy{}", i), 1.0, 2048.0))
            .collect();
        let action = find(&routes, "Action Required");

        assert!(action.message.contains("`/heavy2`"));
        assert!(!action.message.contains("`/heavy3`"));
        assert!(find(&routes, "Priority Actions").message.starts_with("5 critical"));
    }

    #[test]
    fn test_nan_sizes_do_not_poison_averages() {
        let mut routes = vec![route("○", "/a", 1.0, 100.0)];
        routes.push(RouteRecord::from_cells("○", "/bad", "1 kB", "9 GB"));
        let overview = find(&routes, "Build Overview");
        assert!(overview.message.contains("Average First Load: 50.0 kB"));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let routes = sample_routes();
        assert_eq!(generate_recommendations(&routes), generate_recommendations(&routes));
    }
}
