//! Test assertion helpers

/// Assert that two floating-point values are approximately equal
#[allow(dead_code)]
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff < epsilon,
        "Float values not approximately equal:\n  actual: {}\n  expected: {}\n  diff: {} (epsilon: {})",
        actual, expected, diff, epsilon
    );
}

/// Data rows of a markdown table, without header and separator
#[allow(dead_code)]
pub fn markdown_rows(table: &str) -> Vec<&str> {
    table
        .lines()
        .filter(|line| line.starts_with("| ") && !line.starts_with("| # "))
        .collect()
}

/// Assert that the markdown table lists `paths` in this order
#[allow(dead_code)]
pub fn assert_markdown_paths(table: &str, paths: &[&str]) {
    let rows = markdown_rows(table);
    assert_eq!(
        rows.len(),
        paths.len(),
        "unexpected row count in table:\n{}",
        table
    );
    for (row, path) in rows.iter().zip(paths) {
        assert!(
            row.contains(&format!("`{}`", path)),
            "row {:?} should contain {}",
            row,
            path
        );
    }
}
