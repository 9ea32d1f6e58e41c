//! Size token normalization
//!
//! `next build` prints sizes as `880 B`, `89.6 kB` or `1.33 MB`. Everything is
//! normalized to kilobytes (1 kB = 1024 B). Unparseable tokens become `NaN`
//! instead of an error so a malformed cell never drops its row.

/// Parse a size token such as `"1.33 MB"` into kilobytes.
///
/// Accepts `<number><optional whitespace><unit>` with unit `B`, `kB` or `MB`
/// (case-sensitive). Returns `f64::NAN` for anything else, including numbers
/// too large to represent as a finite kilobyte value.
///
/// # Examples
///
/// ```
/// use next_build_parser::parser::parse_size_to_kb;
///
/// assert_eq!(parse_size_to_kb("89.6 kB"), 89.6);
/// assert_eq!(parse_size_to_kb("2 MB"), 2048.0);
/// assert_eq!(parse_size_to_kb("512B"), 0.5);
/// assert!(parse_size_to_kb("10 GB").is_nan());
/// ```
pub fn parse_size_to_kb(raw: &str) -> f64 {
    let raw = raw.trim();

    let number_end = raw
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(raw.len());
    let (number, rest) = raw.split_at(number_end);

    let Some(value) = parse_decimal(number) else {
        return f64::NAN;
    };

    let kb = match rest.trim_start() {
        "B" => value / 1024.0,
        "kB" => value,
        "MB" => value * 1024.0,
        _ => return f64::NAN,
    };

    if kb.is_finite() {
        kb
    } else {
        f64::NAN
    }
}

/// Parse `digits[.digits]`, also allowing `.5` and `5.`
fn parse_decimal(number: &str) -> Option<f64> {
    let (int_part, frac_part) = match number.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (number, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    if frac_part.contains('.') {
        return None;
    }

    // Both halves are ASCII digits at this point
    let normalized = format!(
        "{}.{}",
        if int_part.is_empty() { "0" } else { int_part },
        if frac_part.is_empty() { "0" } else { frac_part }
    );
    normalized.parse::<f64>().ok().filter(|value| value.is_finite())
}
