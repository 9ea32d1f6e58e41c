//! Shared formatting utilities for size display and console output

use console::Emoji;

/// Checkmark emoji for success
pub const CHECKMARK: Emoji = Emoji("✅", "[OK]");

/// Crossmark emoji for failure
pub const CROSSMARK: Emoji = Emoji("❌", "[FAIL]");

/// Info emoji for informational messages
pub const INFO: Emoji = Emoji("ℹ️", "i");

/// Chart emoji for metrics/statistics
pub const CHART: Emoji = Emoji("📊", "~");

/// Microscope emoji for analysis/inspection
pub const MICROSCOPE: Emoji = Emoji("🔍", ">>");

/// Warning emoji for caution/alerts
pub const WARNING: Emoji = Emoji("⚠️", "!");

/// Sparkles emoji for completion/success
pub const SPARKLES: Emoji = Emoji("✨", "*");

/// Package emoji for bundle warnings
pub const PACKAGE: Emoji = Emoji("📦", "[!]");

/// Shuffle emoji for route type mix
pub const SHUFFLE: Emoji = Emoji("🔀", "~");

/// Top emoji for the heaviest route
pub const TOP: Emoji = Emoji("🔝", "^");

/// Cycle emoji for dynamic segments
pub const CYCLE: Emoji = Emoji("🔄", "~");

/// Lightning emoji for rendering strategy
pub const LIGHTNING: Emoji = Emoji("⚡", "!");

/// Light bulb emoji for suggestions
pub const BULB: Emoji = Emoji("💡", "*");

/// Target emoji for focused actions
pub const TARGET: Emoji = Emoji("🎯", ">");

/// Tools emoji for required fixes
pub const TOOLS: Emoji = Emoji("🛠️", "[!]");

/// Plug emoji for API routes
pub const PLUG: Emoji = Emoji("🔌", "-");

/// Folders emoji for route nesting
pub const FOLDERS: Emoji = Emoji("🗂️", "-");

/// Format a kilobyte value the way `next build` prints sizes
///
/// Below 1 kB the value is shown in bytes, up to 1024 kB in kB with one
/// decimal, and above that in MB with two decimals.
///
/// # Examples
///
/// ```
/// use next_build_parser::fmt::format_kb;
///
/// assert_eq!(format_kb(0.5), "512 B");
/// assert_eq!(format_kb(89.6), "89.6 kB");
/// assert_eq!(format_kb(2048.0), "2.00 MB");
/// assert_eq!(format_kb(f64::NAN), "n/a");
/// ```
pub fn format_kb(kb: f64) -> String {
    if kb.is_nan() {
        "n/a".to_string()
    } else if kb < 1.0 {
        format!("{:.0} B", kb * 1024.0)
    } else if kb < 1024.0 {
        format!("{:.1} kB", kb)
    } else {
        format!("{:.2} MB", kb / 1024.0)
    }
}

/// Format a percentage (0-100) with one decimal
///
/// # Examples
///
/// ```
/// use next_build_parser::fmt::format_percent;
///
/// assert_eq!(format_percent(42.857), "42.9%");
/// ```
pub fn format_percent(value: f64) -> String {
    format!("{:.1}%", value)
}
