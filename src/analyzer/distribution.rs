//! First Load JS size buckets

use crate::parser::RouteRecord;
use serde::{Deserialize, Serialize};

/// Upper bound of the small bucket, kB (exclusive)
pub const SMALL_LIMIT_KB: f64 = 200.0;
/// Upper bound of the medium bucket, kB (exclusive)
pub const MEDIUM_LIMIT_KB: f64 = 500.0;
/// Upper bound of the large bucket, kB (exclusive)
pub const LARGE_LIMIT_KB: f64 = 1024.0;

/// Size class of a route's First Load JS
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBucket {
    /// Under 200 kB
    Small,
    /// 200 kB up to 500 kB
    Medium,
    /// 500 kB up to 1 MB
    Large,
    /// 1 MB and above
    VeryLarge,
}

impl SizeBucket {
    /// Classify a First Load JS size
    ///
    /// `NaN` has no weight and lands in [`SizeBucket::Small`], so every
    /// route belongs to exactly one bucket.
    pub fn of(first_load_kb: f64) -> Self {
        if first_load_kb >= LARGE_LIMIT_KB {
            Self::VeryLarge
        } else if first_load_kb >= MEDIUM_LIMIT_KB {
            Self::Large
        } else if first_load_kb >= SMALL_LIMIT_KB {
            Self::Medium
        } else {
            Self::Small
        }
    }
}

/// Route counts per [`SizeBucket`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeDistribution {
    /// Routes under 200 kB
    pub small: usize,
    /// Routes in [200, 500) kB
    pub medium: usize,
    /// Routes in [500, 1024) kB
    pub large: usize,
    /// Routes at or above 1024 kB
    pub very_large: usize,
}

impl SizeDistribution {
    /// Count routes per bucket
    pub fn from_records(records: &[RouteRecord]) -> Self {
        records.iter().fold(Self::default(), |mut dist, record| {
            match SizeBucket::of(record.first_load_size_kb) {
                SizeBucket::Small => dist.small += 1,
                SizeBucket::Medium => dist.medium += 1,
                SizeBucket::Large => dist.large += 1,
                SizeBucket::VeryLarge => dist.very_large += 1,
            }
            dist
        })
    }

    /// Total number of routes counted
    pub fn total(&self) -> usize {
        self.small + self.medium + self.large + self.very_large
    }
}

/// Sum of finite values; `NaN` contributes nothing
pub(crate) fn finite_sum(values: impl Iterator<Item = f64>) -> f64 {
    values.filter(|v| !v.is_nan()).sum()
}

/// `part` as a percentage of `total`
pub(crate) fn percent_of(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// `part` kB as a percentage of `total` kB; 0 when `total` is 0
pub(crate) fn percent_of_kb(part: f64, total: f64) -> f64 {
    if total == 0.0 {
        0.0
    } else {
        part / total * 100.0
    }
}
