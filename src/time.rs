// SPDX-License-Identifier: MIT

//! Approximate timestamp comparison.
//!
//! Remote timestamps are subject to clock skew and network delay, plus a
//! previously observed bug where the service reports times shifted by a fixed
//! timezone offset. The comparator accepts a pair as equal when the raw
//! difference is within the skew bound, or when removing the fixed offset
//! brings it within the bound. Failure messages always carry the original
//! values, never the adjusted difference.

use crate::error::AssertionFailure;
use chrono::{DateTime, Duration, Utc};

/// Bounds used when comparing two timestamps for "close enough" equality
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeTolerance {
    /// Maximum difference treated as equal (clock skew, network delay)
    pub skew: Duration,
    /// Fixed offset subtracted as a fallback before re-checking the bound.
    ///
    /// Works around a known timezone misreport in the service; confirm the
    /// service still exhibits it before relying on the 8-hour default.
    pub tz_correction: Duration,
}

impl Default for TimeTolerance {
    fn default() -> Self {
        Self {
            skew: Duration::seconds(30),
            tz_correction: Duration::hours(8),
        }
    }
}

impl TimeTolerance {
    /// Tolerance with a custom skew bound and the default offset correction
    pub fn with_skew(skew: Duration) -> Self {
        Self {
            skew,
            ..Self::default()
        }
    }

    /// Whether two optional timestamps are equal under this tolerance.
    ///
    /// Both absent is equal; exactly one absent is not.
    pub fn approx_eq(
        &self,
        expected: Option<DateTime<Utc>>,
        actual: Option<DateTime<Utc>>,
    ) -> bool {
        let (expected, actual) = match (expected, actual) {
            (None, None) => return true,
            (Some(e), Some(a)) => (e, a),
            _ => return false,
        };

        let diff = (expected - actual).abs();
        if diff <= self.skew {
            return true;
        }
        (diff - self.tz_correction).abs() <= self.skew
    }

    /// Assert two optional timestamps are equal under this tolerance
    pub fn assert_approx_eq(
        &self,
        message: &str,
        expected: Option<DateTime<Utc>>,
        actual: Option<DateTime<Utc>>,
    ) -> Result<(), AssertionFailure> {
        if self.approx_eq(expected, actual) {
            Ok(())
        } else {
            Err(AssertionFailure::mismatch(message, expected, actual))
        }
    }
}

/// [`TimeTolerance::approx_eq`] with the default tolerance
pub fn approx_eq(expected: Option<DateTime<Utc>>, actual: Option<DateTime<Utc>>) -> bool {
    TimeTolerance::default().approx_eq(expected, actual)
}

/// [`TimeTolerance::assert_approx_eq`] with the default tolerance
pub fn assert_approx_eq(
    message: &str,
    expected: Option<DateTime<Utc>>,
    actual: Option<DateTime<Utc>>,
) -> Result<(), AssertionFailure> {
    TimeTolerance::default().assert_approx_eq(message, expected, actual)
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
