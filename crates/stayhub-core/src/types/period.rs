//! Half-open stay periods and the interval-overlap predicate.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::result::AppResult;

/// A half-open `[check_in, check_out)` time window.
///
/// The check-out instant is excluded: a stay that checks out at the exact
/// moment another checks in does not overlap it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayPeriod {
    /// Inclusive start of the stay.
    pub check_in: DateTime<Utc>,
    /// Exclusive end of the stay.
    pub check_out: DateTime<Utc>,
}

impl StayPeriod {
    /// Build a period, rejecting windows where check-out is not strictly
    /// after check-in.
    pub fn new(check_in: DateTime<Utc>, check_out: DateTime<Utc>) -> AppResult<Self> {
        if check_out <= check_in {
            return Err(AppError::invalid_date_range(
                "check-out must be after check-in",
            ));
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Strict half-open overlap: `[a, b)` and `[c, d)` intersect iff
    /// `a < d && c < b`.
    pub fn overlaps(&self, other: &StayPeriod) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Length of the stay in whole seconds.
    pub fn seconds(&self) -> i64 {
        (self.check_out - self.check_in).num_seconds()
    }
}
