//! Closed numeric range used to filter reviews by classification

use crate::error::{ReviewGuardError, Result};
use serde::{Deserialize, Serialize};

/// Inclusive `[start_point, end_point]` bounds.
///
/// Construction does not enforce ordering; see [`Range::ensure_well_formed`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub start_point: f64,
    pub end_point: f64,
}

impl Range {
    /// Create a range
    pub fn new(start_point: f64, end_point: f64) -> Self {
        Self {
            start_point,
            end_point,
        }
    }

    /// True when both bounds are numbers and start <= end
    pub fn is_well_formed(&self) -> bool {
        self.start_point <= self.end_point
    }

    /// Reject ranges that can never match anything
    pub fn ensure_well_formed(&self) -> Result<()> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(ReviewGuardError::InvalidRange {
                start: self.start_point,
                end: self.end_point,
            })
        }
    }

    /// Inclusive membership test
    pub fn contains(&self, value: f64) -> bool {
        self.start_point <= value && value <= self.end_point
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let range = Range::new(10.0, 20.0);
        assert!(range.contains(10.0));
        assert!(range.contains(15.0));
        assert!(range.contains(20.0));
        assert!(!range.contains(9.999));
        assert!(!range.contains(20.001));
    }

    #[test]
    fn test_degenerate_range() {
        let range = Range::new(5.0, 5.0);
        assert!(range.is_well_formed());
        assert!(range.contains(5.0));
    }

    #[test]
    fn test_reversed_range_rejected() {
        let range = Range::new(20.0, 10.0);
        assert!(!range.is_well_formed());
        assert!(matches!(
            range.ensure_well_formed(),
            Err(ReviewGuardError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_nan_bound_rejected() {
        assert!(!Range::new(f64::NAN, 1.0).is_well_formed());
        assert!(!Range::new(0.0, f64::NAN).is_well_formed());
    }
}
