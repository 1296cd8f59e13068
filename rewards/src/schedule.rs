//! Reduction-factor schedule.
//!
//! As adoption grows, every signup payout is scaled down by a step function
//! over the cumulative signup count. The factor is a percentage in
//! {100, 90, 80, 70, 60, 50, 40, 30, 20, 10, 5, 0}.

use serde::{Deserialize, Serialize};

/// The standard schedule: each entry is (signup threshold, factor). A factor
/// applies once the cumulative count is strictly above its threshold.
const STANDARD_SCHEDULE: [(u64, u32); 11] = [
    (100_000, 90),
    (200_000, 80),
    (400_000, 70),
    (800_000, 60),
    (1_600_000, 50),
    (3_200_000, 40),
    (6_400_000, 30),
    (12_800_000, 20),
    (25_600_000, 10),
    (51_200_000, 5),
    (102_400_000, 0),
];

/// An ordered list of (threshold, factor) steps. Immutable after
/// construction and shared by reference.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReductionSchedule {
    entries: Vec<(u64, u32)>,
}

impl ReductionSchedule {
    /// The chain's standard schedule.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_SCHEDULE.to_vec(),
        }
    }

    /// The reduction factor for a cumulative signup count.
    ///
    /// Returns the factor of the last entry whose threshold is strictly less
    /// than `n_signups`, defaulting to 100 when no entry applies. At exactly
    /// 100 000 signups the factor is still 100; the 100 001st signup is the
    /// first to be scaled by 90.
    pub fn factor(&self, n_signups: u64) -> u32 {
        let mut factor = 100;
        for &(threshold, f) in &self.entries {
            if threshold < n_signups {
                factor = f;
            } else {
                break;
            }
        }
        factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_factor_is_100() {
        let s = ReductionSchedule::standard();
        assert_eq!(s.factor(0), 100);
        assert_eq!(s.factor(1), 100);
        assert_eq!(s.factor(99_999), 100);
    }

    #[test]
    fn threshold_is_strictly_less_than() {
        let s = ReductionSchedule::standard();
        assert_eq!(s.factor(100_000), 100);
        assert_eq!(s.factor(100_001), 90);
        assert_eq!(s.factor(200_000), 90);
        assert_eq!(s.factor(200_001), 80);
    }

    #[test]
    fn bottom_of_the_schedule() {
        let s = ReductionSchedule::standard();
        assert_eq!(s.factor(102_400_000), 5);
        assert_eq!(s.factor(102_400_001), 0);
        assert_eq!(s.factor(u64::MAX), 0);
    }

    #[test]
    fn factor_is_monotonically_non_increasing() {
        let s = ReductionSchedule::standard();
        let mut prev = s.factor(0);
        for n in (0..200_000_000u64).step_by(1_000_000) {
            let f = s.factor(n);
            assert!(f <= prev, "factor increased at n={}", n);
            prev = f;
        }
    }
}
