use serde::Serialize;

/// Percent of the pool paid to each of the top four finishers.
pub const CHAMPION_SHARE_PCT: i64 = 50;
pub const RUNNER_UP_SHARE_PCT: i64 = 30;
pub const THIRD_PLACE_SHARE_PCT: i64 = 15;
pub const FOURTH_PLACE_SHARE_PCT: i64 = 5;

/// Cash paid to the top four finishers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PrizeDistribution {
    pub champion: i64,
    pub runner_up: i64,
    pub third_place: i64,
    pub fourth_place: i64,
}

impl PrizeDistribution {
    pub fn total(&self) -> i64 {
        self.champion + self.runner_up + self.third_place + self.fourth_place
    }

    /// Amount of `total_prize` left undistributed by flooring.
    pub fn remainder(&self, total_prize: i64) -> i64 {
        total_prize.max(0) - self.total()
    }
}

fn share(total: i64, pct: i64) -> i64 {
    // Widen so very large pools cannot overflow before the division.
    (i128::from(total) * i128::from(pct) / 100) as i64
}

/// Split `total_prize` 50/30/15/5 between the top four, flooring each share.
///
/// The flooring residual is not redistributed. Non-positive pools pay nothing.
pub fn distribute(total_prize: i64) -> PrizeDistribution {
    if total_prize <= 0 {
        return PrizeDistribution::default();
    }

    PrizeDistribution {
        champion: share(total_prize, CHAMPION_SHARE_PCT),
        runner_up: share(total_prize, RUNNER_UP_SHARE_PCT),
        third_place: share(total_prize, THIRD_PLACE_SHARE_PCT),
        fourth_place: share(total_prize, FOURTH_PLACE_SHARE_PCT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_sum_to_one_hundred_percent() {
        assert_eq!(
            CHAMPION_SHARE_PCT + RUNNER_UP_SHARE_PCT + THIRD_PLACE_SHARE_PCT + FOURTH_PLACE_SHARE_PCT,
            100
        );
    }

    #[test]
    fn test_non_positive_pool_pays_nothing() {
        assert_eq!(distribute(0), PrizeDistribution::default());
        assert_eq!(distribute(-1), PrizeDistribution::default());
        assert_eq!(distribute(i64::MIN), PrizeDistribution::default());
    }

    #[test]
    fn test_ten_million_pool() {
        let split = distribute(10_000_000);
        assert_eq!(split.champion, 5_000_000);
        assert_eq!(split.runner_up, 3_000_000);
        assert_eq!(split.third_place, 1_500_000);
        assert_eq!(split.fourth_place, 500_000);
        assert_eq!(split.remainder(10_000_000), 0);
    }

    #[test]
    fn test_flooring_remainder_is_kept_out() {
        // 5 + 3 + 1 + 0 = 9
        let split = distribute(10);
        assert_eq!(split.champion, 5);
        assert_eq!(split.runner_up, 3);
        assert_eq!(split.third_place, 1);
        assert_eq!(split.fourth_place, 0);
        assert_eq!(split.total(), 9);
        assert_eq!(split.remainder(10), 1);
    }

    #[test]
    fn test_distribution_never_exceeds_pool() {
        let pools = [1, 2, 3, 7, 19, 99, 101, 333, 999, 12_345, 1_000_001, i64::MAX];
        for pool in pools {
            let split = distribute(pool);
            assert!(split.total() <= pool, "pool {pool}: {split:?}");
            assert!(split.remainder(pool) >= 0);
        }
        for pool in 0..500 {
            assert!(distribute(pool).total() <= pool);
        }
    }

    #[test]
    fn test_exact_when_divisible_by_twenty() {
        for pool in [20, 40, 2_000, 1_000_000] {
            assert_eq!(distribute(pool).total(), pool);
        }
    }
}
