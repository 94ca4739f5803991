//! Copy-count distributions and expected value

use serde::{Deserialize, Serialize};

use crate::markov::{StateVector, TransitionMatrix, STATE_COUNT};

/// Shop refreshes bought per reroll
pub const SHOPS_PER_REROLL: u32 = 5;

/// Gold spent per reroll
pub const GOLD_PER_REROLL: u32 = 2;

/// Number of shops seen when rolling `gold`. Odd leftover gold buys nothing.
pub fn shops_for_gold(gold: u32) -> u32 {
    SHOPS_PER_REROLL.saturating_mul(gold / GOLD_PER_REROLL)
}

/// Outcome of a rolling session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// P(exactly k copies), the last entry is "9 or more"
    pub exact: StateVector,
    /// P(at least k copies)
    pub cumulative: StateVector,
    pub expected_value: f64,
}

impl Distribution {
    /// Distribution after `shops` refreshes starting from zero copies
    pub fn after_shops(matrix: &TransitionMatrix, shops: u32) -> Self {
        Self::from_exact(*matrix.pow(shops).row(0))
    }

    pub fn from_exact(exact: StateVector) -> Self {
        let mut cumulative = [0.0; STATE_COUNT];
        let mut below = 0.0_f64;
        for (k, slot) in cumulative.iter_mut().enumerate() {
            // Subtraction can leave -1e-17 behind once all mass has moved up
            *slot = if k == 0 { 1.0 } else { (1.0 - below).max(0.0) };
            below += exact[k];
        }

        Self {
            exact,
            cumulative,
            expected_value: expected_value(&exact),
        }
    }

    pub fn exactly(&self, copies: usize) -> f64 {
        self.exact.get(copies).copied().unwrap_or(0.0)
    }

    pub fn at_least(&self, copies: usize) -> f64 {
        self.cumulative.get(copies).copied().unwrap_or(0.0)
    }

    /// Cumulative odds rounded to two decimals, for display
    pub fn cumulative_rounded(&self) -> StateVector {
        self.cumulative.map(round2)
    }
}

/// Mean copy count of a state distribution
pub fn expected_value(dist: &StateVector) -> f64 {
    dist.iter()
        .enumerate()
        .skip(1)
        .map(|(k, p)| k as f64 * p)
        .sum()
}

/// Round to two decimal places
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markov::MAX_COPIES;
    use crate::shop::RollState;
    use crate::tables::{Level, PoolVariant, RollTables, Tier};

    fn matrix(tier: u8, level: u8) -> TransitionMatrix {
        TransitionMatrix::for_shop(
            &RollTables::builtin(PoolVariant::Set12),
            Tier::new(tier).unwrap(),
            Level::new(level).unwrap(),
            RollState::default(),
        )
    }

    #[test]
    fn test_shops_for_gold() {
        assert_eq!(shops_for_gold(0), 0);
        assert_eq!(shops_for_gold(1), 0);
        assert_eq!(shops_for_gold(2), 5);
        assert_eq!(shops_for_gold(3), 5);
        assert_eq!(shops_for_gold(50), 125);
        assert_eq!(shops_for_gold(u32::MAX), u32::MAX);
    }

    #[test]
    fn test_no_shops() {
        let dist = Distribution::after_shops(&matrix(1, 9), 0);
        assert_eq!(dist.exact[0], 1.0);
        assert_eq!(dist.expected_value, 0.0);
        assert_eq!(dist.cumulative[0], 1.0);
        assert!(dist.cumulative[1..].iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_distribution_properties() {
        for (tier, level, shops) in [(1, 4, 20), (3, 7, 100), (4, 9, 250), (5, 11, 400)] {
            let dist = Distribution::after_shops(&matrix(tier, level), shops);
            let total: f64 = dist.exact.iter().sum();
            assert!((total - 1.0).abs() < 1e-6);
            assert!(dist.exact.iter().all(|&p| (0.0..=1.0).contains(&p)));
            assert_eq!(dist.cumulative[0], 1.0);
            for k in 1..STATE_COUNT {
                assert!(dist.cumulative[k] <= dist.cumulative[k - 1] + 1e-12);
            }
            assert!((0.0..=MAX_COPIES as f64).contains(&dist.expected_value));
        }
    }

    #[test]
    fn test_cumulative_matches_tail_sum() {
        let dist = Distribution::after_shops(&matrix(2, 6), 60);
        for k in 0..STATE_COUNT {
            let tail: f64 = dist.exact[k..].iter().sum();
            assert!((dist.at_least(k) - tail).abs() < 1e-9);
        }
    }

    #[test]
    fn test_expected_value() {
        let mut exact = [0.0; STATE_COUNT];
        exact[0] = 0.5;
        exact[2] = 0.25;
        exact[4] = 0.25;
        let dist = Distribution::from_exact(exact);
        assert!((dist.expected_value - 1.5).abs() < 1e-12);
        assert_eq!(dist.exactly(2), 0.25);
        assert_eq!(dist.exactly(42), 0.0);
        assert_eq!(dist.at_least(42), 0.0);
    }

    #[test]
    fn test_rounded_cumulative() {
        let mut exact = [0.0; STATE_COUNT];
        exact[0] = 0.123;
        exact[1] = 0.877;
        let dist = Distribution::from_exact(exact);
        let rounded = dist.cumulative_rounded();
        assert_eq!(rounded[0], 1.0);
        assert_eq!(rounded[1], 0.88);
        assert_eq!(rounded[2], 0.0);
    }

    #[test]
    fn test_all_mass_absorbed() {
        let mut exact = [0.0; STATE_COUNT];
        exact[MAX_COPIES] = 1.0;
        let dist = Distribution::from_exact(exact);
        assert!(dist.cumulative.iter().all(|&c| c == 1.0));
        assert_eq!(dist.expected_value, 9.0);
    }
}
