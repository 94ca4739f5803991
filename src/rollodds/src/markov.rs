//! Markov chain over "copies hit so far"
//!
//! State `k` means `k` copies of the wanted unit have been bought during the
//! rolling session. Each shop either hits one more copy or does nothing.
//! The last state stands for "9 or more" and never leaves.

use crate::shop::{hit_probability, RollState};
use crate::tables::{Level, RollTables, Tier};

/// Highest tracked copy count
pub const MAX_COPIES: usize = 9;

/// Number of chain states (0..=MAX_COPIES)
pub const STATE_COUNT: usize = MAX_COPIES + 1;

/// Probability vector over chain states
pub type StateVector = [f64; STATE_COUNT];

/// Row-stochastic transition matrix for one shop refresh
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionMatrix([[f64; STATE_COUNT]; STATE_COUNT]);

impl TransitionMatrix {
    pub fn identity() -> Self {
        let mut m = [[0.0; STATE_COUNT]; STATE_COUNT];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self(m)
    }

    /// Transitions for a single shop.
    ///
    /// Leaving state `i` uses the hit probability with `i` extra copies out
    /// of the pool, since those were bought earlier in the session.
    pub fn for_shop(tables: &RollTables, tier: Tier, level: Level, state: RollState) -> Self {
        let mut m = [[0.0; STATE_COUNT]; STATE_COUNT];
        for (hits, row) in m.iter_mut().enumerate().take(MAX_COPIES) {
            let p = hit_probability(tables, tier, level, state.after_hits(hits as u32));
            row[hits] = 1.0 - p;
            row[hits + 1] = p;
        }
        m[MAX_COPIES][MAX_COPIES] = 1.0;

        tracing::trace!(%tier, %level, ?state, p0 = m[0][1], "built transition matrix");
        Self(m)
    }

    pub fn from_rows(rows: [[f64; STATE_COUNT]; STATE_COUNT]) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> &[[f64; STATE_COUNT]; STATE_COUNT] {
        &self.0
    }

    pub fn row(&self, state: usize) -> &StateVector {
        &self.0[state]
    }

    pub fn multiply(&self, other: &TransitionMatrix) -> TransitionMatrix {
        let mut out = [[0.0; STATE_COUNT]; STATE_COUNT];
        for (r, out_row) in out.iter_mut().enumerate() {
            for (c, cell) in out_row.iter_mut().enumerate() {
                *cell = (0..STATE_COUNT).map(|i| self.0[r][i] * other.0[i][c]).sum();
            }
        }
        TransitionMatrix(out)
    }

    /// Raise to the `n`-th power. `n == 0` is the identity.
    pub fn pow(&self, mut n: u32) -> TransitionMatrix {
        let mut result = TransitionMatrix::identity();
        let mut base = *self;
        while n > 0 {
            if n & 1 == 1 {
                result = result.multiply(&base);
            }
            n >>= 1;
            if n > 0 {
                base = base.multiply(&base);
            }
        }
        result
    }

    /// Push a distribution forward one step (row vector times matrix)
    pub fn advance(&self, dist: &StateVector) -> StateVector {
        let mut out = [0.0; STATE_COUNT];
        for (c, cell) in out.iter_mut().enumerate() {
            *cell = (0..STATE_COUNT).map(|i| dist[i] * self.0[i][c]).sum();
        }
        out
    }
}

/// Distribution with all mass on zero copies
pub fn start_state() -> StateVector {
    let mut v = [0.0; STATE_COUNT];
    v[0] = 1.0;
    v
}
