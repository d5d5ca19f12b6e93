//! Affine gap alignment
//!
//! Global alignment score where opening a gap costs `gap_start` and every
//! further position of the same gap costs `gap_continuation`. This models the
//! observation that a single long gap is more likely than several short ones.
//!
//! The score is computed with three DP tables: `m` for alignments ending in a
//! character pair, `x` for alignments ending in a gap in the second string and
//! `y` for alignments ending in a gap in the first string. The result is the
//! best of the three bottom right cells. It is not normalized and may be
//! negative.

use std::fmt;
use std::sync::Arc;

use crate::details::matrix::Matrix;
use crate::distance::{default_char_sim, CharSimFn};
use crate::error::Result;
use crate::SequenceMeasure;

/// Affine gap measure
///
/// ```
/// use stringmatching::distance::Affine;
/// use stringmatching::SequenceMeasure;
///
/// assert_eq!(1.5, Affine::new().raw_score("dva", "deeva").unwrap());
///
/// let aff = Affine::new().with_gap_start(2.0);
/// assert_eq!(-0.5, aff.raw_score("dva", "deeve").unwrap());
/// ```
#[derive(Clone)]
pub struct Affine {
    gap_start: f64,
    gap_continuation: f64,
    sim_func: CharSimFn,
}

impl Default for Affine {
    fn default() -> Self {
        Affine {
            gap_start: 1.0,
            gap_continuation: 0.5,
            sim_func: default_char_sim(),
        }
    }
}

impl fmt::Debug for Affine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Affine")
            .field("gap_start", &self.gap_start)
            .field("gap_continuation", &self.gap_continuation)
            .finish_non_exhaustive()
    }
}

impl Affine {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_gap_start(mut self, gap_start: f64) -> Self {
        self.gap_start = gap_start;
        self
    }

    #[must_use]
    pub fn with_gap_continuation(mut self, gap_continuation: f64) -> Self {
        self.gap_continuation = gap_continuation;
        self
    }

    #[must_use]
    pub fn with_sim_func<F>(mut self, sim_func: F) -> Self
    where
        F: Fn(char, char) -> f64 + Send + Sync + 'static,
    {
        self.sim_func = Arc::new(sim_func);
        self
    }

    pub fn gap_start(&self) -> f64 {
        self.gap_start
    }

    pub fn set_gap_start(&mut self, gap_start: f64) {
        self.gap_start = gap_start;
    }

    pub fn gap_continuation(&self) -> f64 {
        self.gap_continuation
    }

    pub fn set_gap_continuation(&mut self, gap_continuation: f64) {
        self.gap_continuation = gap_continuation;
    }

    pub fn sim_func(&self) -> &CharSimFn {
        &self.sim_func
    }

    pub fn set_sim_func<F>(&mut self, sim_func: F)
    where
        F: Fn(char, char) -> f64 + Send + Sync + 'static,
    {
        self.sim_func = Arc::new(sim_func);
    }

    fn score(&self, s1: &[char], s2: &[char]) -> f64 {
        let rows = s1.len() + 1;
        let cols = s2.len() + 1;
        let mut m = Matrix::new(rows, cols, 0.0_f64);
        let mut x = Matrix::new(rows, cols, 0.0_f64);
        let mut y = Matrix::new(rows, cols, 0.0_f64);

        for i in 1..rows {
            m.set(i, 0, f64::NEG_INFINITY);
            x.set(i, 0, -self.gap_start - (i - 1) as f64 * self.gap_continuation);
            y.set(i, 0, f64::NEG_INFINITY);
        }
        for j in 1..cols {
            m.set(0, j, f64::NEG_INFINITY);
            x.set(0, j, f64::NEG_INFINITY);
            y.set(0, j, -self.gap_start - (j - 1) as f64 * self.gap_continuation);
        }

        for (i, &ch1) in s1.iter().enumerate().map(|(i, ch)| (i + 1, ch)) {
            for (j, &ch2) in s2.iter().enumerate().map(|(j, ch)| (j + 1, ch)) {
                let best_prev = m.get(i - 1, j - 1).max(*x.get(i - 1, j - 1)).max(*y.get(i - 1, j - 1));
                m.set(i, j, (self.sim_func)(ch1, ch2) + best_prev);
                x.set(
                    i,
                    j,
                    (-self.gap_start + m.get(i - 1, j)).max(-self.gap_continuation + x.get(i - 1, j)),
                );
                y.set(
                    i,
                    j,
                    (-self.gap_start + m.get(i, j - 1)).max(-self.gap_continuation + y.get(i, j - 1)),
                );
            }
        }

        m.last().max(x.last()).max(y.last())
    }
}

impl SequenceMeasure for Affine {
    fn raw_score(&self, s1: &str, s2: &str) -> Result<f64> {
        if s1.is_empty() || s2.is_empty() {
            return Ok(0.0);
        }
        let s1: Vec<char> = s1.chars().collect();
        let s2: Vec<char> = s2.chars().collect();
        Ok(self.score(&s1, &s2))
    }
}
