//! Smith-Waterman alignment
//!
//! Local alignment score: the best scoring alignment between any pair of
//! substrings. It uses the Needleman-Wunsch recurrence with every cell clamped
//! at `0.0`, so the result is never negative.

use std::fmt;
use std::sync::Arc;

use crate::details::matrix::Matrix;
use crate::distance::{default_char_sim, CharSimFn};
use crate::error::Result;
use crate::SequenceMeasure;

/// Smith-Waterman measure
///
/// ```
/// use stringmatching::distance::SmithWaterman;
/// use stringmatching::SequenceMeasure;
///
/// assert_eq!(2.0, SmithWaterman::new().raw_score("cat", "hat").unwrap());
/// ```
#[derive(Clone)]
pub struct SmithWaterman {
    gap_cost: f64,
    sim_func: CharSimFn,
}

impl Default for SmithWaterman {
    fn default() -> Self {
        SmithWaterman {
            gap_cost: 1.0,
            sim_func: default_char_sim(),
        }
    }
}

impl fmt::Debug for SmithWaterman {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmithWaterman")
            .field("gap_cost", &self.gap_cost)
            .finish_non_exhaustive()
    }
}

impl SmithWaterman {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_gap_cost(mut self, gap_cost: f64) -> Self {
        self.gap_cost = gap_cost;
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

    pub fn gap_cost(&self) -> f64 {
        self.gap_cost
    }

    pub fn set_gap_cost(&mut self, gap_cost: f64) {
        self.gap_cost = gap_cost;
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
}

impl SequenceMeasure for SmithWaterman {
    fn raw_score(&self, s1: &str, s2: &str) -> Result<f64> {
        let s1: Vec<char> = s1.chars().collect();
        let s2: Vec<char> = s2.chars().collect();
        let mut dist = Matrix::new(s1.len() + 1, s2.len() + 1, 0.0_f64);
        let mut max_value = 0.0_f64;

        for (i, &ch1) in s1.iter().enumerate().map(|(i, ch)| (i + 1, ch)) {
            for (j, &ch2) in s2.iter().enumerate().map(|(j, ch)| (j + 1, ch)) {
                let matched = dist.get(i - 1, j - 1) + (self.sim_func)(ch1, ch2);
                let delete = dist.get(i - 1, j) - self.gap_cost;
                let insert = dist.get(i, j - 1) - self.gap_cost;
                let cell = matched.max(delete).max(insert).max(0.0);
                dist.set(i, j, cell);
                max_value = max_value.max(cell);
            }
        }

        Ok(max_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_delta {
        ($x:expr, $y:expr) => {
            assert_delta!($x, $y, 0.0001)
        };
        ($x:expr, $y:expr, $d:expr) => {
            if ($x - $y).abs() > $d {
                panic!("{} != {}", $x, $y);
            }
        };
    }

    fn plus_minus(matched: f64, mismatched: f64) -> impl Fn(char, char) -> f64 + Send + Sync {
        move |ch1, ch2| if ch1 == ch2 { matched } else { mismatched }
    }

    #[test]
    fn smith_waterman_defaults() {
        let sw = SmithWaterman::new();
        assert_eq!(1.0, sw.gap_cost());
        assert_delta!(2.0, sw.raw_score("cat", "hat").unwrap());
    }

    #[test]
    fn smith_waterman_raw_score() {
        assert_delta!(
            1.0,
            SmithWaterman::new()
                .with_gap_cost(2.2)
                .raw_score("dva", "deeve")
                .unwrap()
        );
        assert_delta!(
            2.0,
            SmithWaterman::new()
                .with_sim_func(plus_minus(2.0, -1.0))
                .raw_score("dva", "deeve")
                .unwrap()
        );
        assert_delta!(
            2.0,
            SmithWaterman::new()
                .with_sim_func(plus_minus(1.0, -1.0))
                .raw_score("GCATGCU", "GATTACA")
                .unwrap()
        );
        assert_delta!(
            6.5,
            SmithWaterman::new()
                .with_gap_cost(1.4)
                .with_sim_func(plus_minus(1.5, 0.5))
                .raw_score("GCATAGCU", "GATTACA")
                .unwrap()
        );
    }

    #[test]
    fn smith_waterman_empty() {
        let sw = SmithWaterman::new();
        assert_delta!(0.0, sw.raw_score("", "").unwrap());
        assert_delta!(0.0, sw.raw_score("cat", "").unwrap());
        assert_delta!(0.0, sw.raw_score("abc", "xyz").unwrap());
    }

    #[test]
    fn smith_waterman_setters() {
        let mut sw = SmithWaterman::new();
        sw.set_gap_cost(0.3);
        assert_eq!(0.3, sw.gap_cost());
        assert_delta!(2.4, sw.raw_score("dva", "deeva").unwrap());
        sw.set_gap_cost(0.7);
        assert_delta!(2.0, sw.raw_score("dva", "deeva").unwrap());

        let mut sw = SmithWaterman::new();
        sw.set_sim_func(plus_minus(2.0, -1.0));
        assert_delta!(4.0, sw.raw_score("dva", "deeva").unwrap());
    }
}
