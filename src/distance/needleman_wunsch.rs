//! Needleman-Wunsch alignment
//!
//! Global alignment score of two strings. Every character pair contributes
//! the value of the similarity function and every gap position costs
//! `gap_cost`. The score is not normalized and may be negative.

use std::fmt;
use std::sync::Arc;

use crate::details::matrix::Matrix;
use crate::distance::{default_char_sim, CharSimFn};
use crate::error::Result;
use crate::SequenceMeasure;

/// Needleman-Wunsch measure
///
/// ```
/// use stringmatching::distance::NeedlemanWunsch;
/// use stringmatching::SequenceMeasure;
///
/// assert_eq!(1.0, NeedlemanWunsch::new().raw_score("dva", "deeva").unwrap());
/// assert_eq!(-3.0, NeedlemanWunsch::new().raw_score("", "abc").unwrap());
/// ```
#[derive(Clone)]
pub struct NeedlemanWunsch {
    gap_cost: f64,
    sim_func: CharSimFn,
}

impl Default for NeedlemanWunsch {
    fn default() -> Self {
        NeedlemanWunsch {
            gap_cost: 1.0,
            sim_func: default_char_sim(),
        }
    }
}

impl fmt::Debug for NeedlemanWunsch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NeedlemanWunsch")
            .field("gap_cost", &self.gap_cost)
            .finish_non_exhaustive()
    }
}

impl NeedlemanWunsch {
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

impl SequenceMeasure for NeedlemanWunsch {
    fn raw_score(&self, s1: &str, s2: &str) -> Result<f64> {
        let s1: Vec<char> = s1.chars().collect();
        let s2: Vec<char> = s2.chars().collect();
        let mut dist = Matrix::new(s1.len() + 1, s2.len() + 1, 0.0_f64);

        for i in 0..=s1.len() {
            dist.set(i, 0, -(i as f64 * self.gap_cost));
        }
        for j in 0..=s2.len() {
            dist.set(0, j, -(j as f64 * self.gap_cost));
        }

        for (i, &ch1) in s1.iter().enumerate().map(|(i, ch)| (i + 1, ch)) {
            for (j, &ch2) in s2.iter().enumerate().map(|(j, ch)| (j + 1, ch)) {
                let matched = dist.get(i - 1, j - 1) + (self.sim_func)(ch1, ch2);
                let delete = dist.get(i - 1, j) - self.gap_cost;
                let insert = dist.get(i, j - 1) - self.gap_cost;
                dist.set(i, j, matched.max(delete).max(insert));
            }
        }

        Ok(dist.last())
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
    fn needleman_wunsch_defaults() {
        let nw = NeedlemanWunsch::new();
        assert_eq!(1.0, nw.gap_cost());
        assert_delta!(1.0, nw.raw_score("dva", "deeva").unwrap());
        assert_delta!(2.0, nw.raw_score("cat", "hat").unwrap());
    }

    #[test]
    fn needleman_wunsch_raw_score() {
        assert_delta!(
            2.0,
            NeedlemanWunsch::new()
                .with_gap_cost(0.0)
                .raw_score("dva", "deeve")
                .unwrap()
        );
        assert_delta!(
            1.0,
            NeedlemanWunsch::new()
                .with_sim_func(plus_minus(2.0, -1.0))
                .raw_score("dva", "deeve")
                .unwrap()
        );
        assert_delta!(
            2.5,
            NeedlemanWunsch::new()
                .with_gap_cost(0.5)
                .with_sim_func(plus_minus(1.0, -1.0))
                .raw_score("GCATGCUA", "GATTACA")
                .unwrap()
        );
    }

    #[test]
    fn needleman_wunsch_empty() {
        let nw = NeedlemanWunsch::new();
        assert_delta!(0.0, nw.raw_score("", "").unwrap());
        assert_delta!(-1.0, nw.raw_score("a", "").unwrap());
        assert_delta!(-3.0, nw.raw_score("", "abc").unwrap());
    }

    #[test]
    fn needleman_wunsch_setters() {
        let mut nw = NeedlemanWunsch::new();
        nw.set_gap_cost(0.5);
        assert_eq!(0.5, nw.gap_cost());
        assert_delta!(2.0, nw.raw_score("dva", "deeva").unwrap());
        nw.set_gap_cost(0.7);
        assert_delta!(1.6, nw.raw_score("dva", "deeva").unwrap());

        let mut nw = NeedlemanWunsch::new();
        nw.set_sim_func(plus_minus(2.0, -1.0));
        assert_delta!(4.0, nw.raw_score("dva", "deeva").unwrap());
        assert_eq!(-1.0, (nw.sim_func())('a', 'b'));
    }
}
