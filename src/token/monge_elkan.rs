//! Monge-Elkan similarity
//!
//! For every token of the first bag the best inner similarity against all
//! tokens of the second bag is taken, and the result is the mean of these
//! maxima. The measure is asymmetric: swapping the bags generally changes the
//! score. The result is only normalized if the inner measure is.

use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::distance::JaroWinkler;
use crate::error::Result;
use crate::token::{exact_match, InnerMeasure, TokenMeasure};
use crate::SequenceMeasure;

/// Monge-Elkan measure
///
/// ```
/// use stringmatching::token::{MongeElkan, TokenMeasure};
///
/// let me = MongeElkan::new();
/// assert_eq!(Ok(0.88), me.raw_score(&["Niall"], &["Njall"]));
/// ```
#[derive(Clone)]
pub struct MongeElkan {
    sim_func: InnerMeasure,
}

impl Default for MongeElkan {
    fn default() -> Self {
        MongeElkan {
            sim_func: Arc::new(JaroWinkler::new()),
        }
    }
}

impl fmt::Debug for MongeElkan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MongeElkan").finish_non_exhaustive()
    }
}

impl MongeElkan {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sim_func<M>(mut self, sim_func: M) -> Self
    where
        M: SequenceMeasure + 'static,
    {
        self.sim_func = Arc::new(sim_func);
        self
    }

    pub fn sim_func(&self) -> &InnerMeasure {
        &self.sim_func
    }

    pub fn set_sim_func<M>(&mut self, sim_func: M)
    where
        M: SequenceMeasure + 'static,
    {
        self.sim_func = Arc::new(sim_func);
    }
}

impl TokenMeasure for MongeElkan {
    fn raw_score<S1, S2>(&self, bag1: &[S1], bag2: &[S2]) -> Result<f64>
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        if exact_match(bag1, bag2) {
            trace!("monge-elkan exact match");
            return Ok(1.0);
        }
        if bag1.is_empty() || bag2.is_empty() {
            return Ok(0.0);
        }

        let mut sum_of_maxes = 0.0;
        for tok1 in bag1 {
            let mut max_sim = f64::NEG_INFINITY;
            for tok2 in bag2 {
                max_sim = max_sim.max(self.sim_func.raw_score(tok1.as_ref(), tok2.as_ref())?);
            }
            sum_of_maxes += max_sim;
        }

        Ok(sum_of_maxes / bag1.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{Affine, Jaro, NeedlemanWunsch};

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

    const AFFILIATION1: [&str; 10] = [
        "Comput.",
        "Sci.",
        "and",
        "Eng.",
        "Dept.,",
        "University",
        "of",
        "California,",
        "San",
        "Diego",
    ];
    const AFFILIATION2: [&str; 8] = [
        "Department",
        "of",
        "Computer",
        "Science,",
        "Univ.",
        "Calif.,",
        "San",
        "Diego",
    ];

    #[test]
    fn monge_elkan_valid_input() {
        let me = MongeElkan::new();
        assert_eq!(Ok(1.0), me.raw_score(&[""], &[""]));
        assert_eq!(Ok(0.0), me.raw_score(&[""], &["a"]));
        assert_eq!(Ok(1.0), me.raw_score(&["a"], &["a"]));
        assert_delta!(0.8049999999999999, me.raw_score(&["Niall"], &["Neal"]).unwrap());
        assert_delta!(0.88, me.raw_score(&["Niall"], &["Njall"]).unwrap());
        assert_delta!(0.8266666666666667, me.raw_score(&["Niall"], &["Niel"]).unwrap());
        assert_delta!(0.7866666666666667, me.raw_score(&["Niall"], &["Nigel"]).unwrap());
        assert_delta!(0.8271114718614718, me.raw_score(&AFFILIATION1, &AFFILIATION2).unwrap());
        assert_eq!(Ok(0.0), me.raw_score(&[] as &[&str], &["Nigel"]));
    }

    #[test]
    fn monge_elkan_alignment_inner_measures() {
        let me = MongeElkan::new().with_sim_func(NeedlemanWunsch::new());
        assert_delta!(2.0, me.raw_score(&AFFILIATION1, &AFFILIATION2).unwrap());

        let me = MongeElkan::new().with_sim_func(Affine::new());
        assert_delta!(2.25, me.raw_score(&AFFILIATION1, &AFFILIATION2).unwrap());
    }

    #[test]
    fn monge_elkan_set_sim_func() {
        let mut me = MongeElkan::new().with_sim_func(Jaro);
        assert_delta!(0.7833333333333333, me.raw_score(&["Niall"], &["Neal"]).unwrap());

        // boosting every Jaro score
        let mut jw = JaroWinkler::new();
        jw.set_boost_threshold(0.0).unwrap();
        me.set_sim_func(jw);
        assert_delta!(0.8364448051948052, me.raw_score(&AFFILIATION1, &AFFILIATION2).unwrap());

        me.set_sim_func(|s1: &str, s2: &str| if s1 == s2 { 1.0 } else { 0.0 });
        assert_delta!(0.5, me.raw_score(&["a", "b"], &["a"]).unwrap());
        assert_eq!(Ok(1.0), me.sim_func().raw_score("x", "x"));
    }

    #[test]
    fn monge_elkan_is_asymmetric() {
        let me = MongeElkan::new().with_sim_func(Jaro);
        assert_delta!(0.5, me.raw_score(&["a", "b"], &["a"]).unwrap());
        assert_delta!(1.0, me.raw_score(&["a"], &["a", "b"]).unwrap());
    }
}
