//! Generalized Jaccard similarity
//!
//! Extends the [`Jaccard`](crate::token::Jaccard) similarity to tokens which
//! are only approximately equal. Both bags are reduced to sets. Every pair of
//! tokens whose inner similarity exceeds `threshold` is a candidate match, and
//! candidates are accepted greedily from the highest score down as long as
//! neither of their tokens is already matched. The result is
//!
//! ```text
//! sum(scores of accepted matches) / (|A| + |B| - number of accepted matches)
//! ```
//!
//! The inner measure has to return scores in the range [0.0, 1.0].

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use crate::distance::Jaro;
use crate::error::{Result, StringMatchError};
use crate::token::{as_strs, exact_match, InnerMeasure, TokenMeasure};
use crate::tokenizer::dedup;
use crate::SequenceMeasure;

struct Candidate {
    score: f64,
    idx1: usize,
    idx2: usize,
}

/// Generalized Jaccard measure
///
/// ```
/// use stringmatching::token::{GeneralizedJaccard, TokenMeasure};
///
/// let gj = GeneralizedJaccard::new();
/// assert_eq!(Ok(0.5), gj.raw_score(&["data", "science"], &["data"]));
/// ```
#[derive(Clone)]
pub struct GeneralizedJaccard {
    sim_func: InnerMeasure,
    threshold: f64,
}

impl Default for GeneralizedJaccard {
    fn default() -> Self {
        GeneralizedJaccard {
            sim_func: Arc::new(Jaro),
            threshold: 0.5,
        }
    }
}

impl fmt::Debug for GeneralizedJaccard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneralizedJaccard")
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl GeneralizedJaccard {
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

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
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

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: f64) {
        self.threshold = threshold;
    }

    fn candidates(&self, set1: &[&str], set2: &[&str]) -> Result<Vec<Candidate>> {
        let mut candidates = Vec::new();
        for (idx1, tok1) in set1.iter().enumerate() {
            for (idx2, tok2) in set2.iter().enumerate() {
                let score = self.sim_func.raw_score(tok1, tok2)?;
                if !(0.0..=1.0).contains(&score) {
                    return Err(StringMatchError::InvalidSimilarityFunction { score });
                }
                if score > self.threshold {
                    candidates.push(Candidate { score, idx1, idx2 });
                }
            }
        }
        Ok(candidates)
    }
}

impl TokenMeasure for GeneralizedJaccard {
    fn raw_score<S1, S2>(&self, bag1: &[S1], bag2: &[S2]) -> Result<f64>
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        if exact_match(bag1, bag2) {
            return Ok(1.0);
        }
        if bag1.is_empty() || bag2.is_empty() {
            return Ok(0.0);
        }

        let set1 = dedup(as_strs(bag1));
        let set2 = dedup(as_strs(bag2));

        let mut candidates = self.candidates(&set1, &set2)?;
        // stable sort, equal scores keep their discovery order
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        let mut used1 = vec![false; set1.len()];
        let mut used2 = vec![false; set2.len()];
        let mut sim_score = 0.0;
        let mut num_matches = 0_usize;
        for candidate in &candidates {
            if used1[candidate.idx1] || used2[candidate.idx2] {
                continue;
            }
            used1[candidate.idx1] = true;
            used2[candidate.idx2] = true;
            sim_score += candidate.score;
            num_matches += 1;
        }
        trace!(
            candidates = candidates.len(),
            num_matches,
            "generalized jaccard matching"
        );

        Ok(sim_score / (set1.len() + set2.len() - num_matches) as f64)
    }
}
