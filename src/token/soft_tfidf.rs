//! Soft TF-IDF similarity
//!
//! A variant of [`TfIdf`](crate::token::TfIdf) which also credits tokens that
//! are only approximately equal. Every token of the first bag is paired with
//! the token of the second bag it is most similar to, provided the inner
//! similarity exceeds `threshold`. Several tokens of the first bag may pair
//! with the same token of the second bag, in which case the score can exceed
//! `1.0`.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::distance::Jaro;
use crate::error::Result;
use crate::token::corpus::{local_document_frequency, DocumentFrequency, TermFrequency};
use crate::token::{as_strs, exact_match, InnerMeasure, TokenMeasure};
use crate::SequenceMeasure;

struct TokenMatch<'a> {
    other: &'a str,
    score: f64,
}

/// Soft TF-IDF measure
///
/// ```
/// use stringmatching::token::{SoftTfIdf, TokenMeasure};
///
/// let soft_tfidf = SoftTfIdf::new();
/// let sim = soft_tfidf.raw_score(&["ar", "bfff", "ab"], &["abcd"]).unwrap();
/// assert!((sim - 0.8179128813519699).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct SoftTfIdf {
    frequency: DocumentFrequency,
    sim_func: InnerMeasure,
    threshold: f64,
}

impl Default for SoftTfIdf {
    fn default() -> Self {
        SoftTfIdf {
            frequency: DocumentFrequency::SelfCorpus,
            sim_func: Arc::new(Jaro),
            threshold: 0.5,
        }
    }
}

impl fmt::Debug for SoftTfIdf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SoftTfIdf")
            .field("frequency", &self.frequency)
            .field("threshold", &self.threshold)
            .finish_non_exhaustive()
    }
}

impl SoftTfIdf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Soft TF-IDF with document frequencies taken from `corpus`
    pub fn with_corpus(corpus: Vec<Vec<String>>) -> Self {
        SoftTfIdf {
            frequency: DocumentFrequency::from_corpus(Some(corpus)),
            ..Self::default()
        }
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

    pub fn corpus_list(&self) -> Option<&[Vec<String>]> {
        self.frequency.documents()
    }

    /// Replaces the corpus and rebuilds the document frequencies
    pub fn set_corpus_list(&mut self, corpus: Option<Vec<Vec<String>>>) {
        self.frequency = DocumentFrequency::from_corpus(corpus);
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

    /// best match above the threshold for every token of the first bag
    fn similarity_map<'a>(
        &self,
        tf_x: &TermFrequency<'a>,
        tf_y: &TermFrequency<'a>,
    ) -> Result<FxHashMap<&'a str, TokenMatch<'a>>> {
        let mut matches = FxHashMap::default();
        for &term_x in &tf_x.order {
            let mut max_score = 0.0;
            for &term_y in &tf_y.order {
                let score = self.sim_func.raw_score(term_x, term_y)?;
                if score > self.threshold && score > max_score {
                    matches.insert(term_x, TokenMatch { other: term_y, score });
                    max_score = score;
                }
            }
        }
        Ok(matches)
    }
}

impl TokenMeasure for SoftTfIdf {
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

        let bag1 = as_strs(bag1);
        let bag2 = as_strs(bag2);
        let tf_x = TermFrequency::new(&bag1);
        let tf_y = TermFrequency::new(&bag2);
        let (tokens, local_df) = local_document_frequency(&tf_x, &tf_y);
        let freq = self.frequency.resolve(&local_df);
        let corpus_size = freq.size() as f64;

        let matches = self.similarity_map(&tf_x, &tf_y)?;
        trace!(matched_tokens = matches.len(), "soft tf-idf token matches");

        let mut result = 0.0;
        let mut v_x_2 = 0.0;
        let mut v_y_2 = 0.0;
        for token in tokens {
            let Some(df) = freq.df(token) else {
                continue;
            };

            if let Some(token_match) = matches.get(token) {
                let idf_first = corpus_size / freq.df(token).unwrap_or(1) as f64;
                let idf_second = corpus_size / freq.df(token_match.other).unwrap_or(1) as f64;
                let v_x = idf_first * tf_x.get(token) as f64;
                let v_y = idf_second * tf_y.get(token_match.other) as f64;
                result += v_x * v_y * token_match.score;
            }

            let idf = corpus_size / df as f64;
            let v_x = idf * tf_x.get(token) as f64;
            let v_y = idf * tf_y.get(token) as f64;
            v_x_2 += v_x * v_x;
            v_y_2 += v_y * v_y;
        }

        if v_x_2 == 0.0 || v_y_2 == 0.0 {
            return Ok(0.0);
        }
        Ok(result / (v_x_2.sqrt() * v_y_2.sqrt()))
    }
}
