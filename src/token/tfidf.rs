//! TF-IDF similarity
//!
//! Both bags are turned into vectors of tf-idf weights and compared with the
//! cosine similarity. The term frequency `tf` is the number of occurrences of a
//! token in its bag, the inverse document frequency is `corpus_size / df`.
//!
//! Without a corpus the two compared bags act as a corpus of two documents.
//! With a corpus, tokens which do not occur in it are ignored.

use tracing::{trace, warn};

use crate::error::Result;
use crate::token::corpus::{local_document_frequency, DocumentFrequency, TermFrequency};
use crate::token::{as_strs, exact_match, TokenMeasure};

/// TF-IDF measure
///
/// ```
/// use stringmatching::token::{TfIdf, TokenMeasure};
///
/// let tfidf = TfIdf::new();
/// let sim = tfidf.raw_score(&["a", "b", "a"], &["a"]).unwrap();
/// assert!((sim - 0.7071067811865475).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TfIdf {
    frequency: DocumentFrequency,
    dampen: bool,
}

impl TfIdf {
    pub fn new() -> Self {
        Self::default()
    }

    /// TF-IDF with document frequencies taken from `corpus`
    pub fn with_corpus(corpus: Vec<Vec<String>>) -> Self {
        TfIdf {
            frequency: DocumentFrequency::from_corpus(Some(corpus)),
            dampen: false,
        }
    }

    /// Use `ln(idf) * ln(tf + 1)` instead of `idf * tf` as token weight
    #[must_use]
    pub fn with_dampen(mut self, dampen: bool) -> Self {
        self.dampen = dampen;
        self
    }

    pub fn corpus_list(&self) -> Option<&[Vec<String>]> {
        self.frequency.documents()
    }

    /// Replaces the corpus and rebuilds the document frequencies. `None`
    /// switches back to using the compared bags as corpus.
    pub fn set_corpus_list(&mut self, corpus: Option<Vec<Vec<String>>>) {
        self.frequency = DocumentFrequency::from_corpus(corpus);
    }

    pub fn dampen(&self) -> bool {
        self.dampen
    }

    pub fn set_dampen(&mut self, dampen: bool) {
        self.dampen = dampen;
    }

    fn weight(&self, idf: f64, tf: usize) -> f64 {
        if tf == 0 {
            0.0
        } else if self.dampen {
            idf.ln() * (tf as f64 + 1.0).ln()
        } else {
            idf * tf as f64
        }
    }
}

impl TokenMeasure for TfIdf {
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

        let mut v_x_y = 0.0;
        let mut v_x_2 = 0.0;
        let mut v_y_2 = 0.0;
        let mut known_tokens = 0_usize;
        for token in tokens {
            let Some(df) = freq.df(token) else {
                continue;
            };
            known_tokens += 1;
            let idf = corpus_size / df as f64;
            let v_x = self.weight(idf, tf_x.get(token));
            let v_y = self.weight(idf, tf_y.get(token));
            v_x_y += v_x * v_y;
            v_x_2 += v_x * v_x;
            v_y_2 += v_y * v_y;
        }

        if known_tokens == 0 {
            warn!("no token of the compared bags occurs in the corpus");
        }
        trace!(known_tokens, dampen = self.dampen, "tf-idf weights accumulated");

        if v_x_y == 0.0 {
            return Ok(0.0);
        }
        Ok(v_x_y / (v_x_2.sqrt() * v_y_2.sqrt()))
    }
}
