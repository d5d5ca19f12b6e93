//! Token measures
//!
//! Token measures compare two bags of tokens, usually produced by one of the
//! [`tokenizer`](crate::tokenizer)s. Tokens are compared as strings; the set
//! overlap ratios in [`set_based`] are additionally available as generic free
//! functions over any `Eq + Hash` element type.
//!
//! | Measure | Kind |
//! |---------|------|
//! | [`TfIdf`] | cosine of tf-idf weight vectors |
//! | [`SoftTfIdf`] | tf-idf with approximate token matches |
//! | [`MongeElkan`] | mean of best inner similarities |
//! | [`GeneralizedJaccard`] | jaccard with approximate token matches |
//! | [`Jaccard`], [`Dice`], [`Cosine`], [`OverlapCoefficient`], [`Tversky`] | set overlap ratios |
//!
//! The hybrid measures ([`SoftTfIdf`], [`MongeElkan`], [`GeneralizedJaccard`])
//! take an inner [`SequenceMeasure`](crate::SequenceMeasure) comparing single
//! tokens.

use std::sync::Arc;

use crate::error::{Result, StringMatchError};
use crate::SequenceMeasure;

mod corpus;
pub mod generalized_jaccard;
pub mod monge_elkan;
pub mod set_based;
pub mod soft_tfidf;
pub mod tfidf;

pub use generalized_jaccard::GeneralizedJaccard;
pub use monge_elkan::MongeElkan;
pub use set_based::{Cosine, Dice, Jaccard, OverlapCoefficient, Tversky};
pub use soft_tfidf::SoftTfIdf;
pub use tfidf::TfIdf;

/// Inner similarity of the hybrid token measures
pub type InnerMeasure = Arc<dyn SequenceMeasure>;

/// A measure comparing two bags of tokens
///
/// ```
/// use stringmatching::token::{Jaccard, TokenMeasure};
///
/// assert_eq!(Ok(0.5), Jaccard.raw_score(&["data", "science"], &["data"]));
/// assert!(Jaccard.raw_score_opt(None::<&[&str]>, Some(&["data"][..])).is_err());
/// ```
pub trait TokenMeasure: Send + Sync {
    fn raw_score<S1, S2>(&self, bag1: &[S1], bag2: &[S2]) -> Result<f64>
    where
        S1: AsRef<str>,
        S2: AsRef<str>;

    /// Normalized score. For the measures in this module this is the raw
    /// score.
    fn sim_score<S1, S2>(&self, bag1: &[S1], bag2: &[S2]) -> Result<f64>
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        self.raw_score(bag1, bag2)
    }

    /// [`raw_score`](TokenMeasure::raw_score) for nullable inputs. Fails with
    /// [`StringMatchError::InvalidInput`] when either side is `None`.
    fn raw_score_opt<S1, S2>(&self, bag1: Option<&[S1]>, bag2: Option<&[S2]>) -> Result<f64>
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        match (bag1, bag2) {
            (None, _) => Err(StringMatchError::InvalidInput("First")),
            (_, None) => Err(StringMatchError::InvalidInput("Second")),
            (Some(bag1), Some(bag2)) => self.raw_score(bag1, bag2),
        }
    }
}

/// Bag equality on the string values, respecting order and multiplicity
pub(crate) fn exact_match<S1, S2>(bag1: &[S1], bag2: &[S2]) -> bool
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    bag1.len() == bag2.len()
        && bag1
            .iter()
            .zip(bag2)
            .all(|(tok1, tok2)| tok1.as_ref() == tok2.as_ref())
}

pub(crate) fn as_strs<S: AsRef<str>>(bag: &[S]) -> Vec<&str> {
    bag.iter().map(AsRef::as_ref).collect()
}
