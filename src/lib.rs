//! `stringmatching` is a library of string similarity measures and tokenizers
//! for approximate matching, record linkage and deduplication.
//!
//! ## Key Features
//!
//! - **Sequence measures**: edit distance style algorithms on raw strings.
//!   These range from the Levenshtein and Hamming distance over global and
//!   local alignment scores (Needleman-Wunsch, Smith-Waterman, affine gaps) to
//!   the phonetic Editex distance and the Jaro / Jaro-Winkler similarity.
//! - **Token measures**: set and information retrieval style measures on
//!   tokenized strings, like TF-IDF, Soft TF-IDF, Monge-Elkan and the
//!   generalized Jaccard measure, as well as the classic set overlap ratios.
//! - **Tokenizers**: q-gram, delimiter, whitespace, alphabetic and
//!   alphanumeric tokenizers producing the token bags consumed by the token
//!   measures.
//!
//! ## Usage
//!
//! ```rust
//! use stringmatching::distance::{levenshtein, Affine, Jaro};
//! use stringmatching::token::{MongeElkan, TfIdf, TokenMeasure};
//! use stringmatching::tokenizer::{Tokenizer, WhitespaceTokenizer};
//! use stringmatching::SequenceMeasure;
//!
//! // The generic free functions operate on any sequence of comparable elements
//! assert_eq!(3, levenshtein::distance("example".chars(), "samples".chars()));
//!
//! // Configurable measures are structs implementing `SequenceMeasure`
//! let affine = Affine::default();
//! assert_eq!(1.5, affine.raw_score("dva", "deeva").unwrap());
//!
//! // Token measures work on the output of a tokenizer
//! let tok = WhitespaceTokenizer::new();
//! let bag1 = tok.tokenize("Comput. Sci. and Eng. Dept.");
//! let bag2 = tok.tokenize("Computer Science Dept.");
//! let tfidf = TfIdf::new();
//! let score = tfidf.raw_score(&bag1, &bag2).unwrap();
//! assert!(score > 0.0 && score < 1.0);
//!
//! // Any sequence measure can be used as the inner similarity of a hybrid measure
//! let me = MongeElkan::new().with_sim_func(Jaro);
//! assert_eq!(1.0, me.raw_score(&["a"], &["a"]).unwrap());
//! ```
//!
//! All measures are `Send + Sync` and hold no per call state, so a single
//! instance can be shared by any number of threads. Reconfiguration goes
//! through `&mut self` setters.

#![forbid(unsafe_code)]
#![allow(
    // these casts are sometimes needed. They restrict the length of input iterators
    // but there isn't really any way around this except for always working with
    // 128 bit types
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss,
    // things are often more readable this way
    clippy::module_name_repetitions,
    // not practical
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::too_many_lines,
    // noisy
    clippy::missing_errors_doc,
)]

pub mod common;
pub(crate) mod details;
pub mod distance;
pub mod error;
pub mod token;
pub mod tokenizer;

pub use error::{Result, StringMatchError};

/// Hash value in the range `i64::MIN` - `u64::MAX`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Hash {
    UNSIGNED(u64),
    SIGNED(i64),
}

/// trait used to map between element types and unique hash values
///
/// `stringmatching` already implements this trait for most primitive types.
/// For custom types this trait can be used to support the internal hashmaps,
/// e.g. the character multisets of the bag distance.
/// Hashes have to be a unique value in the range `i64::MIN` - `u64::MAX`.
/// If two distinct objects produce the same hash, they will be assumed to be similar.
///
/// # Example
/// ```
/// use stringmatching::distance::bag;
/// use stringmatching::{Hash, HashableChar};
///
/// #[derive(PartialEq, Clone, Copy)]
/// struct MyType {
///     val: u64,
/// }
///
/// impl HashableChar for MyType {
///     fn hash_char(&self) -> Hash {
///         Hash::UNSIGNED(self.val)
///     }
/// }
///
/// assert_eq!(
///     1,
///     bag::distance(
///         [MyType { val: 1 }, MyType { val: 1 }],
///         [MyType { val: 2 }, MyType { val: 1 }],
///     )
/// );
/// ```
pub trait HashableChar {
    fn hash_char(&self) -> Hash;
}

macro_rules! impl_hashable_char {
    ($base_type:ty, $kind:tt $(, $t:ty)*) => {
        impl HashableChar for $base_type {
            #[inline]
            fn hash_char(&self) -> Hash
            {
                Hash::$kind(*self $(as $t)*)
            }
        }

        impl HashableChar for &$base_type {
            #[inline]
            fn hash_char(&self) -> Hash
            {
                Hash::$kind(**self $(as $t)*)
            }
        }
    }
}

impl_hashable_char!(char, UNSIGNED, u32, u64);
impl_hashable_char!(i8, SIGNED, i64);
impl_hashable_char!(i16, SIGNED, i64);
impl_hashable_char!(i32, SIGNED, i64);
impl_hashable_char!(i64, SIGNED, i64);
impl_hashable_char!(u8, UNSIGNED, u64);
impl_hashable_char!(u16, UNSIGNED, u64);
impl_hashable_char!(u32, UNSIGNED, u64);
impl_hashable_char!(u64, UNSIGNED, u64);

/// A measure comparing two strings.
///
/// Implemented by every sequence measure in [`distance`] and by any closure
/// `Fn(&str, &str) -> f64`, so both can be injected as the inner similarity
/// function of the hybrid token measures.
///
/// ```
/// use stringmatching::distance::Levenshtein;
/// use stringmatching::SequenceMeasure;
///
/// let exact = |s1: &str, s2: &str| f64::from(u8::from(s1 == s2));
/// assert_eq!(1.0, exact.raw_score("a", "a").unwrap());
/// assert_eq!(3.0, Levenshtein.raw_score("example", "samples").unwrap());
/// ```
pub trait SequenceMeasure: Send + Sync {
    /// Raw score of the measure, a distance or a similarity depending on the measure
    fn raw_score(&self, s1: &str, s2: &str) -> Result<f64>;

    /// [`raw_score`](SequenceMeasure::raw_score) for nullable inputs, e.g. record
    /// fields with missing values. Fails with [`StringMatchError::InvalidInput`]
    /// when either side is `None`.
    fn raw_score_opt(&self, s1: Option<&str>, s2: Option<&str>) -> Result<f64> {
        let (s1, s2) = error::require_pair(s1, s2)?;
        self.raw_score(s1, s2)
    }
}

/// A sequence measure with a normalized similarity in the range [0.0, 1.0]
pub trait NormalizedMeasure: SequenceMeasure {
    fn sim_score(&self, s1: &str, s2: &str) -> Result<f64>;

    /// [`sim_score`](NormalizedMeasure::sim_score) for nullable inputs
    fn sim_score_opt(&self, s1: Option<&str>, s2: Option<&str>) -> Result<f64> {
        let (s1, s2) = error::require_pair(s1, s2)?;
        self.sim_score(s1, s2)
    }
}

impl<F> SequenceMeasure for F
where
    F: Fn(&str, &str) -> f64 + Send + Sync,
{
    fn raw_score(&self, s1: &str, s2: &str) -> Result<f64> {
        Ok(self(s1, s2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{Hamming, Jaro, Levenshtein};

    #[test]
    fn closures_are_sequence_measures() {
        let len_diff = |s1: &str, s2: &str| (s1.len() as f64 - s2.len() as f64).abs();
        assert_eq!(Ok(2.0), len_diff.raw_score("abc", "a"));
        assert_eq!(Ok(2.0), len_diff.raw_score_opt(Some("abc"), Some("a")));
    }

    #[test]
    fn nullable_inputs() {
        assert_eq!(
            Err(StringMatchError::InvalidInput("First")),
            Levenshtein.raw_score_opt(None, Some("b"))
        );
        assert_eq!(
            Err(StringMatchError::InvalidInput("Second")),
            Jaro.sim_score_opt(Some("MARTHA"), None)
        );
        assert_eq!(
            Err(StringMatchError::InvalidInput("First")),
            Hamming.raw_score_opt(None, None)
        );
        assert_eq!(Ok(1.0), Levenshtein.raw_score_opt(Some("a"), Some("")));
    }

    #[test]
    fn measures_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<distance::Affine>();
        assert_send_sync::<distance::Editex>();
        assert_send_sync::<token::TfIdf>();
        assert_send_sync::<token::SoftTfIdf>();
        assert_send_sync::<token::MongeElkan>();
        assert_send_sync::<token::GeneralizedJaccard>();
    }
}
