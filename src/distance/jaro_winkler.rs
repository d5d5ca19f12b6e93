//! Jaro-Winkler similarity
//!
//! The Jaro-Winkler similarity extends the [`Jaro`] similarity to provide additional
//! sensitivity to matching prefixes. It introduces a scaling mechanism that boosts
//! the similarity score for strings with common prefixes.
//!
//! With a common prefix of `l` elements (at most 4) the similarity is
//!
//! ```text
//! jaro + l * prefix_weight * (1 - jaro)
//! ```
//!
//! The boost is only applied when the Jaro similarity exceeds the boost
//! threshold of `0.7`.
//!
//! [`Jaro`]: ../jaro/index.html

use crate::common::{NoScoreCutoff, SimilarityCutoff, WithScoreCutoff};
use crate::distance::jaro;
use crate::error::{Result, StringMatchError};
use crate::{NormalizedMeasure, SequenceMeasure};

const MAX_PREFIX: usize = 4;
const DEFAULT_PREFIX_WEIGHT: f64 = 0.1;
const MAX_PREFIX_WEIGHT: f64 = 0.25;
const DEFAULT_BOOST_THRESHOLD: f64 = 0.7;

fn common_prefix<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    s1.iter()
        .zip(s2)
        .take(MAX_PREFIX)
        .take_while(|(ch1, ch2)| *ch1 == *ch2)
        .count()
}

pub(crate) fn jaro_winkler_similarity<Elem1, Elem2>(
    s1: &[Elem1],
    s2: &[Elem2],
    prefix_weight: f64,
    boost_threshold: f64,
    score_cutoff: f64,
) -> Option<f64>
where
    Elem1: PartialEq<Elem2>,
{
    let prefix = common_prefix(s1, s2);

    // lowest Jaro similarity which can still reach score_cutoff after the boost
    let mut jaro_score_cutoff = score_cutoff;
    if jaro_score_cutoff > boost_threshold {
        let prefix_sim = prefix as f64 * prefix_weight;
        jaro_score_cutoff = if prefix_sim >= 1.0 {
            boost_threshold
        } else {
            boost_threshold.max((prefix_sim - jaro_score_cutoff) / (prefix_sim - 1.0))
        }
    }

    let mut sim = jaro::jaro_similarity(s1, s2, jaro_score_cutoff)?;
    if sim > boost_threshold {
        sim += prefix as f64 * prefix_weight * (1.0 - sim);
    }

    (sim >= score_cutoff).then_some(sim)
}

/// Optional arguments of the Jaro-Winkler free functions
///
/// # Example
/// ```
/// use stringmatching::distance::jaro_winkler::{self, Args};
///
/// let args = Args::default().prefix_weight(0.15);
/// let sim = jaro_winkler::similarity_with_args("MARTHA".chars(), "MARHTA".chars(), &args);
/// assert!((sim - 0.9694444444444444).abs() < 1e-12);
/// ```
#[must_use]
#[derive(Copy, Clone, Debug)]
pub struct Args<CutoffType> {
    prefix_weight: f64,
    boost_threshold: f64,
    score_cutoff: CutoffType,
}

impl Default for Args<NoScoreCutoff> {
    fn default() -> Args<NoScoreCutoff> {
        Args {
            prefix_weight: DEFAULT_PREFIX_WEIGHT,
            boost_threshold: DEFAULT_BOOST_THRESHOLD,
            score_cutoff: NoScoreCutoff,
        }
    }
}

impl<CutoffType> Args<CutoffType> {
    /// Clamped to [0.0, 0.25], so the similarity never exceeds 1.0
    pub fn prefix_weight(mut self, prefix_weight: f64) -> Self {
        self.prefix_weight = prefix_weight.max(0.0).min(MAX_PREFIX_WEIGHT);
        self
    }

    /// Clamped to [0.0, 1.0]
    pub fn boost_threshold(mut self, boost_threshold: f64) -> Self {
        self.boost_threshold = boost_threshold.max(0.0).min(1.0);
        self
    }

    pub fn score_cutoff(self, score_cutoff: f64) -> Args<WithScoreCutoff<f64>> {
        Args {
            prefix_weight: self.prefix_weight,
            boost_threshold: self.boost_threshold,
            score_cutoff: WithScoreCutoff(score_cutoff),
        }
    }
}

/// Jaro-Winkler similarity in the range [0.0, 1.0]
///
/// # Examples
///
/// ```
/// use stringmatching::distance::jaro_winkler;
///
/// let sim = jaro_winkler::similarity("MARTHA".chars(), "MARHTA".chars());
/// assert!((sim - 0.9611111111111111).abs() < 1e-12);
/// ```
pub fn similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    similarity_with_args(s1, s2, &Args::default())
}

pub fn similarity_with_args<Iter1, Iter2, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<CutoffType>,
) -> CutoffType::Output
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
    CutoffType: SimilarityCutoff<f64>,
{
    let s1: Vec<Iter1::Item> = s1.into_iter().collect();
    let s2: Vec<Iter2::Item> = s2.into_iter().collect();
    let score_cutoff = args.score_cutoff.cutoff().unwrap_or(0.0);
    let sim = jaro_winkler_similarity(
        &s1,
        &s2,
        args.prefix_weight,
        args.boost_threshold,
        score_cutoff,
    )
    .unwrap_or(0.0);
    args.score_cutoff.score(sim)
}

/// Jaro-Winkler distance in the range [0.0, 1.0]
///
/// This is calculated as `1.0 - `[`similarity`].
pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    1.0 - similarity(s1, s2)
}

/// Jaro-Winkler similarity measure over the characters of two strings
///
/// ```
/// use stringmatching::distance::JaroWinkler;
/// use stringmatching::SequenceMeasure;
///
/// let jw = JaroWinkler::new();
/// assert_eq!(0.1, jw.prefix_weight());
/// assert!((jw.raw_score("DWAYNE", "DUANE").unwrap() - 0.84).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct JaroWinkler {
    prefix_weight: f64,
    boost_threshold: f64,
}

impl Default for JaroWinkler {
    fn default() -> Self {
        JaroWinkler {
            prefix_weight: DEFAULT_PREFIX_WEIGHT,
            boost_threshold: DEFAULT_BOOST_THRESHOLD,
        }
    }
}

impl JaroWinkler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jaro-Winkler with a custom prefix weight
    ///
    /// The prefix weight has to be in the range [0.0, 0.25], otherwise the
    /// similarity could exceed `1.0`.
    pub fn with_prefix_weight(prefix_weight: f64) -> Result<Self> {
        let mut jw = Self::default();
        jw.set_prefix_weight(prefix_weight)?;
        Ok(jw)
    }

    pub fn prefix_weight(&self) -> f64 {
        self.prefix_weight
    }

    pub fn set_prefix_weight(&mut self, prefix_weight: f64) -> Result<()> {
        if !(0.0..=MAX_PREFIX_WEIGHT).contains(&prefix_weight) {
            return Err(StringMatchError::invalid_parameter(
                "prefix_weight",
                "must be in the range [0.0, 0.25]",
            ));
        }
        self.prefix_weight = prefix_weight;
        Ok(())
    }

    pub fn boost_threshold(&self) -> f64 {
        self.boost_threshold
    }

    pub fn set_boost_threshold(&mut self, boost_threshold: f64) -> Result<()> {
        if !(0.0..=1.0).contains(&boost_threshold) {
            return Err(StringMatchError::invalid_parameter(
                "boost_threshold",
                "must be in the range [0.0, 1.0]",
            ));
        }
        self.boost_threshold = boost_threshold;
        Ok(())
    }
}

impl SequenceMeasure for JaroWinkler {
    fn raw_score(&self, s1: &str, s2: &str) -> Result<f64> {
        let args = Args::default()
            .prefix_weight(self.prefix_weight)
            .boost_threshold(self.boost_threshold);
        Ok(similarity_with_args(s1.chars(), s2.chars(), &args))
    }
}

impl NormalizedMeasure for JaroWinkler {
    fn sim_score(&self, s1: &str, s2: &str) -> Result<f64> {
        self.raw_score(s1, s2)
    }
}
