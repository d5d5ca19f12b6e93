//! Bag distance
//!
//! The bag distance treats both sequences as multisets of elements and
//! returns the size of the larger of the two multiset differences. It is a
//! cheap lower bound of the Levenshtein distance and can be used as a filter
//! before running the full edit distance.

use crate::common::{Args, DistanceCutoff, SimilarityCutoff};
use crate::details::common::count_chars;
use crate::error::Result;
use crate::{HashableChar, NormalizedMeasure, SequenceMeasure};
use std::cmp::max;

fn _distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> (usize, usize)
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: HashableChar,
    Iter2::Item: HashableChar,
{
    let mut bag1 = count_chars(s1);
    let len1: usize = bag1.values().sum();
    let mut len2 = 0;
    let mut only_in_s2 = 0;

    for ch in s2 {
        len2 += 1;
        match bag1.get_mut(&ch.hash_char()) {
            Some(count) if *count > 0 => *count -= 1,
            _ => only_in_s2 += 1,
        }
    }
    let only_in_s1: usize = bag1.values().sum();

    (max(only_in_s1, only_in_s2), max(len1, len2))
}

/// Bag distance
///
/// # Examples
///
/// ```
/// use stringmatching::distance::bag;
///
/// assert_eq!(1, bag::distance("cat".chars(), "hat".chars()));
/// assert_eq!(4, bag::distance("".chars(), "abcd".chars()));
/// ```
pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: HashableChar,
    Iter2::Item: HashableChar,
{
    distance_with_args(s1, s2, &Args::default())
}

pub fn distance_with_args<Iter1, Iter2, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<usize, CutoffType>,
) -> CutoffType::Output
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: HashableChar,
    Iter2::Item: HashableChar,
    CutoffType: DistanceCutoff<usize>,
{
    let (dist, _) = _distance(s1, s2);
    args.score_cutoff.score(dist)
}

/// Normalized bag similarity in the range [0.0, 1.0]
///
/// This is calculated as `1.0 - `[`distance`]` / max(len1, len2)`. Two empty
/// sequences have a similarity of `1.0`.
pub fn normalized_similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: HashableChar,
    Iter2::Item: HashableChar,
{
    normalized_similarity_with_args(s1, s2, &Args::default())
}

pub fn normalized_similarity_with_args<Iter1, Iter2, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<f64, CutoffType>,
) -> CutoffType::Output
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: HashableChar,
    Iter2::Item: HashableChar,
    CutoffType: SimilarityCutoff<f64>,
{
    let (dist, maximum) = _distance(s1, s2);
    if maximum == 0 {
        return args.score_cutoff.score(1.0);
    }
    args.score_cutoff
        .score(1.0 - dist as f64 / maximum as f64)
}

/// Bag distance measure over the characters of two strings
///
/// ```
/// use stringmatching::distance::BagDistance;
/// use stringmatching::{NormalizedMeasure, SequenceMeasure};
///
/// assert_eq!(Ok(1.0), BagDistance.raw_score("cat", "hat"));
/// assert_eq!(Ok(0.0), BagDistance.sim_score("", "abc"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BagDistance;

impl SequenceMeasure for BagDistance {
    fn raw_score(&self, s1: &str, s2: &str) -> Result<f64> {
        if s1 == s2 {
            return Ok(0.0);
        }
        Ok(distance(s1.chars(), s2.chars()) as f64)
    }
}

impl NormalizedMeasure for BagDistance {
    fn sim_score(&self, s1: &str, s2: &str) -> Result<f64> {
        if s1 == s2 {
            return Ok(1.0);
        }
        Ok(normalized_similarity(s1.chars(), s2.chars()))
    }
}
