//! Levenshtein distance
//!
//! The Levenshtein distance measures the minimum number of insertions, deletions,
//! and substitutions required to change one sequence into the other. All three
//! operations have a cost of 1.
//!
//! The distance is computed with a single row Wagner-Fischer matrix after the
//! common prefix and suffix of both sequences are removed. With a `score_cutoff`
//! the calculation exits as soon as every cell of the current row exceeds the
//! cutoff.

use crate::common::{Args, DistanceCutoff, SimilarityCutoff};
use crate::details::common::{norm_sim_to_norm_dist, remove_common_affix};
use crate::error::Result;
use crate::{NormalizedMeasure, SequenceMeasure};
use std::cmp::{max, min};

fn wagner_fischer<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2], score_cutoff: usize) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    let mut cache: Vec<usize> = (0..=s1.len()).collect();

    for (j, ch2) in s2.iter().enumerate() {
        let mut diag = cache[0];
        cache[0] = j + 1;
        let mut row_min = cache[0];

        for (i, ch1) in s1.iter().enumerate() {
            let up = cache[i + 1];
            let cell = if ch1 == ch2 {
                diag
            } else {
                1 + min(diag, min(up, cache[i]))
            };
            diag = up;
            cache[i + 1] = cell;
            row_min = min(row_min, cell);
        }

        if row_min > score_cutoff {
            return score_cutoff + 1;
        }
    }

    let dist = cache[s1.len()];
    if dist <= score_cutoff {
        dist
    } else {
        score_cutoff + 1
    }
}

pub(crate) fn levenshtein_distance<Elem1, Elem2>(
    s1: &[Elem1],
    s2: &[Elem2],
    score_cutoff: usize,
) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    // the length difference is a lower bound for the distance
    if s1.len().abs_diff(s2.len()) > score_cutoff {
        return score_cutoff + 1;
    }

    let (s1, s2) = remove_common_affix(s1, s2);
    if s1.is_empty() {
        return if s2.len() <= score_cutoff {
            s2.len()
        } else {
            score_cutoff + 1
        };
    }
    if s2.is_empty() {
        return if s1.len() <= score_cutoff {
            s1.len()
        } else {
            score_cutoff + 1
        };
    }

    wagner_fischer(s1, s2, score_cutoff)
}

/// Levenshtein distance
///
/// # Examples
///
/// ```
/// use stringmatching::distance::levenshtein;
///
/// assert_eq!(3, levenshtein::distance("kitten".chars(), "sitting".chars()));
/// assert_eq!(0, levenshtein::distance("".chars(), "".chars()));
/// ```
pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> usize
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
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
    Iter1::Item: PartialEq<Iter2::Item>,
    CutoffType: DistanceCutoff<usize>,
{
    let s1: Vec<Iter1::Item> = s1.into_iter().collect();
    let s2: Vec<Iter2::Item> = s2.into_iter().collect();
    let score_cutoff = args.score_cutoff.cutoff().unwrap_or(usize::MAX);
    args.score_cutoff
        .score(levenshtein_distance(&s1, &s2, score_cutoff))
}

/// Normalized Levenshtein similarity in the range [0.0, 1.0]
///
/// This is calculated as `1.0 - `[`distance`]` / max(len1, len2)`. Two empty
/// sequences have a similarity of `1.0`.
///
/// ```
/// use stringmatching::distance::levenshtein;
///
/// assert_eq!(0.5, levenshtein::normalized_similarity("ab".chars(), "ac".chars()));
/// ```
pub fn normalized_similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
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
    Iter1::Item: PartialEq<Iter2::Item>,
    CutoffType: SimilarityCutoff<f64>,
{
    let s1: Vec<Iter1::Item> = s1.into_iter().collect();
    let s2: Vec<Iter2::Item> = s2.into_iter().collect();
    let maximum = max(s1.len(), s2.len());
    if maximum == 0 {
        return args.score_cutoff.score(1.0);
    }

    let cutoff_distance = match args.score_cutoff.cutoff() {
        Some(cutoff) => (norm_sim_to_norm_dist(cutoff) * maximum as f64).ceil() as usize,
        None => usize::MAX,
    };
    let dist = levenshtein_distance(&s1, &s2, cutoff_distance);
    let sim = if dist > cutoff_distance {
        0.0
    } else {
        1.0 - dist as f64 / maximum as f64
    };
    args.score_cutoff.score(sim)
}

/// Normalized Levenshtein distance in the range [0.0, 1.0]
///
/// This is calculated as `1.0 - `[`normalized_similarity`]
pub fn normalized_distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> f64
where
    Iter1: IntoIterator,
    Iter2: IntoIterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    1.0 - normalized_similarity(s1, s2)
}

/// Levenshtein distance measure over the characters of two strings
#[derive(Debug, Clone, Copy, Default)]
pub struct Levenshtein;

impl SequenceMeasure for Levenshtein {
    fn raw_score(&self, s1: &str, s2: &str) -> Result<f64> {
        if s1 == s2 {
            return Ok(0.0);
        }
        Ok(distance(s1.chars(), s2.chars()) as f64)
    }
}

impl NormalizedMeasure for Levenshtein {
    fn sim_score(&self, s1: &str, s2: &str) -> Result<f64> {
        Ok(normalized_similarity(s1.chars(), s2.chars()))
    }
}
