//! Hamming distance
//!
//! The Hamming distance counts the positions at which two sequences of equal
//! length hold different elements. Comparisons are case sensitive. Sequences
//! of different length are rejected with
//! [`StringMatchError::LengthMismatch`].

use crate::common::{Args, DistanceCutoff, SimilarityCutoff};
use crate::details::common::norm_sim_to_norm_dist;
use crate::error::{Result, StringMatchError};
use crate::{NormalizedMeasure, SequenceMeasure};

fn _distance<Iter1, Iter2>(s1: Iter1, s2: Iter2, score_cutoff: usize) -> usize
where
    Iter1: Iterator,
    Iter2: Iterator,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    let mut dist = 0;
    for (ch1, ch2) in s1.zip(s2) {
        if ch1 != ch2 {
            dist += 1;
            if dist > score_cutoff {
                return score_cutoff + 1;
            }
        }
    }
    dist
}

fn checked_lengths<Iter1, Iter2>(s1: &Iter1, s2: &Iter2) -> Result<usize>
where
    Iter1: Iterator + Clone,
    Iter2: Iterator + Clone,
{
    let len1 = s1.clone().count();
    let len2 = s2.clone().count();
    if len1 != len2 {
        return Err(StringMatchError::LengthMismatch { len1, len2 });
    }
    Ok(len1)
}

/// Hamming distance
///
/// # Examples
///
/// ```
/// use stringmatching::distance::hamming;
///
/// assert_eq!(Ok(3), hamming::distance("karolin".chars(), "kathrin".chars()));
/// assert!(hamming::distance("ali".chars(), "alex".chars()).is_err());
/// ```
pub fn distance<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> Result<usize>
where
    Iter1: IntoIterator,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: Clone,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    distance_with_args(s1, s2, &Args::default())
}

pub fn distance_with_args<Iter1, Iter2, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<usize, CutoffType>,
) -> Result<CutoffType::Output>
where
    Iter1: IntoIterator,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: Clone,
    Iter1::Item: PartialEq<Iter2::Item>,
    CutoffType: DistanceCutoff<usize>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    checked_lengths(&s1_iter, &s2_iter)?;

    let score_cutoff = args.score_cutoff.cutoff().unwrap_or(usize::MAX);
    Ok(args
        .score_cutoff
        .score(_distance(s1_iter, s2_iter, score_cutoff)))
}

/// Normalized Hamming similarity in the range [0.0, 1.0]
///
/// This is calculated as `1.0 - `[`distance`]` / len`. Two empty sequences
/// have a similarity of `1.0`.
pub fn normalized_similarity<Iter1, Iter2>(s1: Iter1, s2: Iter2) -> Result<f64>
where
    Iter1: IntoIterator,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: Clone,
    Iter1::Item: PartialEq<Iter2::Item>,
{
    normalized_similarity_with_args(s1, s2, &Args::default())
}

pub fn normalized_similarity_with_args<Iter1, Iter2, CutoffType>(
    s1: Iter1,
    s2: Iter2,
    args: &Args<f64, CutoffType>,
) -> Result<CutoffType::Output>
where
    Iter1: IntoIterator,
    Iter1::IntoIter: Clone,
    Iter2: IntoIterator,
    Iter2::IntoIter: Clone,
    Iter1::Item: PartialEq<Iter2::Item>,
    CutoffType: SimilarityCutoff<f64>,
{
    let s1_iter = s1.into_iter();
    let s2_iter = s2.into_iter();
    let len = checked_lengths(&s1_iter, &s2_iter)?;
    if len == 0 {
        return Ok(args.score_cutoff.score(1.0));
    }

    let cutoff_distance = match args.score_cutoff.cutoff() {
        Some(cutoff) => (norm_sim_to_norm_dist(cutoff) * len as f64).ceil() as usize,
        None => usize::MAX,
    };
    let dist = _distance(s1_iter, s2_iter, cutoff_distance);
    let sim = if dist > cutoff_distance {
        0.0
    } else {
        1.0 - dist as f64 / len as f64
    };
    Ok(args.score_cutoff.score(sim))
}

/// Hamming distance measure
///
/// ```
/// use stringmatching::distance::Hamming;
/// use stringmatching::{NormalizedMeasure, SequenceMeasure};
///
/// assert_eq!(Ok(3.0), Hamming.raw_score("karolin", "kathrin"));
/// assert_eq!(Ok(1.0), Hamming.sim_score("", ""));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Hamming;

impl SequenceMeasure for Hamming {
    fn raw_score(&self, s1: &str, s2: &str) -> Result<f64> {
        distance(s1.chars(), s2.chars()).map(|dist| dist as f64)
    }
}

impl NormalizedMeasure for Hamming {
    fn sim_score(&self, s1: &str, s2: &str) -> Result<f64> {
        normalized_similarity(s1.chars(), s2.chars())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_hamming_dist(dist: usize, str1: &str, str2: &str) {
        assert_eq!(Ok(dist), distance(str1.chars(), str2.chars()));
        assert_eq!(Ok(dist), distance(str2.chars(), str1.chars()));
    }

    #[test]
    fn hamming_empty() {
        assert_hamming_dist(0, "", "");
        assert_eq!(Ok(1.0), Hamming.sim_score("", ""));
    }

    #[test]
    fn hamming_same() {
        assert_hamming_dist(0, "hamming", "hamming")
    }

    #[test]
    fn hamming_numbers() {
        assert_eq!(Ok(1), distance([1, 2, 4], [1, 2, 3]));
    }

    #[test]
    fn hamming_diff() {
        assert_hamming_dist(3, "karolin", "kathrin");
        assert_hamming_dist(4, "-789", "john");
        assert_hamming_dist(3, "abc", "p q");
        assert_hamming_dist(1, "a", "*");
    }

    #[test]
    fn hamming_case_sensitive() {
        assert_hamming_dist(4, "KARI", "kari");
    }

    #[test]
    fn hamming_diff_multibyte() {
        assert_hamming_dist(2, "hamming", "h香mmüng");
    }

    #[test]
    fn hamming_unequal_length() {
        assert_eq!(
            Err(StringMatchError::LengthMismatch { len1: 3, len2: 7 }),
            distance("ham".chars(), "hamming".chars())
        );
        assert!(Hamming.raw_score("a", "").is_err());
        assert!(Hamming.raw_score("", "This is a long string").is_err());
        assert!(Hamming.sim_score("ali", "alex").is_err());
    }

    #[test]
    fn hamming_sim_score() {
        assert_eq!(Ok(1.0 - 3.0 / 7.0), Hamming.sim_score("karolin", "kathrin"));
        assert_eq!(Ok(0.0), Hamming.sim_score("-789", "john"));
        assert_eq!(Ok(0.0), Hamming.sim_score("KARI", "kari"));
    }

    #[test]
    fn hamming_score_cutoff() {
        assert_eq!(
            Ok(Some(3)),
            distance_with_args(
                "karolin".chars(),
                "kathrin".chars(),
                &Args::default().score_cutoff(3)
            )
        );
        assert_eq!(
            Ok(None),
            distance_with_args(
                "karolin".chars(),
                "kathrin".chars(),
                &Args::default().score_cutoff(2)
            )
        );
        assert_eq!(
            Ok(None),
            normalized_similarity_with_args(
                "karolin".chars(),
                "kathrin".chars(),
                &Args::default().score_cutoff(0.6)
            )
        );
        assert_eq!(
            Ok(Some(1.0 - 3.0 / 7.0)),
            normalized_similarity_with_args(
                "karolin".chars(),
                "kathrin".chars(),
                &Args::default().score_cutoff(0.5)
            )
        );
    }

    #[test]
    fn hamming_score_on_cutoff() {
        assert_eq!(
            Ok(Some(0.9)),
            normalized_similarity_with_args(
                "abcdefghij".chars(),
                "abcdefghiX".chars(),
                &Args::default().score_cutoff(0.9)
            )
        );

        for len in 1..=12 {
            for diff in 0..=len {
                let s1 = "a".repeat(len);
                let s2 = "b".repeat(diff) + &"a".repeat(len - diff);
                let sim = 1.0 - diff as f64 / len as f64;
                assert_eq!(
                    Ok(Some(sim)),
                    normalized_similarity_with_args(
                        s1.chars(),
                        s2.chars(),
                        &Args::default().score_cutoff(sim)
                    )
                );
            }
        }
    }
}
