//! Jaro similarity
//!
//! The Jaro similarity is a measure of similarity between two sequences,
//! developed for short strings such as first and last names.
//!
//! Two elements match when they are equal and no further apart than
//! `max(len1, len2) / 2 - 1` positions. With `m` matching elements and `t`
//! half the number of matched elements appearing in a different order the
//! similarity is
//!
//! ```text
//! (m / len1 + m / len2 + (m - t) / m) / 3
//! ```
//!
//! The result lies in the range [0.0, 1.0]. If either sequence is empty or no
//! element matches the similarity is `0.0`.

use crate::common::{Args, SimilarityCutoff};
use crate::error::Result;
use crate::{NormalizedMeasure, SequenceMeasure};

fn jaro_calculate_similarity(len1: usize, len2: usize, common_chars: usize, transpositions: usize) -> f64 {
    let common = common_chars as f64;
    let half_transpositions = transpositions as f64 / 2.0;
    (common / len1 as f64 + common / len2 as f64 + (common - half_transpositions) / common) / 3.0
}

// filter matches below score_cutoff based on the sequence lengths
fn jaro_length_filter(len1: usize, len2: usize, score_cutoff: f64) -> bool {
    if len1 == 0 || len2 == 0 {
        return false;
    }

    let min_len = len1.min(len2) as f64;
    let sim = (min_len / len1 as f64 + min_len / len2 as f64 + 1.0) / 3.0;
    sim >= score_cutoff
}

/// Marks matching elements inside the search window and counts them
fn flag_similar_characters<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2]) -> (Vec<bool>, Vec<bool>, usize)
where
    Elem1: PartialEq<Elem2>,
{
    let bound = (s1.len().max(s2.len()) / 2).saturating_sub(1);
    let mut flags1 = vec![false; s1.len()];
    let mut flags2 = vec![false; s2.len()];
    let mut common_chars = 0;

    for (i, ch1) in s1.iter().enumerate() {
        let low = i.saturating_sub(bound);
        let high = (i + bound).min(s2.len().saturating_sub(1));
        if low > high || low >= s2.len() {
            continue;
        }

        for j in low..=high {
            if !flags2[j] && *ch1 == s2[j] {
                flags1[i] = true;
                flags2[j] = true;
                common_chars += 1;
                break;
            }
        }
    }

    (flags1, flags2, common_chars)
}

fn count_transpositions<Elem1, Elem2>(s1: &[Elem1], flags1: &[bool], s2: &[Elem2], flags2: &[bool]) -> usize
where
    Elem1: PartialEq<Elem2>,
{
    let matched1 = s1.iter().zip(flags1).filter(|(_, flag)| **flag).map(|(ch, _)| ch);
    let matched2 = s2.iter().zip(flags2).filter(|(_, flag)| **flag).map(|(ch, _)| ch);
    matched1.zip(matched2).filter(|(ch1, ch2)| **ch1 != **ch2).count()
}

pub(crate) fn jaro_similarity<Elem1, Elem2>(s1: &[Elem1], s2: &[Elem2], score_cutoff: f64) -> Option<f64>
where
    Elem1: PartialEq<Elem2>,
{
    if s1.is_empty() || s2.is_empty() {
        return (score_cutoff <= 0.0).then_some(0.0);
    }
    if !jaro_length_filter(s1.len(), s2.len(), score_cutoff) {
        return None;
    }

    let (flags1, flags2, common_chars) = flag_similar_characters(s1, s2);
    if common_chars == 0 {
        return (score_cutoff <= 0.0).then_some(0.0);
    }

    let transpositions = count_transpositions(s1, &flags1, s2, &flags2);
    let sim = jaro_calculate_similarity(s1.len(), s2.len(), common_chars, transpositions);
    (sim >= score_cutoff).then_some(sim)
}

/// Jaro similarity in the range [0.0, 1.0]
///
/// # Examples
///
/// ```
/// use stringmatching::distance::jaro;
///
/// assert_eq!(0.9444444444444445, jaro::similarity("MARTHA".chars(), "MARHTA".chars()));
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
    let score_cutoff = args.score_cutoff.cutoff().unwrap_or(0.0);
    let sim = jaro_similarity(&s1, &s2, score_cutoff).unwrap_or(0.0);
    args.score_cutoff.score(sim)
}

/// Jaro distance in the range [0.0, 1.0]
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

/// Jaro similarity measure over the characters of two strings
///
/// The raw score is already normalized, so `raw_score` and `sim_score` agree.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jaro;

impl SequenceMeasure for Jaro {
    fn raw_score(&self, s1: &str, s2: &str) -> Result<f64> {
        Ok(similarity(s1.chars(), s2.chars()))
    }
}

impl NormalizedMeasure for Jaro {
    fn sim_score(&self, s1: &str, s2: &str) -> Result<f64> {
        self.raw_score(s1, s2)
    }
}
