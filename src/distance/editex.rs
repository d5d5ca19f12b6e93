//! Editex distance
//!
//! Editex is a phonetic edit distance. Letters are arranged in groups of
//! similar sounding letters, and replacing a letter with another one of the
//! same group is cheaper than an arbitrary replacement. Deleting an `H` or a
//! `W` after a different letter is also charged as a group replacement, since
//! these letters are often silent.
//!
//! Both strings are upper-cased and decomposed (NFKD) before the comparison.
//! The local variant from Ring and Uitdenbogerd leaves the first column of the
//! DP table at zero, so leading characters of the first string can be skipped
//! for free.

use unicode_normalization::UnicodeNormalization;

use crate::details::matrix::Matrix;
use crate::error::Result;
use crate::{NormalizedMeasure, SequenceMeasure};

const LETTERS: &str = "ABCDEFGIJKLMNOPQRSTUVXYZ";

const LETTER_GROUPS: [&str; 10] = [
    "AEIOUY", "BP", "CKQ", "DT", "LR", "MN", "GJ", "FPV", "SXZ", "CSZ",
];

fn is_letter(ch: char) -> bool {
    LETTERS.contains(ch)
}

fn normalize(s: &str) -> Vec<char> {
    s.to_uppercase().nfkd().collect()
}

fn share_group(ch1: char, ch2: char) -> bool {
    LETTER_GROUPS
        .iter()
        .any(|group| group.contains(ch1) && group.contains(ch2))
}

/// Editex measure
///
/// ```
/// use stringmatching::distance::Editex;
/// use stringmatching::{NormalizedMeasure, SequenceMeasure};
///
/// let editex = Editex::new();
/// assert_eq!(Ok(2.0), editex.raw_score("cat", "hat"));
/// assert_eq!(Ok(12.0), editex.raw_score("aluminum", "Catalan"));
/// assert_eq!(Ok(0.25), editex.sim_score("ATCG", "TAGC"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Editex {
    match_cost: usize,
    group_cost: usize,
    mismatch_cost: usize,
    local: bool,
}

impl Default for Editex {
    fn default() -> Self {
        Editex {
            match_cost: 0,
            group_cost: 1,
            mismatch_cost: 2,
            local: false,
        }
    }
}

impl Editex {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_match_cost(mut self, match_cost: usize) -> Self {
        self.match_cost = match_cost;
        self
    }

    #[must_use]
    pub fn with_group_cost(mut self, group_cost: usize) -> Self {
        self.group_cost = group_cost;
        self
    }

    #[must_use]
    pub fn with_mismatch_cost(mut self, mismatch_cost: usize) -> Self {
        self.mismatch_cost = mismatch_cost;
        self
    }

    #[must_use]
    pub fn with_local(mut self, local: bool) -> Self {
        self.local = local;
        self
    }

    pub fn match_cost(&self) -> usize {
        self.match_cost
    }

    pub fn set_match_cost(&mut self, match_cost: usize) {
        self.match_cost = match_cost;
    }

    pub fn group_cost(&self) -> usize {
        self.group_cost
    }

    pub fn set_group_cost(&mut self, group_cost: usize) {
        self.group_cost = group_cost;
    }

    pub fn mismatch_cost(&self) -> usize {
        self.mismatch_cost
    }

    pub fn set_mismatch_cost(&mut self, mismatch_cost: usize) {
        self.mismatch_cost = mismatch_cost;
    }

    pub fn local(&self) -> bool {
        self.local
    }

    pub fn set_local(&mut self, local: bool) {
        self.local = local;
    }

    /// cost of replacing `ch1` with `ch2`
    fn r_cost(&self, ch1: char, ch2: char) -> usize {
        if ch1 == ch2 {
            self.match_cost
        } else if is_letter(ch1) && is_letter(ch2) && share_group(ch1, ch2) {
            self.group_cost
        } else {
            self.mismatch_cost
        }
    }

    /// cost of deleting `ch2` when it follows `ch1`
    fn d_cost(&self, ch1: char, ch2: char) -> usize {
        if ch1 != ch2 && (ch1 == 'H' || ch1 == 'W') {
            self.group_cost
        } else {
            self.r_cost(ch1, ch2)
        }
    }

    /// Editex distance of two strings
    pub fn distance(&self, s1: &str, s2: &str) -> usize {
        if s1 == s2 {
            return 0;
        }
        self.normalized_distance(&normalize(s1), &normalize(s2))
    }

    fn normalized_distance(&self, s1: &[char], s2: &[char]) -> usize {
        if s1.is_empty() {
            return s2.len() * self.mismatch_cost;
        }
        if s2.is_empty() {
            return s1.len() * self.mismatch_cost;
        }

        // prefix a blank so that the first deletion has a predecessor
        let s1: Vec<char> = std::iter::once(' ').chain(s1.iter().copied()).collect();
        let s2: Vec<char> = std::iter::once(' ').chain(s2.iter().copied()).collect();
        let len1 = s1.len() - 1;
        let len2 = s2.len() - 1;
        let mut dist = Matrix::new(len1 + 1, len2 + 1, 0_usize);

        if !self.local {
            for i in 1..=len1 {
                let val = dist.get(i - 1, 0) + self.d_cost(s1[i - 1], s1[i]);
                dist.set(i, 0, val);
            }
        }
        for j in 1..=len2 {
            let val = dist.get(0, j - 1) + self.d_cost(s2[j - 1], s2[j]);
            dist.set(0, j, val);
        }

        for i in 1..=len1 {
            for j in 1..=len2 {
                let delete = dist.get(i - 1, j) + self.d_cost(s1[i - 1], s1[i]);
                let insert = dist.get(i, j - 1) + self.d_cost(s2[j - 1], s2[j]);
                let replace = dist.get(i - 1, j - 1) + self.r_cost(s1[i], s2[j]);
                dist.set(i, j, delete.min(insert).min(replace));
            }
        }

        dist.last()
    }
}

impl SequenceMeasure for Editex {
    fn raw_score(&self, s1: &str, s2: &str) -> Result<f64> {
        Ok(self.distance(s1, s2) as f64)
    }
}

impl NormalizedMeasure for Editex {
    /// `1 - distance / (max(len1, len2) * mismatch_cost)`
    ///
    /// The lengths are taken after upper-casing and decomposition, since
    /// both can add characters. A distance above the maximum, possible with a
    /// `match_cost` above `mismatch_cost`, gives 0.0.
    fn sim_score(&self, s1: &str, s2: &str) -> Result<f64> {
        if s1 == s2 {
            return Ok(1.0);
        }

        let s1 = normalize(s1);
        let s2 = normalize(s2);
        let maximum = (s1.len().max(s2.len()) * self.mismatch_cost) as f64;
        if maximum == 0.0 {
            return Ok(1.0);
        }
        let raw = self.normalized_distance(&s1, &s2) as f64;
        Ok((1.0 - raw / maximum).max(0.0))
    }
}
