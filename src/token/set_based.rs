//! Set overlap ratios
//!
//! Both inputs are reduced to sets before the comparison, so duplicates are
//! ignored. The free functions work on slices of any `Eq + Hash` element
//! type, the unit structs implement [`TokenMeasure`] for bags of strings.
//!
//! All ratios are `1.0` when both sets are empty and `0.0` when exactly one
//! of them is.
//!
//! ```
//! use stringmatching::token::set_based;
//!
//! assert_eq!(0.375, set_based::jaccard(&[1, 1, 2, 3, 4], &[2, 3, 4, 5, 6, 7, 7, 8]));
//! ```

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::error::{Result, StringMatchError};
use crate::token::{as_strs, TokenMeasure};

/// Set sizes and the size of their intersection
struct Overlap {
    len1: usize,
    len2: usize,
    intersection: usize,
}

impl Overlap {
    fn new<T>(tokens1: &[T], tokens2: &[T]) -> Self
    where
        T: Eq + Hash,
    {
        let set1: FxHashSet<&T> = tokens1.iter().collect();
        let set2: FxHashSet<&T> = tokens2.iter().collect();
        let intersection = set1.intersection(&set2).count();
        Overlap {
            len1: set1.len(),
            len2: set2.len(),
            intersection,
        }
    }

    /// `Some(score)` when the result is fixed by empty inputs
    fn empty_score(&self) -> Option<f64> {
        match (self.len1, self.len2) {
            (0, 0) => Some(1.0),
            (0, _) | (_, 0) => Some(0.0),
            _ => None,
        }
    }
}

/// `|X ∩ Y| / |X ∪ Y|`
pub fn jaccard<T>(tokens1: &[T], tokens2: &[T]) -> f64
where
    T: Eq + Hash,
{
    let overlap = Overlap::new(tokens1, tokens2);
    overlap.empty_score().unwrap_or_else(|| {
        let union = overlap.len1 + overlap.len2 - overlap.intersection;
        overlap.intersection as f64 / union as f64
    })
}

/// `2 |X ∩ Y| / (|X| + |Y|)`
pub fn dice<T>(tokens1: &[T], tokens2: &[T]) -> f64
where
    T: Eq + Hash,
{
    let overlap = Overlap::new(tokens1, tokens2);
    overlap.empty_score().unwrap_or_else(|| {
        2.0 * overlap.intersection as f64 / (overlap.len1 + overlap.len2) as f64
    })
}

/// `|X ∩ Y| / (sqrt(|X|) sqrt(|Y|))`
pub fn cosine<T>(tokens1: &[T], tokens2: &[T]) -> f64
where
    T: Eq + Hash,
{
    let overlap = Overlap::new(tokens1, tokens2);
    overlap.empty_score().unwrap_or_else(|| {
        overlap.intersection as f64
            / ((overlap.len1 as f64).sqrt() * (overlap.len2 as f64).sqrt())
    })
}

/// `|X ∩ Y| / min(|X|, |Y|)`
pub fn overlap_coefficient<T>(tokens1: &[T], tokens2: &[T]) -> f64
where
    T: Eq + Hash,
{
    let overlap = Overlap::new(tokens1, tokens2);
    overlap.empty_score().unwrap_or_else(|| {
        overlap.intersection as f64 / overlap.len1.min(overlap.len2) as f64
    })
}

/// `|X ∩ Y| / (|X ∩ Y| + alpha |X - Y| + beta |Y - X|)`
///
/// Fails with [`StringMatchError::InvalidParameter`] for negative weights.
pub fn tversky<T>(tokens1: &[T], tokens2: &[T], alpha: f64, beta: f64) -> Result<f64>
where
    T: Eq + Hash,
{
    check_tversky_weights(alpha, beta)?;
    let overlap = Overlap::new(tokens1, tokens2);
    Ok(overlap.empty_score().unwrap_or_else(|| {
        let intersection = overlap.intersection as f64;
        let only1 = (overlap.len1 - overlap.intersection) as f64;
        let only2 = (overlap.len2 - overlap.intersection) as f64;
        let denominator = intersection + alpha * only1 + beta * only2;
        if denominator == 0.0 {
            0.0
        } else {
            intersection / denominator
        }
    }))
}

fn check_tversky_weights(alpha: f64, beta: f64) -> Result<()> {
    if !(alpha >= 0.0) {
        return Err(StringMatchError::invalid_parameter("alpha", "must be non-negative"));
    }
    if !(beta >= 0.0) {
        return Err(StringMatchError::invalid_parameter("beta", "must be non-negative"));
    }
    Ok(())
}

macro_rules! impl_set_measure {
    ($(#[$doc:meta])* $name:ident, $func:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl TokenMeasure for $name {
            fn raw_score<S1, S2>(&self, bag1: &[S1], bag2: &[S2]) -> Result<f64>
            where
                S1: AsRef<str>,
                S2: AsRef<str>,
            {
                Ok($func(&as_strs(bag1), &as_strs(bag2)))
            }
        }
    };
}

impl_set_measure!(
    /// Jaccard similarity of two token sets
    Jaccard,
    jaccard
);
impl_set_measure!(
    /// Dice similarity of two token sets
    Dice,
    dice
);
impl_set_measure!(
    /// Cosine similarity (Ochiai coefficient) of two token sets
    Cosine,
    cosine
);
impl_set_measure!(
    /// Overlap coefficient of two token sets
    OverlapCoefficient,
    overlap_coefficient
);

/// Tversky index of two token sets
///
/// `alpha` weights tokens only present in the first set, `beta` tokens only
/// present in the second one. With `alpha = beta = 0.5` this is the Dice
/// similarity, with `alpha = beta = 1` the Jaccard similarity.
#[derive(Debug, Clone, Copy)]
pub struct Tversky {
    alpha: f64,
    beta: f64,
}

impl Default for Tversky {
    fn default() -> Self {
        Tversky {
            alpha: 0.5,
            beta: 0.5,
        }
    }
}

impl Tversky {
    pub fn new(alpha: f64, beta: f64) -> Result<Self> {
        check_tversky_weights(alpha, beta)?;
        Ok(Tversky { alpha, beta })
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn set_alpha(&mut self, alpha: f64) -> Result<()> {
        check_tversky_weights(alpha, self.beta)?;
        self.alpha = alpha;
        Ok(())
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn set_beta(&mut self, beta: f64) -> Result<()> {
        check_tversky_weights(self.alpha, beta)?;
        self.beta = beta;
        Ok(())
    }
}

impl TokenMeasure for Tversky {
    fn raw_score<S1, S2>(&self, bag1: &[S1], bag2: &[S2]) -> Result<f64>
    where
        S1: AsRef<str>,
        S2: AsRef<str>,
    {
        tversky(&as_strs(bag1), &as_strs(bag2), self.alpha, self.beta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_delta {
        ($x:expr, $y:expr) => {
            assert_delta!($x, $y, 0.0001)
        };
        ($x:expr, $y:expr, $d:expr) => {
            if ($x - $y).abs() > $d {
                panic!("{} != {}", $x, $y);
            }
        };
    }

    const NUMBERS1: [i32; 5] = [1, 1, 2, 3, 4];
    const NUMBERS2: [i32; 8] = [2, 3, 4, 5, 6, 7, 7, 8];

    #[test]
    fn jaccard_valid_input() {
        assert_eq!(Ok(0.5), Jaccard.raw_score(&["data", "science"], &["data"]));
        assert_delta!(
            1.0 / 3.0,
            Jaccard.raw_score(&["data", "science"], &["science", "good"]).unwrap()
        );
        assert_eq!(Ok(0.0), Jaccard.raw_score(&[] as &[&str], &["data"]));
        assert_delta!(
            1.0 / 3.0,
            Jaccard
                .raw_score(&["data", "data", "science"], &["data", "management"])
                .unwrap()
        );
        assert_eq!(Ok(1.0), Jaccard.raw_score::<&str, &str>(&[], &[]));
        assert_eq!(0.375, jaccard(&NUMBERS1, &NUMBERS2));
    }

    #[test]
    fn dice_valid_input() {
        assert_delta!(2.0 / 3.0, Dice.raw_score(&["data", "science"], &["data"]).unwrap());
        assert_delta!(0.5, Dice.raw_score(&["data", "science"], &["science", "good"]).unwrap());
        assert_eq!(Ok(0.0), Dice.raw_score(&[] as &[&str], &["data"]));
        assert_eq!(Ok(1.0), Dice.raw_score(&["a", "b"], &["b", "a"]));
        assert_eq!(Ok(1.0), Dice.raw_score::<&str, &str>(&[], &[]));
        assert_delta!(6.0 / 11.0, dice(&NUMBERS1, &NUMBERS2));
    }

    #[test]
    fn cosine_valid_input() {
        assert_delta!(
            1.0 / (2.0_f64.sqrt() * 1.0_f64.sqrt()),
            Cosine.raw_score(&["data", "science"], &["data"]).unwrap()
        );
        assert_delta!(0.5, Cosine.raw_score(&["data", "science"], &["science", "good"]).unwrap());
        assert_eq!(Ok(0.0), Cosine.raw_score(&[] as &[&str], &["data"]));
        assert_delta!(3.0 / (2.0 * 7.0_f64.sqrt()), cosine(&NUMBERS1, &NUMBERS2));
    }

    #[test]
    fn overlap_coefficient_valid_input() {
        assert_eq!(Ok(1.0), OverlapCoefficient.raw_score::<&str, &str>(&[], &[]));
        assert_eq!(Ok(1.0), OverlapCoefficient.raw_score(&["data", "science"], &["data"]));
        assert_eq!(
            Ok(0.5),
            OverlapCoefficient.raw_score(&["data", "science"], &["science", "good"])
        );
        assert_eq!(Ok(0.0), OverlapCoefficient.raw_score(&[] as &[&str], &["data"]));
        assert_eq!(1.0, overlap_coefficient(&NUMBERS1, &NUMBERS2));
    }

    #[test]
    fn tversky_valid_input() {
        let tv = Tversky::default();
        assert_eq!((0.5, 0.5), (tv.alpha(), tv.beta()));
        // alpha = beta = 0.5 is the dice similarity
        assert_delta!(dice(&NUMBERS1, &NUMBERS2), tversky(&NUMBERS1, &NUMBERS2, 0.5, 0.5).unwrap());
        // alpha = beta = 1 is the jaccard similarity
        assert_delta!(jaccard(&NUMBERS1, &NUMBERS2), tversky(&NUMBERS1, &NUMBERS2, 1.0, 1.0).unwrap());

        let tv = Tversky::new(0.0, 1.0).unwrap();
        assert_eq!(Ok(1.0), tv.raw_score(&["data", "science"], &["data"]));
        assert_delta!(0.5, tv.raw_score(&["data"], &["data", "science"]).unwrap());
        assert_eq!(Ok(1.0), tv.raw_score::<&str, &str>(&[], &[]));
    }

    #[test]
    fn tversky_invalid_weights() {
        assert!(Tversky::new(-0.1, 0.5).is_err());
        assert!(Tversky::new(0.5, f64::NAN).is_err());
        assert!(tversky(&NUMBERS1, &NUMBERS2, 0.5, -1.0).is_err());

        let mut tv = Tversky::default();
        assert!(tv.set_alpha(-1.0).is_err());
        assert_eq!(0.5, tv.alpha());
        tv.set_beta(2.0).unwrap();
        assert_eq!(2.0, tv.beta());
    }

    #[test]
    fn set_ratios_are_symmetric() {
        let bag1 = ["a", "b", "c", "c"];
        let bag2 = ["c", "d"];
        assert_eq!(jaccard(&bag1, &bag2), jaccard(&bag2, &bag1));
        assert_eq!(dice(&bag1, &bag2), dice(&bag2, &bag1));
        assert_eq!(cosine(&bag1, &bag2), cosine(&bag2, &bag1));
        assert_eq!(overlap_coefficient(&bag1, &bag2), overlap_coefficient(&bag2, &bag1));
    }
}
