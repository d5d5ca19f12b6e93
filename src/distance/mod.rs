//! Sequence measures
//!
//! Every measure compares two raw strings. The configurable measures are
//! structs implementing [`SequenceMeasure`](crate::SequenceMeasure), the
//! normalized ones additionally [`NormalizedMeasure`](crate::NormalizedMeasure).
//! Measures without configuration also expose generic free functions in their
//! module, which accept any iterator of comparable elements.
//!
//! | Measure | Result | Complexity |
//! |---------|--------|------------|
//! | [`Hamming`] | distance | `O(N)` |
//! | [`Levenshtein`] | distance | `O(N*M)` |
//! | [`BagDistance`] | distance | `O(N+M)` |
//! | [`Affine`] | alignment score | `O(N*M)` |
//! | [`NeedlemanWunsch`] | alignment score | `O(N*M)` |
//! | [`SmithWaterman`] | alignment score | `O(N*M)` |
//! | [`Editex`] | distance | `O(N*M)` |
//! | [`Jaro`] | similarity | `O(N*M)` |
//! | [`JaroWinkler`] | similarity | `O(N*M)` |

use std::sync::Arc;

pub mod affine;
pub mod bag;
pub mod editex;
pub mod hamming;
pub mod jaro;
pub mod jaro_winkler;
pub mod levenshtein;
pub mod needleman_wunsch;
pub mod smith_waterman;

pub use affine::Affine;
pub use bag::BagDistance;
pub use editex::Editex;
pub use hamming::Hamming;
pub use jaro::Jaro;
pub use jaro_winkler::JaroWinkler;
pub use levenshtein::Levenshtein;
pub use needleman_wunsch::NeedlemanWunsch;
pub use smith_waterman::SmithWaterman;

/// Similarity of two characters used by the alignment measures
pub type CharSimFn = Arc<dyn Fn(char, char) -> f64 + Send + Sync>;

/// Identity similarity: `1.0` for equal characters and `0.0` otherwise
pub fn sim_ident(ch1: char, ch2: char) -> f64 {
    if ch1 == ch2 {
        1.0
    } else {
        0.0
    }
}

pub(crate) fn default_char_sim() -> CharSimFn {
    Arc::new(sim_ident)
}
