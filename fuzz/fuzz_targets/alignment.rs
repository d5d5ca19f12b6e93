#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stringmatching::distance::{Affine, NeedlemanWunsch, SmithWaterman};
use stringmatching::SequenceMeasure;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let _ = NeedlemanWunsch::new().raw_score(&texts.s1, &texts.s2);
    let _ = Affine::new().raw_score(&texts.s1, &texts.s2);

    let local = SmithWaterman::new().raw_score(&texts.s1, &texts.s2);
    assert!(local.map_or(false, |score| score >= 0.0));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
