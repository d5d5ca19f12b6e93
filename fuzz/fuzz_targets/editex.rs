#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stringmatching::distance::Editex;
use stringmatching::NormalizedMeasure;

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
    pub local: bool,
}

fn fuzz(texts: Texts) {
    let editex = Editex::new().with_local(texts.local);
    editex.distance(&texts.s1, &texts.s2);
    let sim = editex.sim_score(&texts.s1, &texts.s2);
    assert!(sim.map_or(false, |sim| (0.0..=1.0).contains(&sim)));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
