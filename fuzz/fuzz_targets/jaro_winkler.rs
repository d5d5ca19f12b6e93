#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stringmatching::distance::{jaro, jaro_winkler};

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
}

fn fuzz(texts: Texts) {
    let sim = jaro_winkler::similarity(texts.s1.chars(), texts.s2.chars());
    assert!((0.0..=1.0).contains(&sim));
    assert!(sim >= jaro::similarity(texts.s1.chars(), texts.s2.chars()));
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
