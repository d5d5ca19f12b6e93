#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stringmatching::token::{GeneralizedJaccard, Jaccard, MongeElkan, SoftTfIdf, TfIdf, TokenMeasure};

#[derive(Arbitrary, Debug)]
pub struct Bags {
    pub bag1: Vec<String>,
    pub bag2: Vec<String>,
}

fn in_unit_range(score: stringmatching::Result<f64>) -> bool {
    score.map_or(false, |score| (0.0..=1.0 + 1e-9).contains(&score))
}

fn fuzz(bags: Bags) {
    assert!(in_unit_range(Jaccard.raw_score(&bags.bag1, &bags.bag2)));
    assert!(in_unit_range(TfIdf::new().raw_score(&bags.bag1, &bags.bag2)));
    // several tokens may share one partner, so only the lower bound holds
    let soft = SoftTfIdf::new().raw_score(&bags.bag1, &bags.bag2);
    assert!(soft.map_or(false, |score| score >= 0.0));
    assert!(in_unit_range(MongeElkan::new().raw_score(&bags.bag1, &bags.bag2)));
    assert!(in_unit_range(
        GeneralizedJaccard::new().raw_score(&bags.bag1, &bags.bag2)
    ));
}

fuzz_target!(|bags: Bags| {
    fuzz(bags);
});
