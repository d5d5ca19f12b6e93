#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stringmatching::common::Args;
use stringmatching::distance::{bag, levenshtein};

#[derive(Arbitrary, Debug)]
pub struct Texts {
    pub s1: String,
    pub s2: String,
    pub score_cutoff: usize,
}

fn fuzz(texts: Texts) {
    let dist = levenshtein::distance(texts.s1.chars(), texts.s2.chars());
    let len1 = texts.s1.chars().count();
    let len2 = texts.s2.chars().count();
    assert!(dist <= len1.max(len2));
    assert!(bag::distance(texts.s1.chars(), texts.s2.chars()) <= dist);

    let cutoff = levenshtein::distance_with_args(
        texts.s1.chars(),
        texts.s2.chars(),
        &Args::default().score_cutoff(texts.score_cutoff),
    );
    if dist <= texts.score_cutoff {
        assert_eq!(Some(dist), cutoff);
    } else {
        assert_eq!(None, cutoff);
    }

    // a similarity exactly on the cutoff is kept
    let sim = levenshtein::normalized_similarity(texts.s1.chars(), texts.s2.chars());
    assert_eq!(
        Some(sim),
        levenshtein::normalized_similarity_with_args(
            texts.s1.chars(),
            texts.s2.chars(),
            &Args::default().score_cutoff(sim)
        )
    );
}

fuzz_target!(|texts: Texts| {
    fuzz(texts);
});
