#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stringmatching::tokenizer::{
    AlphabeticTokenizer, AlphanumericTokenizer, DelimiterTokenizer, QgramTokenizer, Tokenizer,
    WhitespaceTokenizer,
};

#[derive(Arbitrary, Debug)]
pub struct Input {
    pub text: String,
    pub delims: Vec<String>,
    pub qval: u8,
}

fn fuzz(input: Input) {
    if let Ok(tok) = QgramTokenizer::new(usize::from(input.qval)) {
        let qgrams = tok.tokenize(&input.text);
        let len = input.text.chars().count();
        let qval = usize::from(input.qval);
        assert_eq!(if len < qval { 0 } else { len - qval + 1 }, qgrams.len());
    }

    if let Ok(tok) = DelimiterTokenizer::new(input.delims) {
        assert!(tok.tokenize(&input.text).iter().all(|token| !token.is_empty()));
    }

    WhitespaceTokenizer::new().tokenize(&input.text);
    AlphabeticTokenizer::new().tokenize(&input.text);
    AlphanumericTokenizer::new()
        .with_return_set(true)
        .tokenize(&input.text);
}

fuzz_target!(|input: Input| {
    fuzz(input);
});
