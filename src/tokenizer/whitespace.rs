//! Whitespace tokenizer

use crate::tokenizer::{finish, Tokenizer};

const WHITESPACE_DELIMS: [&str; 3] = [" ", "\t", "\n"];

/// Splits a string on runs of whitespace
///
/// ```
/// use stringmatching::tokenizer::{Tokenizer, WhitespaceTokenizer};
///
/// let tok = WhitespaceTokenizer::new();
/// assert_eq!(vec!["data", "science"], tok.tokenize("data \t science\n"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WhitespaceTokenizer {
    return_set: bool,
}

impl WhitespaceTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_return_set(mut self, return_set: bool) -> Self {
        self.return_set = return_set;
        self
    }

    /// The delimiters are fixed
    pub fn delim_set(&self) -> &'static [&'static str] {
        &WHITESPACE_DELIMS
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        let tokens = input.split_whitespace().map(str::to_owned).collect();
        finish(tokens, self.return_set)
    }

    fn return_set(&self) -> bool {
        self.return_set
    }

    fn set_return_set(&mut self, return_set: bool) {
        self.return_set = return_set;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_valid_input() {
        let tok = WhitespaceTokenizer::new();
        assert!(tok.tokenize("").is_empty());
        assert!(tok.tokenize(" \t\n").is_empty());
        assert_eq!(vec!["data", "science"], tok.tokenize("data science"));
        assert_eq!(vec!["data", "science"], tok.tokenize("data        science"));
        assert_eq!(vec!["data", "science"], tok.tokenize("data\tscience"));
        assert_eq!(vec!["data", "science"], tok.tokenize("data\nscience"));
        assert_eq!(vec!["ab", "cd", "ab", "bb", "cd"], tok.tokenize("ab cd ab bb cd"));
    }

    #[test]
    fn whitespace_return_set() {
        let mut tok = WhitespaceTokenizer::new();
        tok.set_return_set(true);
        assert!(tok.return_set());
        assert_eq!(vec!["ab", "cd", "bb"], tok.tokenize("ab cd ab bb cd"));
    }

    #[test]
    fn whitespace_delim_set() {
        assert_eq!(&[" ", "\t", "\n"], WhitespaceTokenizer::new().delim_set());
    }
}
