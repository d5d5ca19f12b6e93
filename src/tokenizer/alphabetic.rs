//! Alphabetic tokenizer

use crate::tokenizer::{char_runs, finish, Tokenizer};

/// Returns the maximal runs of ASCII letters
///
/// ```
/// use stringmatching::tokenizer::{AlphabeticTokenizer, Tokenizer};
///
/// let tok = AlphabeticTokenizer::new();
/// assert_eq!(vec!["data", "science"], tok.tokenize("data99science"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct AlphabeticTokenizer {
    return_set: bool,
}

impl AlphabeticTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_return_set(mut self, return_set: bool) -> Self {
        self.return_set = return_set;
        self
    }
}

impl Tokenizer for AlphabeticTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        finish(char_runs(input, |ch| ch.is_ascii_alphabetic()), self.return_set)
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
    fn alphabetic_valid_input() {
        let tok = AlphabeticTokenizer::new();
        assert!(tok.tokenize("").is_empty());
        assert!(tok.tokenize("99").is_empty());
        assert_eq!(vec!["a"], tok.tokenize("a"));
        assert_eq!(
            vec!["data", "science", "data", "integration"],
            tok.tokenize("data99science, data#integration.")
        );
        assert_eq!(vec!["L", "we"], tok.tokenize("Löwe"));
    }

    #[test]
    fn alphabetic_return_set() {
        let tok = AlphabeticTokenizer::new().with_return_set(true);
        assert_eq!(
            vec!["data", "science", "integration"],
            tok.tokenize("data99science, data#integration.")
        );
    }
}
