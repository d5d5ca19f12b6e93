//! Alphanumeric tokenizer

use crate::tokenizer::{char_runs, finish, Tokenizer};

/// Returns the maximal runs of ASCII letters and digits
#[derive(Debug, Clone, Default)]
pub struct AlphanumericTokenizer {
    return_set: bool,
}

impl AlphanumericTokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_return_set(mut self, return_set: bool) -> Self {
        self.return_set = return_set;
        self
    }
}

impl Tokenizer for AlphanumericTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        finish(char_runs(input, |ch| ch.is_ascii_alphanumeric()), self.return_set)
    }

    fn return_set(&self) -> bool {
        self.return_set
    }

    fn set_return_set(&mut self, return_set: bool) {
        self.return_set = return_set;
    }
}
