//! Q-gram tokenizer

use crate::error::{Result, StringMatchError};
use crate::tokenizer::{finish, Tokenizer};

/// Splits a string into all overlapping windows of `qval` characters
///
/// ```
/// use stringmatching::tokenizer::{QgramTokenizer, Tokenizer};
///
/// let tok = QgramTokenizer::default();
/// assert_eq!(vec!["da", "at", "ta", "ab", "ba", "as", "se"], tok.tokenize("database"));
/// assert!(tok.tokenize("a").is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct QgramTokenizer {
    qval: usize,
    return_set: bool,
}

impl Default for QgramTokenizer {
    fn default() -> Self {
        QgramTokenizer {
            qval: 2,
            return_set: false,
        }
    }
}

impl QgramTokenizer {
    /// Fails with [`StringMatchError::InvalidParameter`] if `qval` is 0
    pub fn new(qval: usize) -> Result<Self> {
        check_qval(qval)?;
        Ok(QgramTokenizer {
            qval,
            return_set: false,
        })
    }

    #[must_use]
    pub fn with_return_set(mut self, return_set: bool) -> Self {
        self.return_set = return_set;
        self
    }

    pub fn qval(&self) -> usize {
        self.qval
    }

    pub fn set_qval(&mut self, qval: usize) -> Result<()> {
        check_qval(qval)?;
        self.qval = qval;
        Ok(())
    }
}

fn check_qval(qval: usize) -> Result<()> {
    if qval < 1 {
        return Err(StringMatchError::invalid_parameter("qval", "must be at least 1"));
    }
    Ok(())
}

impl Tokenizer for QgramTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        // byte offsets of every char plus the end of the string
        let bounds: Vec<usize> = input
            .char_indices()
            .map(|(idx, _)| idx)
            .chain(std::iter::once(input.len()))
            .collect();
        let char_count = bounds.len() - 1;
        if char_count < self.qval {
            return Vec::new();
        }

        let qgrams = bounds
            .windows(self.qval + 1)
            .map(|window| input[window[0]..window[self.qval]].to_owned())
            .collect();
        finish(qgrams, self.return_set)
    }

    fn return_set(&self) -> bool {
        self.return_set
    }

    fn set_return_set(&mut self, return_set: bool) {
        self.return_set = return_set;
    }
}
