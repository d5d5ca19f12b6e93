//! Tokenizers
//!
//! A tokenizer splits a string into an ordered sequence of tokens, which can
//! be fed to the [`token`](crate::token) measures. Definition tokenizers
//! ([`QgramTokenizer`], [`AlphabeticTokenizer`], [`AlphanumericTokenizer`])
//! describe what a token looks like, delimiter tokenizers
//! ([`DelimiterTokenizer`], [`WhitespaceTokenizer`]) describe what separates
//! tokens.
//!
//! With `return_set` enabled, repeated tokens are dropped and only the first
//! occurrence of every token is kept.
//!
//! ```
//! use stringmatching::tokenizer::{QgramTokenizer, Tokenizer};
//!
//! let tok = QgramTokenizer::new(3).unwrap();
//! assert_eq!(vec!["dat", "ata", "tab", "aba", "bas", "ase"], tok.tokenize("database"));
//! ```

use std::hash::Hash;

use rustc_hash::FxHashSet;

pub mod alphabetic;
pub mod alphanumeric;
pub mod delimiter;
pub mod qgram;
pub mod whitespace;

pub use alphabetic::AlphabeticTokenizer;
pub use alphanumeric::AlphanumericTokenizer;
pub use delimiter::DelimiterTokenizer;
pub use qgram::QgramTokenizer;
pub use whitespace::WhitespaceTokenizer;

pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, input: &str) -> Vec<String>;

    /// Whether repeated tokens are removed from the output
    fn return_set(&self) -> bool;

    fn set_return_set(&mut self, return_set: bool);
}

/// Removes repeated elements, keeping the first occurrence of each
pub(crate) fn dedup<T>(mut tokens: Vec<T>) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = FxHashSet::default();
    tokens.retain(|token| seen.insert(token.clone()));
    tokens
}

fn finish(tokens: Vec<String>, return_set: bool) -> Vec<String> {
    if return_set {
        dedup(tokens)
    } else {
        tokens
    }
}

/// maximal runs of characters matching `pred`
fn char_runs<P>(input: &str, pred: P) -> Vec<String>
where
    P: Fn(char) -> bool,
{
    input
        .split(|ch: char| !pred(ch))
        .filter(|run| !run.is_empty())
        .map(str::to_owned)
        .collect()
}
