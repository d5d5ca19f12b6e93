//! Delimiter tokenizer
//!
//! The input is split at every occurrence of any of the delimiter strings.
//! Scanning goes from left to right; when several delimiters start at the same
//! position, the longest one is used. Empty pieces are dropped.

use crate::error::{Result, StringMatchError};
use crate::tokenizer::{finish, Tokenizer};

/// Splits a string on a set of delimiter strings
///
/// ```
/// use stringmatching::tokenizer::{DelimiterTokenizer, Tokenizer};
///
/// let tok = DelimiterTokenizer::new(["$#$"]).unwrap();
/// assert_eq!(vec!["data", "science"], tok.tokenize("data$#$science"));
/// ```
#[derive(Debug, Clone)]
pub struct DelimiterTokenizer {
    // longest first
    delims: Vec<String>,
    return_set: bool,
}

impl Default for DelimiterTokenizer {
    fn default() -> Self {
        DelimiterTokenizer {
            delims: vec![" ".to_owned()],
            return_set: false,
        }
    }
}

impl DelimiterTokenizer {
    /// Fails with [`StringMatchError::InvalidParameter`] if the set is empty
    /// or contains an empty delimiter
    pub fn new<I, S>(delim_set: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(DelimiterTokenizer {
            delims: prepare_delims(delim_set)?,
            return_set: false,
        })
    }

    #[must_use]
    pub fn with_return_set(mut self, return_set: bool) -> Self {
        self.return_set = return_set;
        self
    }

    pub fn delim_set(&self) -> &[String] {
        &self.delims
    }

    pub fn set_delim_set<I, S>(&mut self, delim_set: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.delims = prepare_delims(delim_set)?;
        Ok(())
    }

    fn delim_at(&self, rest: &str) -> Option<usize> {
        self.delims
            .iter()
            .find(|delim| rest.starts_with(delim.as_str()))
            .map(String::len)
    }
}

fn prepare_delims<I, S>(delim_set: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut delims: Vec<String> = delim_set.into_iter().map(Into::into).collect();
    if delims.is_empty() {
        return Err(StringMatchError::invalid_parameter(
            "delim_set",
            "must contain at least one delimiter",
        ));
    }
    if delims.iter().any(String::is_empty) {
        return Err(StringMatchError::invalid_parameter(
            "delim_set",
            "delimiters must not be empty",
        ));
    }
    delims.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    delims.dedup();
    Ok(delims)
}

impl Tokenizer for DelimiterTokenizer {
    fn tokenize(&self, input: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut start = 0;
        let mut pos = 0;
        while pos < input.len() {
            let rest = &input[pos..];
            if let Some(delim_len) = self.delim_at(rest) {
                if start < pos {
                    tokens.push(input[start..pos].to_owned());
                }
                pos += delim_len;
                start = pos;
            } else {
                pos += rest.chars().next().map_or(1, char::len_utf8);
            }
        }
        if start < input.len() {
            tokens.push(input[start..].to_owned());
        }
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
    fn delimiter_valid_input() {
        let tok = DelimiterTokenizer::default();
        assert_eq!(&[" ".to_owned()][..], tok.delim_set());
        assert!(tok.tokenize("").is_empty());
        assert_eq!(vec!["data", "science"], tok.tokenize("data science"));
        assert_eq!(vec!["data", "science"], tok.tokenize("  data   science "));

        let tok = DelimiterTokenizer::new([",", "."]).unwrap();
        assert_eq!(
            vec!["data", "science", "data", "integration"],
            tok.tokenize("data,science.data,integration.")
        );

        let tok = DelimiterTokenizer::new(["*", "."]).unwrap();
        assert_eq!(vec!["ab cd", "ef", "bb", " gg"], tok.tokenize("ab cd*ef.*bb. gg."));
    }

    #[test]
    fn delimiter_multichar() {
        let tok = DelimiterTokenizer::new(["..", "ab"]).unwrap();
        assert_eq!(
            vec![" cd", "ef", "bb", "gg", " cd", "ef", "gh"],
            tok.tokenize("ab cd..efabbb....ggab cd..efabgh")
        );
    }

    #[test]
    fn delimiter_longest_wins() {
        let tok = DelimiterTokenizer::new(["-", "--"]).unwrap();
        assert_eq!(&["--".to_owned(), "-".to_owned()][..], tok.delim_set());
        assert_eq!(vec!["a", "b", "c"], tok.tokenize("a--b-c"));

        let tok = DelimiterTokenizer::new(["a", "ab"]).unwrap();
        assert_eq!(vec!["x", "x"], tok.tokenize("xabx"));
        assert_eq!(vec!["x", "c"], tok.tokenize("xaac"));
    }

    #[test]
    fn delimiter_multibyte_input() {
        let tok = DelimiterTokenizer::new(["虎"]).unwrap();
        assert_eq!(vec!["老", "Löwe"], tok.tokenize("老虎Löwe虎"));
    }

    #[test]
    fn delimiter_set_delim_set() {
        let mut tok = DelimiterTokenizer::default().with_return_set(true);
        tok.set_delim_set([","]).unwrap();
        assert_eq!(vec!["a b", "c"], tok.tokenize("a b,c,a b"));
        assert!(tok.set_delim_set([""]).is_err());
        assert!(tok.set_delim_set(Vec::<String>::new()).is_err());
        assert_eq!(&[",".to_owned()][..], tok.delim_set());
    }
}
