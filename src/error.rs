//! Error types shared by all measures and tokenizers.

use thiserror::Error;

/// Result type alias for `stringmatching` operations.
pub type Result<T> = std::result::Result<T, StringMatchError>;

/// Errors raised by similarity measures and tokenizers.
///
/// Every error is raised before any computation starts, so a measure either
/// returns a complete score or fails immediately.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StringMatchError {
    /// A required argument was absent.
    #[error("{0} argument cannot be None")]
    InvalidInput(&'static str),

    /// The sequences must have the same length (Hamming distance).
    #[error("undefined for sequences of unequal length ({len1} != {len2})")]
    LengthMismatch { len1: usize, len2: usize },

    /// A configuration value is outside of its valid domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: &'static str,
    },

    /// The inner similarity function returned a value outside of [0, 1].
    #[error("similarity function returned {score}, expected a value in the range [0, 1]")]
    InvalidSimilarityFunction { score: f64 },
}

impl StringMatchError {
    pub(crate) const fn invalid_parameter(name: &'static str, reason: &'static str) -> Self {
        StringMatchError::InvalidParameter { name, reason }
    }
}

/// Unwraps a pair of nullable arguments, failing with
/// [`StringMatchError::InvalidInput`] on the first absent one.
pub(crate) fn require_pair<T>(first: Option<T>, second: Option<T>) -> Result<(T, T)> {
    match (first, second) {
        (None, _) => Err(StringMatchError::InvalidInput("First")),
        (_, None) => Err(StringMatchError::InvalidInput("Second")),
        (Some(first), Some(second)) => Ok((first, second)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_pair_reports_position() {
        assert_eq!(Ok(("a", "b")), require_pair(Some("a"), Some("b")));
        assert_eq!(
            Err(StringMatchError::InvalidInput("First")),
            require_pair(None, Some("b"))
        );
        assert_eq!(
            Err(StringMatchError::InvalidInput("Second")),
            require_pair(Some("a"), None)
        );
        assert_eq!(
            Err(StringMatchError::InvalidInput("First")),
            require_pair::<&str>(None, None)
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            "undefined for sequences of unequal length (3 != 4)",
            StringMatchError::LengthMismatch { len1: 3, len2: 4 }.to_string()
        );
        assert_eq!(
            "invalid parameter `qval`: must be at least 1",
            StringMatchError::invalid_parameter("qval", "must be at least 1").to_string()
        );
    }
}
