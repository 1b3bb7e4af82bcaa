//! Error types for matrix construction and counting parameters.

use thiserror::Error;

/// Result type alias.
pub type Result<T> = std::result::Result<T, IepError>;

/// Everything that can go wrong before a count is computed.
///
/// All variants describe bad input; the counting formulas themselves never fail
/// on a validated [`AttributeMatrix`][crate::matrix::AttributeMatrix].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IepError {
    #[error("attribute matrix must have at least one row")]
    EmptyMatrix,

    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedMatrix { row: usize, expected: usize, found: usize },

    #[error("entry ({row}, {column}) is {value}, expected 0 or 1")]
    InvalidEntry { row: usize, column: usize, value: i64 },

    #[error("{found} attributes exceed the supported maximum of {max}")]
    TooManyAttributes { found: usize, max: usize },

    #[error("parameter `{name}` must be non-negative, got {value}")]
    NegativeParameter { name: &'static str, value: i64 },

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("count does not fit in u64")]
    Overflow,
}

/// Converts a signed counting parameter into an index, rejecting negatives.
pub(crate) fn non_negative(name: &'static str, value: i64) -> Result<usize> {
    usize::try_from(value).map_err(|_| IepError::NegativeParameter { name, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative("k", 0), Ok(0));
        assert_eq!(non_negative("k", 7), Ok(7));
        assert_eq!(
            non_negative("target_k", -1),
            Err(IepError::NegativeParameter {
                name: "target_k",
                value: -1
            })
        );
    }

    #[test]
    fn test_messages() {
        let e = IepError::InvalidEntry { row: 1, column: 2, value: 5 };
        assert_eq!(e.to_string(), "entry (1, 2) is 5, expected 0 or 1");
        let e = IepError::RaggedMatrix { row: 3, expected: 4, found: 2 };
        assert_eq!(e.to_string(), "row 3 has 2 entries, expected 4");
    }
}
