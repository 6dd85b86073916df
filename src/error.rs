use thiserror::Error;

/// Errors that can occur while building or querying a [`crate::tree::SuffixTree`].
#[derive(Debug, Error)]
pub enum MiningError {
    /// A string passed to `add_string` contains the reserved terminator character.
    #[error("input contains the reserved terminator character '{terminator}'")]
    InputContainsTerminator {
        /// The terminator character that was found in the caller's input.
        terminator: char,
    },

    /// A `string_id` argument does not index the string table.
    #[error("string id {id} is out of range (table holds {len} strings)")]
    InvalidStringId {
        /// The offending id.
        id: usize,
        /// Number of strings currently in the table.
        len: usize,
    },

    /// `max_mismatch_rate` was outside the valid `[0, 1]` range.
    #[error("mismatch rate {rate} is outside the valid range [0, 1]")]
    InvalidMismatchRate {
        /// The offending rate.
        rate: f64,
    },
}

/// A specialized `Result` type for suffix tree operations.
pub type Result<T> = std::result::Result<T, MiningError>;

impl MiningError {
    pub(crate) fn input_contains_terminator(terminator: char) -> Self {
        Self::InputContainsTerminator { terminator }
    }

    pub(crate) fn invalid_string_id(id: usize, len: usize) -> Self {
        Self::InvalidStringId { id, len }
    }

    pub(crate) fn invalid_mismatch_rate(rate: f64) -> Self {
        Self::InvalidMismatchRate { rate }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MiningError::input_contains_terminator('$');
        assert_eq!(
            err.to_string(),
            "input contains the reserved terminator character '$'"
        );

        let err = MiningError::invalid_string_id(3, 2);
        assert_eq!(err.to_string(), "string id 3 is out of range (table holds 2 strings)");

        let err = MiningError::invalid_mismatch_rate(1.5);
        assert_eq!(err.to_string(), "mismatch rate 1.5 is outside the valid range [0, 1]");
    }
}
