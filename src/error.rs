use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingEquals,
    IncompleteEscape,
    UnterminatedQuote,
}

/// A malformed option string. Every variant is terminal for the parse.
///
/// Offsets count characters, not bytes, from the start of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A key was not followed by `=`. `offset` points at the key's first character.
    #[error("missing \"=\" after {key:?} in connection info string")]
    MissingEquals { key: String, offset: usize },

    /// An unquoted value ended with a lone backslash.
    #[error("missing character after backslash")]
    IncompleteEscape { offset: usize },

    /// A quoted value was never closed. `offset` points at the opening quote.
    #[error("unterminated quoted string literal in connection string")]
    UnterminatedQuote { offset: usize },
}

impl Error {
    pub fn missing_equals(key: impl Into<String>, offset: usize) -> Self {
        Self::MissingEquals {
            key: key.into(),
            offset,
        }
    }

    pub fn incomplete_escape(offset: usize) -> Self {
        Self::IncompleteEscape { offset }
    }

    pub fn unterminated_quote(offset: usize) -> Self {
        Self::UnterminatedQuote { offset }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingEquals { .. } => ErrorKind::MissingEquals,
            Error::IncompleteEscape { .. } => ErrorKind::IncompleteEscape,
            Error::UnterminatedQuote { .. } => ErrorKind::UnterminatedQuote,
        }
    }

    pub fn offset(&self) -> usize {
        match self {
            Error::MissingEquals { offset, .. }
            | Error::IncompleteEscape { offset }
            | Error::UnterminatedQuote { offset } => *offset,
        }
    }
}

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("key {key:?} cannot be written to a connection info string")]
    InvalidKey { key: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum FromStrError {
    #[error(transparent)]
    Parse(#[from] Error),

    #[error(transparent)]
    Deserialize(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    fn test_display_matches_driver_messages() {
        assert_eq!(
            Error::missing_equals("dbname", 0).to_string(),
            r#"missing "=" after "dbname" in connection info string"#
        );
        assert_eq!(
            Error::incomplete_escape(7).to_string(),
            "missing character after backslash"
        );
        assert_eq!(
            Error::unterminated_quote(18).to_string(),
            "unterminated quoted string literal in connection string"
        );
    }

    #[rstest::rstest]
    fn test_kind_and_offset() {
        let err = Error::missing_equals("user", 4);
        assert_eq!(err.kind(), ErrorKind::MissingEquals);
        assert_eq!(err.offset(), 4);

        let err = Error::unterminated_quote(11);
        assert_eq!(err.kind(), ErrorKind::UnterminatedQuote);
        assert_eq!(err.offset(), 11);
    }

    #[rstest::rstest]
    fn test_encode_error_message() {
        let err = EncodeError::InvalidKey {
            key: "a b".to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"key "a b" cannot be written to a connection info string"#
        );
    }
}
