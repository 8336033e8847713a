//! Error type for the crate's fallible parsing paths.
//!
//! Matching, skip checks, and the kind predicates are total functions and
//! never error; only string-to-enum conversion can fail.

/// Errors produced by `mediakind`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A string did not name any known format identifier.
    #[error("unknown format identifier: {0}")]
    UnknownIdentifier(String),
}

/// Result type alias using the crate error.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_offending_token() {
        let err = Error::UnknownIdentifier("qexp".into());
        assert_eq!(err.to_string(), "unknown format identifier: qexp");
    }
}
