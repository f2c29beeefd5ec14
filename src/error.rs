//! Error types for the fetch and command layers
//!
//! Provides unified error handling using thiserror. The cache itself has no
//! error taxonomy: adds cannot fail and gets signal absence with `Option`.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for everything outside the cache.
///
/// Network failures, non-success status codes, and decode failures are
/// distinct conditions, reported to the user rather than retried.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level HTTP failure
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("unsuccessful status code {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The response (or cached) bytes did not decode as the expected shape
    #[error("error decoding response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A command was invoked without its required argument
    #[error("{0}")]
    MissingArgument(&'static str),

    /// Reading the prompt or writing output failed
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let err = PokedexError::Status {
            url: "https://pokeapi.co/api/v2/pokemon/mewthree".to_string(),
            status: reqwest::StatusCode::NOT_FOUND,
        };

        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("mewthree"));
    }

    #[test]
    fn test_io_error_converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = PokedexError::from(io_err);

        assert!(matches!(err, PokedexError::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_slice::<crate::models::Pokemon>(b"not json").unwrap_err();
        let err = PokedexError::from(serde_err);

        assert!(matches!(err, PokedexError::Decode(_)));
    }
}
