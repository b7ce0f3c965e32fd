//! Error types for the Devtool core library
//!
//! Every transformer reports failure through the single [`Error`] enum
//! defined here. The `Display` output of a variant is the exact message a
//! presentation layer shows to the user; [`Error::kind`] exposes the
//! machine-readable classification alongside it.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Devtool transformations
#[derive(Error, Debug)]
pub enum Error {
    /// Input could not be parsed as JSON
    #[error("Invalid JSON format")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    /// Input was not valid standard Base64, or decoded to non-text bytes
    #[error("Error decoding - invalid Base64")]
    InvalidBase64 { detail: String },

    /// Input text could not be encoded to Base64
    ///
    /// UTF-8 input is always encodable, so this is currently unreachable
    /// from [`crate::transform::base64::encode`]; the kind is kept so the
    /// taxonomy stays closed over every operation.
    #[error("Error encoding")]
    EncodeError { detail: String },

    /// A percent-escape in the input was malformed
    #[error("Error decoding URL")]
    InvalidEncoding { detail: String },

    /// Input was not an integer count of epoch seconds, or fell outside
    /// the representable date range
    #[error("Invalid timestamp")]
    InvalidTimestamp { input: String },

    /// Input did not match any accepted date/time format
    #[error("Invalid date")]
    InvalidDate { input: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Machine-readable classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Malformed JSON input
    InvalidJson,
    /// Malformed Base64 input
    InvalidBase64,
    /// Unencodable input
    EncodeError,
    /// Malformed percent-encoding
    InvalidEncoding,
    /// Malformed epoch timestamp
    InvalidTimestamp,
    /// Malformed calendar date
    InvalidDate,
}

impl Error {
    /// The classification of this error, independent of its message
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidJson { .. } => ErrorKind::InvalidJson,
            Error::InvalidBase64 { .. } => ErrorKind::InvalidBase64,
            Error::EncodeError { .. } => ErrorKind::EncodeError,
            Error::InvalidEncoding { .. } => ErrorKind::InvalidEncoding,
            Error::InvalidTimestamp { .. } => ErrorKind::InvalidTimestamp,
            Error::InvalidDate { .. } => ErrorKind::InvalidDate,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidJson => write!(f, "InvalidJson"),
            ErrorKind::InvalidBase64 => write!(f, "InvalidBase64"),
            ErrorKind::EncodeError => write!(f, "EncodeError"),
            ErrorKind::InvalidEncoding => write!(f, "InvalidEncoding"),
            ErrorKind::InvalidTimestamp => write!(f, "InvalidTimestamp"),
            ErrorKind::InvalidDate => write!(f, "InvalidDate"),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::InvalidJson { source: err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_is_verbatim_user_message() {
        let err = Error::InvalidBase64 {
            detail: "invalid byte at offset 3".to_string(),
        };
        assert_eq!(err.to_string(), "Error decoding - invalid Base64");

        let err = Error::InvalidTimestamp {
            input: "12.5".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid timestamp");

        let err = Error::InvalidDate {
            input: "not a date".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid date");

        let err = Error::InvalidEncoding {
            detail: "truncated escape at offset 0".to_string(),
        };
        assert_eq!(err.to_string(), "Error decoding URL");
    }

    #[test]
    fn test_kind_matches_variant() {
        let err: Error = serde_json::from_str::<serde_json::Value>("{bad}")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::InvalidJson);
        assert_eq!(err.to_string(), "Invalid JSON format");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ErrorKind::InvalidJson.to_string(), "InvalidJson");
        assert_eq!(ErrorKind::InvalidBase64.to_string(), "InvalidBase64");
        assert_eq!(ErrorKind::InvalidEncoding.to_string(), "InvalidEncoding");
    }

    #[test]
    fn test_kind_serializes_as_name() {
        let json = serde_json::to_string(&ErrorKind::InvalidTimestamp).unwrap();
        assert_eq!(json, "\"InvalidTimestamp\"");
    }
}
