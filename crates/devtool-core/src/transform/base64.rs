//! Base64 encoding and decoding of text
//!
//! Uses the standard alphabet (`A-Z a-z 0-9 + /`) with `=` padding. Input is
//! encoded from its UTF-8 byte representation, so every Rust string is
//! encodable; decoding is strict and rejects invalid characters, incorrect
//! padding, and payloads that do not decode to valid UTF-8 text.
//!
//! Copyright (c) 2025 Devtool Team
//! Licensed under the Apache-2.0 license

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use crate::error::{Error, Result};

/// Encode text to standard Base64.
///
/// The input's UTF-8 bytes are encoded, which makes this total over `&str`;
/// the fallible signature is kept so every codec exposes the same contract.
pub fn encode(input: &str) -> Result<String> {
    debug!(len = input.len(), "encoding to Base64");
    Ok(STANDARD.encode(input.as_bytes()))
}

/// Decode standard Base64 back to text.
///
/// # Errors
///
/// Returns [`Error::InvalidBase64`] when the input contains characters
/// outside the standard alphabet, carries incorrect padding, or decodes to
/// bytes that are not valid UTF-8.
pub fn decode(input: &str) -> Result<String> {
    let bytes = STANDARD.decode(input).map_err(|e| Error::InvalidBase64 {
        detail: e.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|e| Error::InvalidBase64 {
        detail: format!("decoded payload is not valid UTF-8: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_encode_known_vector() {
        assert_eq!(encode("hello").unwrap(), "aGVsbG8=");
    }

    #[test]
    fn test_decode_known_vector() {
        assert_eq!(decode("aGVsbG8=").unwrap(), "hello");
    }

    #[test]
    fn test_decode_rejects_invalid_characters() {
        let err = decode("!!!").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBase64);
        assert_eq!(err.to_string(), "Error decoding - invalid Base64");
    }

    #[test]
    fn test_decode_rejects_incorrect_padding() {
        assert!(decode("aGVsbG8").is_err());
        assert!(decode("aGVsbG8==").is_err());
    }

    #[test]
    fn test_decode_rejects_non_utf8_payload() {
        // 0xFF 0xFE is valid Base64 payload but not valid UTF-8 text
        let err = decode("//4=").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidBase64);
    }

    #[test]
    fn test_round_trip_multibyte_text() {
        let input = "héllo wörld \u{1F980}";
        let encoded = encode(input).unwrap();
        assert_eq!(decode(&encoded).unwrap(), input);
    }

    #[test]
    fn test_empty_input_round_trips() {
        assert_eq!(encode("").unwrap(), "");
        assert_eq!(decode("").unwrap(), "");
    }
}
