//! URL component percent-encoding and decoding
//!
//! Encoding follows the component-encoding convention: every character
//! outside the unreserved set `A-Z a-z 0-9 - _ . ~ ! * ' ( )` is
//! percent-encoded from its UTF-8 bytes. Decoding is strict: a `%` must be
//! followed by exactly two hex digits, and the decoded bytes must form valid
//! UTF-8. `+` is not treated as a space in either direction.
//!
//! Copyright (c) 2025 Devtool Team
//! Licensed under the Apache-2.0 license

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tracing::debug;

use crate::error::{Error, Result};

/// Characters percent-encoded by [`encode`]: everything except the
/// component-unreserved set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'!')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a URL component. Total; never fails.
pub fn encode(input: &str) -> String {
    utf8_percent_encode(input, COMPONENT).to_string()
}

/// Percent-decode a URL component.
///
/// The decoder is strict where the ecosystem decoders are lenient: malformed
/// escapes are rejected instead of passed through.
///
/// # Errors
///
/// Returns [`Error::InvalidEncoding`] for a `%` not followed by two hex
/// digits, or when the decoded bytes are not valid UTF-8.
pub fn decode(input: &str) -> Result<String> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16));
            let lo = bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16));
            match (hi, lo) {
                (Some(hi), Some(lo)) => {
                    out.push((hi * 16 + lo) as u8);
                    i += 3;
                }
                _ => {
                    return Err(Error::InvalidEncoding {
                        detail: format!("malformed escape at offset {i}"),
                    });
                }
            }
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }

    debug!(len = input.len(), "percent-decoded URL component");
    String::from_utf8(out).map_err(|e| Error::InvalidEncoding {
        detail: format!("decoded bytes are not valid UTF-8: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_encode_space_and_ampersand() {
        assert_eq!(encode("a b&c"), "a%20b%26c");
    }

    #[test]
    fn test_unreserved_set_passes_through() {
        let unreserved = "AZaz09-_.~!*'()";
        assert_eq!(encode(unreserved), unreserved);
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        assert_eq!(encode("a=b?c#d"), "a%3Db%3Fc%23d");
        assert_eq!(encode("100%"), "100%25");
    }

    #[test]
    fn test_multibyte_characters_encode_per_utf8_byte() {
        assert_eq!(encode("é"), "%C3%A9");
    }

    #[test]
    fn test_decode_round_trips_encode() {
        let input = "a b&c?d=e#f/g:h é\u{1F980}";
        assert_eq!(decode(&encode(input)).unwrap(), input);
    }

    #[test]
    fn test_decode_rejects_trailing_percent() {
        let err = decode("abc%").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
        assert_eq!(err.to_string(), "Error decoding URL");
    }

    #[test]
    fn test_decode_rejects_non_hex_escape() {
        assert!(decode("%zz").is_err());
        assert!(decode("a%2").is_err());
        assert!(decode("%2g").is_err());
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        let err = decode("%FF").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidEncoding);
    }

    #[test]
    fn test_plus_is_not_a_space() {
        assert_eq!(decode("a+b").unwrap(), "a+b");
        assert_eq!(encode("a+b"), "a%2Bb");
    }

    #[test]
    fn test_decode_lowercase_hex() {
        assert_eq!(decode("%c3%a9").unwrap(), "é");
    }
}
