//! Base64 data-URL payload handling.
//!
//! Uploaded images travel as `data:image/jpeg;base64,<payload>`
//! strings. Clients sometimes append `#fragment` markers for UI
//! bookkeeping and may introduce whitespace when round-tripping
//! through text fields, so decoding strips both before validating.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;

/// Why a data-URL payload failed to decode.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DataUrlError {
    /// Nothing left after stripping the header, fragment, and whitespace.
    #[error("empty base64 payload")]
    Empty,

    /// The payload is not valid base64.
    #[error("invalid base64 encoding")]
    InvalidBase64,
}

/// Extract and decode the base64 payload of a data URL.
///
/// Accepts bare base64 as well: the `data:...;base64,` header is
/// optional. Anything after a `#` is dropped, as is all whitespace.
///
/// # Errors
///
/// Returns [`DataUrlError::Empty`] if no payload remains after
/// cleaning, and [`DataUrlError::InvalidBase64`] if decoding fails.
pub fn decode_payload(raw: &str) -> Result<Vec<u8>, DataUrlError> {
    let payload = raw.split_once(',').map_or(raw, |(_, rest)| rest);
    let payload = payload.split_once('#').map_or(payload, |(head, _)| head);
    let cleaned: String = payload.chars().filter(|c| !c.is_whitespace()).collect();

    if cleaned.is_empty() {
        return Err(DataUrlError::Empty);
    }

    B64.decode(cleaned.as_bytes())
        .map_err(|_| DataUrlError::InvalidBase64)
}

/// Wrap encoded JPEG bytes in a data URL for direct display.
#[must_use]
pub fn encode_jpeg_data_url(jpeg_bytes: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", B64.encode(jpeg_bytes))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_payload_with_header() {
        let url = format!("data:image/png;base64,{}", B64.encode(b"hello"));
        assert_eq!(decode_payload(&url).unwrap(), b"hello");
    }

    #[test]
    fn decodes_bare_base64() {
        assert_eq!(decode_payload(&B64.encode(b"raw")).unwrap(), b"raw");
    }

    #[test]
    fn strips_fragment_marker() {
        let url = format!("data:image/png;base64,{}#variant-2", B64.encode(b"img"));
        assert_eq!(decode_payload(&url).unwrap(), b"img");
    }

    #[test]
    fn strips_whitespace() {
        let encoded = B64.encode(b"padded payload");
        let (head, tail) = encoded.split_at(4);
        let url = format!("data:image/png;base64,{head}\n  {tail}");
        assert_eq!(decode_payload(&url).unwrap(), b"padded payload");
    }

    #[test]
    fn empty_payload_is_rejected() {
        assert_eq!(decode_payload(""), Err(DataUrlError::Empty));
        assert_eq!(
            decode_payload("data:image/png;base64,"),
            Err(DataUrlError::Empty)
        );
        assert_eq!(
            decode_payload("data:image/png;base64,#only-a-fragment"),
            Err(DataUrlError::Empty)
        );
    }

    #[test]
    fn garbage_payload_is_rejected() {
        assert_eq!(
            decode_payload("data:image/png;base64,@@not-base64@@"),
            Err(DataUrlError::InvalidBase64)
        );
    }

    #[test]
    fn jpeg_data_url_round_trips() {
        let url = encode_jpeg_data_url(&[0xFF, 0xD8, 0xFF]);
        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(decode_payload(&url).unwrap(), vec![0xFF, 0xD8, 0xFF]);
    }
}
