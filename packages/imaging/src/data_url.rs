//! Base64 data-URL encoding and parsing.
//!
//! A data URL is self-describing (`data:<mime>;base64,<payload>`) so the compressed
//! avatar can be previewed with a plain `img` element and transported as a string
//! field without a separate content-type channel.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode raw bytes as a base64 data URL with the given MIME type.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Parse a base64 data URL back into its MIME type and raw bytes.
///
/// Returns `None` for anything that is not a well-formed `data:<mime>;base64,<payload>`
/// string, including payloads that are not valid base64.
pub fn parse_data_url(url: &str) -> Option<(String, Vec<u8>)> {
    let rest = url.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    if mime.is_empty() {
        return None;
    }
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime.to_string(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_roundtrip() {
        let bytes = b"hello avatar";
        let url = encode_data_url("image/jpeg", bytes);
        assert!(url.starts_with("data:image/jpeg;base64,"));
        let (mime, decoded) = parse_data_url(&url).unwrap();
        assert_eq!(mime, "image/jpeg");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_parse_rejects_non_data_url() {
        assert!(parse_data_url("https://example.com/a.png").is_none());
        assert!(parse_data_url("data:;base64,aGk=").is_none());
        assert!(parse_data_url("data:image/png,plain").is_none());
    }

    #[test]
    fn test_parse_rejects_invalid_base64() {
        assert!(parse_data_url("data:image/png;base64,!!not-base64!!").is_none());
    }
}
