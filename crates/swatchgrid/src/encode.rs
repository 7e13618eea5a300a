//! Data-URI encoding for inline SVG previews.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const PREFIX: &str = "data:image/svg+xml;base64,";

/// Wrap an SVG document in a base64 `data:` URI usable as an image source.
pub fn svg_data_uri(svg: &str) -> String {
    format!("{}{}", PREFIX, STANDARD.encode(svg.as_bytes()))
}

/// Recover the SVG document from a data URI produced by [`svg_data_uri`].
///
/// Returns `None` for URIs with a different MIME prefix or an invalid
/// payload.
pub fn svg_from_data_uri(uri: &str) -> Option<String> {
    let payload = uri.strip_prefix(PREFIX)?;
    let bytes = STANDARD.decode(payload).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_round_trips() {
        let doc = "<svg xmlns=\"http://www.w3.org/2000/svg\"/>";
        let uri = svg_data_uri(doc);
        assert!(uri.starts_with("data:image/svg+xml;base64,"));
        assert_eq!(svg_from_data_uri(&uri).as_deref(), Some(doc));
    }

    #[test]
    fn decode_rejects_foreign_uris() {
        assert_eq!(svg_from_data_uri("data:image/png;base64,AAAA"), None);
        assert_eq!(svg_from_data_uri("data:image/svg+xml;base64,не base64"), None);
    }
}
