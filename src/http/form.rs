//! Query-string and form decoding module
//!
//! Wiki titles travel inside URL path segments, so encoding and decoding
//! must agree on both ends: `+` is a literal plus in a path segment but a
//! space in query strings and form bodies.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use std::collections::HashMap;

/// Bytes that cannot appear raw inside a URL path segment. `&` is included
/// so generated hrefs never contain entity-like runs inside attribute values.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'&')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'%')
    .add(b'/');

/// Decode a raw path segment into a title. Invalid UTF-8 sequences are
/// replaced rather than rejected.
pub fn decode_path_segment(segment: &str) -> String {
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

/// Encode a title for use as a single path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT).to_string()
}

/// URL of an entry's view page.
pub fn entry_url(title: &str) -> String {
    format!("/wiki/{}", encode_path_segment(title))
}

/// URL of an entry's edit page.
pub fn edit_url(title: &str) -> String {
    format!("/wiki/{}/edit", encode_path_segment(title))
}

/// Extract a single parameter from a raw query string. Repeated keys keep
/// the last value, matching `parse_form`.
pub fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    let query = query?;
    form_urlencoded::parse(query.as_bytes())
        .filter(|(key, _)| key == name)
        .last()
        .map(|(_, value)| value.into_owned())
}

/// Parse an `application/x-www-form-urlencoded` body. Repeated keys keep
/// the last value, matching how the forms here are built.
pub fn parse_form(body: &[u8]) -> HashMap<String, String> {
    form_urlencoded::parse(body)
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_param_decodes_plus_and_percent() {
        assert_eq!(
            query_param(Some("q=hello+world"), "q").as_deref(),
            Some("hello world")
        );
        assert_eq!(
            query_param(Some("q=caf%C3%A9"), "q").as_deref(),
            Some("caf\u{e9}")
        );
    }

    #[test]
    fn test_query_param_missing() {
        assert!(query_param(Some("other=1"), "q").is_none());
        assert!(query_param(None, "q").is_none());
    }

    #[test]
    fn test_query_param_empty_value() {
        assert_eq!(query_param(Some("q="), "q").as_deref(), Some(""));
    }

    #[test]
    fn test_repeated_keys_take_last_value() {
        assert_eq!(
            query_param(Some("q=cats&q=dogs"), "q").as_deref(),
            Some("dogs")
        );
        let form = parse_form(b"content=first&content=second");
        assert_eq!(form.get("content").map(String::as_str), Some("second"));
    }

    #[test]
    fn test_parse_form_fields() {
        let form = parse_form(b"title=Category+Theory&content=Some+%23+text");
        assert_eq!(form.get("title").map(String::as_str), Some("Category Theory"));
        assert_eq!(form.get("content").map(String::as_str), Some("Some # text"));
    }

    #[test]
    fn test_entry_url_encodes_title() {
        assert_eq!(entry_url("Category Theory"), "/wiki/Category%20Theory");
        assert_eq!(entry_url("Q&A"), "/wiki/Q%26A");
        assert_eq!(edit_url("C++"), "/wiki/C++/edit");
    }

    #[test]
    fn test_path_segment_round_trip() {
        let title = "50% off / \"deal\" & more";
        let encoded = encode_path_segment(title);
        assert!(!encoded.contains(' '));
        assert!(!encoded.contains('/'));
        assert!(!encoded.contains('&'));
        assert_eq!(decode_path_segment(&encoded), title);
    }

    #[test]
    fn test_decode_keeps_literal_plus() {
        // A plus in a path segment is a plus, not a space.
        assert_eq!(decode_path_segment("C++"), "C++");
        assert_eq!(decode_path_segment("Category%20Theory"), "Category Theory");
    }
}
