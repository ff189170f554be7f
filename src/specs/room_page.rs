// src/specs/room_page.rs
//! Spec for a room's housing page: the status page is embedded as
//! `<iframe src="…washalertweb.aspx?location=<uuid>">` and the identifier is the tail of `src`.

use scraper::Html;

use crate::config::consts::IDENTIFIER_LEN;
use crate::core::html::{attr, first_in_doc};
use crate::core::sanitize::tail_chars;
use crate::error::{Error, Result};

pub fn parse_identifier(doc: &str) -> Result<String> {
    let doc = Html::parse_document(doc);
    let src = attr(first_in_doc(&doc, "iframe")?, "src")?.trim();

    tail_chars(src, IDENTIFIER_LEN)
        .map(String::from)
        .ok_or_else(|| Error::ShortIdentifier { src: s!(src), len: IDENTIFIER_LEN })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_trailing_identifier_of_first_iframe() {
        let html = r#"<div><iframe src="http://quantum.example/washalertweb.aspx?location=0b9a4c3e-7f1d-4a2b-9c8e-1d2f3a4b5c6d"></iframe>
                      <iframe src="http://other.example/?location=ffffffff-ffff-ffff-ffff-ffffffffffff"></iframe></div>"#;
        assert_eq!(parse_identifier(html).unwrap(), "0b9a4c3e-7f1d-4a2b-9c8e-1d2f3a4b5c6d");
    }

    #[test]
    fn missing_iframe_is_not_found() {
        assert!(matches!(parse_identifier("<p>No frame</p>"), Err(Error::NotFound { .. })));
    }

    #[test]
    fn iframe_without_src_is_not_found() {
        assert!(matches!(parse_identifier("<iframe></iframe>"), Err(Error::NotFound { .. })));
    }

    #[test]
    fn short_src_is_rejected() {
        let err = parse_identifier(r#"<iframe src="?location=abc"></iframe>"#).unwrap_err();
        assert!(matches!(err, Error::ShortIdentifier { len: 36, .. }));
    }
}
