// src/core/html.rs
//! Small helpers over `scraper` shared by the page specs.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::{normalize_entities, normalize_ws};
use crate::error::{Error, Result};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| Error::Selector(s!(css)))
}

/// First element in the document matching `css`.
pub fn first_in_doc<'a>(doc: &'a Html, css: &str) -> Result<ElementRef<'a>> {
    let sel = selector(css)?;
    doc.select(&sel)
        .next()
        .ok_or_else(|| Error::not_found(join!("element matching `", css, "`")))
}

/// First descendant of `el` matching `css`.
pub fn first_in<'a>(el: ElementRef<'a>, css: &str) -> Result<ElementRef<'a>> {
    let sel = selector(css)?;
    el.select(&sel)
        .next()
        .ok_or_else(|| Error::not_found(join!("element matching `", css, "`")))
}

pub fn attr<'a>(el: ElementRef<'a>, name: &str) -> Result<&'a str> {
    el.value().attr(name).ok_or_else(|| {
        Error::not_found(join!("attribute `", name, "` on <", el.value().name(), ">"))
    })
}

/// Every text node trimmed, empty ones dropped, then glued together with no separator.
pub fn stripped_text(el: ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

/// Full text content exactly as it appears in the markup.
pub fn raw_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text content with `&nbsp;` and runs of whitespace folded to single spaces.
pub fn clean_text(el: ElementRef<'_>) -> String {
    normalize_ws(&normalize_entities(&raw_text(el)))
}
