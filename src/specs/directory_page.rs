// src/specs/directory_page.rs
//! Spec for the housing laundry listing.
//!
//! Every room is an anchor inside the page's content area:
//! `<div class="content-area"><ul><li><a href="/laundry/commons">Commons</a></li>…`
//!
//! Link targets are resolved against the listing's own URL so relative hrefs work.

use scraper::Html;
use url::Url;

use crate::core::html::{attr, clean_text, selector};
use crate::error::Result;
use crate::model::RoomDirectory;

pub const ROOM_LINKS: &str = ".content-area li > a";

/// Room name → absolute room page URL, in page order.
pub fn parse_room_links(page_url: &Url, doc: &str) -> Result<RoomDirectory<String>> {
    let doc = Html::parse_document(doc);
    let links = selector(ROOM_LINKS)?;

    let mut out = RoomDirectory::new();
    for a in doc.select(&links) {
        let room = clean_text(a);
        if room.is_empty() {
            logd!("Skipping room link without text");
            continue;
        }
        let href = page_url.join(attr(a, "href")?)?;
        if let Some(prev) = out.insert(room, String::from(href)) {
            logd!("Duplicate room link, replacing {}", prev);
        }
    }
    Ok(out)
}
