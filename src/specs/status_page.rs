// src/specs/status_page.rs
//! Spec for the WashAlert status page.
//!
//! Layout:
//! ```html
//! <table>
//!   <tr><td>Room Name</td></tr>
//!   <tr class="row"><td class="name">W<b>1</b></td><td class="type">Washer</td>
//!       <td class="status">Available</td><td class="time"></td></tr>
//!   ...
//! ```
//! Rows without a `class` attribute are headers and are skipped.

use std::time::Duration;

use scraper::{ElementRef, Html};

use crate::config::consts::DEFAULT_ROOM_NAME;
use crate::core::html::{clean_text, first_in, first_in_doc, raw_text, selector, stripped_text};
use crate::error::{Error, Result};
use crate::model::{Machine, MachineKind, Room};

/// Build a room from a status page body.
///
/// Fails if the page has no table or a machine row is malformed. Rows whose type is
/// neither washer nor dryer are dropped.
pub fn parse_room(identifier: &str, doc: &str) -> Result<Room> {
    let doc = Html::parse_document(doc);
    let table = first_in_doc(&doc, "table")?;
    let rows = selector("tr")?;

    let mut room = Room::new(identifier, room_name(table));
    for row in table.select(&rows) {
        if row.value().attr("class").is_none() {
            continue;
        }
        match parse_machine_row(row) {
            Ok(machine) => room.push(machine),
            Err(Error::UnknownMachineType(kind)) => {
                logd!("Skipping machine row with unknown type {:?}", kind);
            }
            Err(e) => return Err(e),
        }
    }

    logd!(
        "Parsed room {:?}: {} washers, {} dryers",
        room.name(),
        room.washers().len(),
        room.dryers().len()
    );
    Ok(room)
}

/// First row's first cell; the whole row if it has no cells.
fn room_name(table: ElementRef<'_>) -> String {
    let name = first_in(table, "tr")
        .map(|row| clean_text(first_in(row, "td, th").unwrap_or(row)))
        .unwrap_or_default();
    if name.is_empty() { s!(DEFAULT_ROOM_NAME) } else { name }
}

/// Extract one machine from a row with `.name`, `.type`, `.status` and `.time` cells.
pub fn parse_machine_row(row: ElementRef<'_>) -> Result<Machine> {
    let name = stripped_text(first_in(row, ".name")?);
    let kind: MachineKind = raw_text(first_in(row, ".type")?).parse()?;
    let status = raw_text(first_in(row, ".status")?);
    let minutes = parse_minutes(&stripped_text(first_in(row, ".time")?))?;

    Ok(Machine::new(name, kind, status, Duration::from_secs(u64::from(minutes) * 60)))
}

/// `"12 minutes"` → 12, `""` → 0. Tokens past `u32::MAX` are rejected.
pub fn parse_minutes(text: &str) -> Result<u32> {
    let Some(token) = text.split_whitespace().next() else {
        return Ok(0);
    };
    token.parse().map_err(|source| Error::RemainingTime { text: s!(text), source })
}
