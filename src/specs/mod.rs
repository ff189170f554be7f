// src/specs/mod.rs
//! # Page specs
//!
//! One module per remote page. Each spec knows *where the data lives in the HTML* and
//! turns a fetched document into model values. Specs never touch the network; the
//! `scrape` layer fetches and hands them the body, so every spec is testable offline
//! against a saved page.
//!
//! ## Typical call chain
//! ```text
//! caller → scrape::LaundryClient::room(id) → net GET → specs::status_page::parse_room()
//!                                                   ↘ specs::status_page::parse_machine_row() per row
//! caller → LaundryClient::room_to_identifier_map()
//!            → specs::directory_page::parse_room_links()   (housing listing)
//!            → specs::room_page::parse_identifier()        (one per room page)
//! ```
//!
//! ## Pages
//! - `status_page` – the WashAlert table: first row is the room name, rows with a
//!   `class` attribute are machines with `.name`, `.type`, `.status`, `.time` cells.
//! - `directory_page` – the housing listing: `.content-area li > a` anchors.
//! - `room_page` – a room's housing page embedding the status page in an `<iframe>`
//!   whose `src` ends in the room identifier.
pub mod directory_page;
pub mod room_page;
pub mod status_page;
