// src/model/mod.rs
//! Read model handed to callers: machines, rooms and the room directory.
//!
//! Everything here is plain data plus pure queries. Fetching and HTML parsing live in
//! `scrape` and `specs`.

pub mod directory;
pub mod machine;
pub mod room;

pub use directory::RoomDirectory;
pub use machine::{Machine, MachineKind};
pub use room::Room;
