// src/lib.rs
//! Scraper for WashAlert laundry room status pages.
//!
//! ```no_run
//! use laundry_scrape::{ClientOptions, LaundryClient};
//!
//! let client = LaundryClient::new(ClientOptions::default())?;
//! for (_room, id) in client.room_to_identifier_map(None)? {
//!     println!("{}", client.room(&id)?);
//! }
//! # Ok::<(), laundry_scrape::Error>(())
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod progress;
pub mod scrape;
pub mod specs;

pub use config::{ClientOptions, Endpoints};
pub use error::{Error, Result};
pub use model::{Machine, MachineKind, Room, RoomDirectory};
pub use progress::{NullProgress, Progress};
pub use scrape::LaundryClient;
