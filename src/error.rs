// src/error.rs
//! Error types for laundry room scraping.

use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure or a non-2xx response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Not found: {what}")]
    NotFound { what: String },

    #[error("Invalid selector: {0}")]
    Selector(String),

    #[error("Invalid remaining time {text:?}")]
    RemainingTime {
        text: String,
        #[source]
        source: ParseIntError,
    },

    /// Raised by the row extractor. Room aggregation drops such rows instead of failing.
    #[error("Unknown machine type {0:?}")]
    UnknownMachineType(String),

    #[error("Identifier source {src:?} is shorter than {len} characters")]
    ShortIdentifier { src: String, len: usize },
}

impl Error {
    pub fn not_found(what: impl Into<String>) -> Self {
        Error::NotFound { what: what.into() }
    }
}
