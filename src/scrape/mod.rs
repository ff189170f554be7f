// src/scrape/mod.rs
mod client;

pub use client::LaundryClient;
