//! Core domain + application logic for pricebot.
//!
//! This crate is framework-agnostic. The price API, the messaging platform and the HTTP
//! server live behind ports (traits) implemented in adapter crates.

pub mod config;
pub mod domain;
pub mod errors;
pub mod formatting;
pub mod logging;
pub mod ports;
pub mod price;
pub mod render;
pub mod utils;
pub mod webhook;

pub use errors::{Error, HttpError, Result};
