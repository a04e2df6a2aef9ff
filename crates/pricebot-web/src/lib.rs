//! HTTP surface (axum).
//!
//! Serves the price lookup page and the messaging-platform webhook on top of `pricebot-core`.

pub mod handlers;
pub mod router;

pub use router::{build_router, serve, AppState};
