//! Request handlers.
//!
//! Each handler is a thin adapter: extract the request, call into `pricebot-core`, and
//! always answer 200 with whatever the core produced.

mod price_page;
mod webhook;

pub use price_page::{price_page, PriceQuery};
pub use webhook::webhook;

pub async fn health() -> &'static str {
    "OK"
}
