//! HTTP adapters (reqwest).
//!
//! Implements the `pricebot-core` ports over the price API and the bot send API.

use pricebot_core::{config::Config, errors::Error, HttpError, Result};

pub mod bot_api;
pub mod price_api;

pub use bot_api::BotApiMessenger;
pub use price_api::PriceApiClient;

/// Shared client: connect/overall timeouts and User-Agent from config. No retries.
pub fn http_client(cfg: &Config) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(cfg.connect_timeout)
        .timeout(cfg.request_timeout)
        .user_agent(cfg.user_agent.as_str())
        .build()
        .map_err(|e| Error::Config(format!("http client build failed: {e}")))
}

pub(crate) fn transport(e: reqwest::Error) -> Error {
    // The URL may embed the bot token; keep it out of anything user-visible.
    Error::Http(HttpError::Transport(e.without_url().to_string()))
}

pub(crate) fn check_status(status: reqwest::StatusCode) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::Http(HttpError::Status(status.as_u16())))
    }
}
