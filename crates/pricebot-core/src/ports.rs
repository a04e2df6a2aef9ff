use async_trait::async_trait;
use serde_json::Value;

use crate::{
    domain::{ChatId, Symbol},
    price::PriceRecord,
    Result,
};

/// Hexagonal port for the price provider.
///
/// Implementations report failures as [`crate::errors::HttpError`] wrapped in [`crate::Error`].
#[async_trait]
pub trait PriceSource: Send + Sync {
    async fn fetch_price(&self, symbol: &Symbol) -> Result<PriceRecord>;
}

/// Hexagonal port for the messaging platform's send API.
///
/// Returns the platform's decoded response (or `{"raw": <body>}` when it was not JSON).
#[async_trait]
pub trait MessageSender: Send + Sync {
    async fn send(&self, token: &str, chat_id: &ChatId, text: &str) -> Result<Value>;
}
