use std::sync::Arc;

use serde_json::Value;

use crate::{
    config::BotToken,
    domain::{ChatId, Symbol},
    formatting::{error_message, price_message, HELP_TEXT},
    ports::{MessageSender, PriceSource},
    utils::best_effort,
    webhook::{
        ack::OutboundAck,
        extract::{classify, extract, Intent},
    },
    Result,
};

/// Routes one inbound update to a reply.
///
/// Stateless: every call is independent, and the same update handled twice is answered twice.
pub struct WebhookDispatcher {
    token: BotToken,
    prices: Arc<dyn PriceSource>,
    sender: Arc<dyn MessageSender>,
}

impl WebhookDispatcher {
    pub fn new(
        token: BotToken,
        prices: Arc<dyn PriceSource>,
        sender: Arc<dyn MessageSender>,
    ) -> Self {
        Self {
            token,
            prices,
            sender,
        }
    }

    /// Handle a raw webhook body. Never fails: every outcome is encoded in the ack.
    pub async fn handle_update(&self, raw_body: &[u8]) -> OutboundAck {
        let Some(token) = self.token.configured() else {
            tracing::warn!("update rejected: bot token is not configured");
            return OutboundAck::failure("missing token");
        };

        let payload = match serde_json::from_slice::<Value>(raw_body) {
            Ok(v @ Value::Object(_)) => v,
            _ => return self.health_check().await,
        };

        let update = extract(&payload);
        let Some(chat_id) = update.chat_id else {
            tracing::info!("update has no chat id; nothing to reply to");
            return OutboundAck::no_chat_id(payload);
        };

        let intent = classify(&update.text);
        tracing::info!(chat_id = %chat_id, action = intent.action(), "routing update");

        match self.reply(token, &chat_id, intent).await {
            Ok(sent) => OutboundAck::replied(intent.action(), sent),
            Err(e) => {
                let msg = e.to_string();
                tracing::warn!(chat_id = %chat_id, error = %msg, "reply failed");
                best_effort(
                    "error notification",
                    self.sender.send(token, &chat_id, &error_message(&msg)),
                )
                .await;
                OutboundAck::failure(msg)
            }
        }
    }

    async fn reply(&self, token: &str, chat_id: &ChatId, intent: Intent) -> Result<Value> {
        let text = match intent {
            Intent::Start => {
                let price = self.prices.fetch_price(&Symbol::default()).await?;
                price_message(&price)
            }
            Intent::Help => HELP_TEXT.to_string(),
        };
        self.sender.send(token, chat_id, &text).await
    }

    /// Non-update bodies (empty GET, garbage) answer with the current default price.
    async fn health_check(&self) -> OutboundAck {
        match self.prices.fetch_price(&Symbol::default()).await {
            Ok(price) => OutboundAck::ready(price),
            Err(e) => OutboundAck::failure(e.to_string()),
        }
    }
}
