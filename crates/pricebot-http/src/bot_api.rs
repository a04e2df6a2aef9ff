use async_trait::async_trait;
use serde_json::{json, Value};

use pricebot_core::{config::Config, domain::ChatId, ports::MessageSender, Result};

use crate::{check_status, http_client, transport};

/// Telegram-style bot API (`{base}/bot{token}/sendMessage`), as exposed by Rubika.
#[derive(Clone, Debug)]
pub struct BotApiMessenger {
    http: reqwest::Client,
    base: String,
}

impl BotApiMessenger {
    pub fn new(cfg: &Config) -> Result<Self> {
        Ok(Self::with_client(
            http_client(cfg)?,
            &cfg.platform_api_base,
        ))
    }

    pub fn with_client(http: reqwest::Client, base: &str) -> Self {
        Self {
            http,
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, token: &str, method: &str) -> String {
        format!("{}/bot{token}/{method}", self.base)
    }
}

#[async_trait]
impl MessageSender for BotApiMessenger {
    async fn send(&self, token: &str, chat_id: &ChatId, text: &str) -> Result<Value> {
        let resp = self
            .http
            .post(self.endpoint(token, "sendMessage"))
            .form(&[("chat_id", chat_id.as_str()), ("text", text)])
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if let Err(e) = check_status(status) {
            tracing::warn!(%chat_id, status = status.as_u16(), "sendMessage failed");
            return Err(e);
        }

        let body = resp.text().await.map_err(transport)?;
        Ok(decode_send_response(body))
    }
}

/// JSON objects/arrays are returned as-is; anything else is wrapped as `{"raw": body}`.
fn decode_send_response(body: String) -> Value {
    match serde_json::from_str::<Value>(&body) {
        Ok(v @ (Value::Object(_) | Value::Array(_))) => v,
        _ => json!({ "raw": body }),
    }
}
