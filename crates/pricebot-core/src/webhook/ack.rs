use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::price::PriceRecord;

/// Body of every webhook response. Read by the platform's delivery log, never by end users.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutboundAck {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sent: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_sample: Option<Value>,
}

impl OutboundAck {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            ok: false,
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn no_chat_id(update: Value) -> Self {
        Self {
            update_sample: Some(update),
            ..Self::failure("no chat id")
        }
    }

    pub fn ready(price: PriceRecord) -> Self {
        Self {
            ok: true,
            hint: Some("ready".to_string()),
            price: Some(price),
            ..Self::default()
        }
    }

    pub fn replied(action: &str, sent: Value) -> Self {
        Self {
            ok: true,
            action: Some(action.to_string()),
            sent: Some(sent),
            ..Self::default()
        }
    }
}
