//! Best-effort field extraction from loosely shaped platform updates.
//!
//! Each rule is a pure `payload -> Option<T>` lookup. Rules are tried in order and the
//! first one yielding a value wins.

use serde_json::{Map, Value};

use crate::domain::ChatId;

pub type Rule<T> = fn(&Value) -> Option<T>;

/// `message.chat.id`, then `peer.id`.
pub const CHAT_ID_RULES: &[Rule<ChatId>] = &[message_chat_id, peer_id];

/// `message.text`, then top-level `text`.
pub const TEXT_RULES: &[Rule<String>] = &[message_text, top_level_text];

/// Start-command literals, compared after trim + lowercase.
pub const START_COMMANDS: [&str; 3] = ["/start", "start", "شروع"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtractedUpdate {
    pub chat_id: Option<ChatId>,
    /// Empty when no rule found any text.
    pub text: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Start,
    Help,
}

impl Intent {
    pub fn action(self) -> &'static str {
        match self {
            Intent::Start => "start",
            Intent::Help => "help",
        }
    }
}

pub fn first_match<T>(payload: &Value, rules: &[Rule<T>]) -> Option<T> {
    rules.iter().find_map(|rule| rule(payload))
}

pub fn extract(payload: &Value) -> ExtractedUpdate {
    ExtractedUpdate {
        chat_id: first_match(payload, CHAT_ID_RULES),
        text: first_match(payload, TEXT_RULES).unwrap_or_default(),
    }
}

/// Exact literal match only; no prefixes, no arguments.
pub fn classify(text: &str) -> Intent {
    let normalized = text.trim().to_lowercase();
    if START_COMMANDS.contains(&normalized.as_str()) {
        Intent::Start
    } else {
        Intent::Help
    }
}

/// `message`, or `edited_message` when `message` is absent/null. Only objects count.
fn message(payload: &Value) -> Option<&Map<String, Value>> {
    let msg = match payload.get("message") {
        Some(v) if !v.is_null() => v,
        _ => payload.get("edited_message")?,
    };
    msg.as_object()
}

fn message_chat_id(payload: &Value) -> Option<ChatId> {
    let id = message(payload)?.get("chat")?.get("id")?;
    ChatId::from_json(id)
}

fn peer_id(payload: &Value) -> Option<ChatId> {
    ChatId::from_json(payload.get("peer")?.get("id")?)
}

fn message_text(payload: &Value) -> Option<String> {
    text_value(message(payload)?.get("text")?)
}

fn top_level_text(payload: &Value) -> Option<String> {
    text_value(payload.get("text")?)
}

fn text_value(v: &Value) -> Option<String> {
    let s = match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    // "" and "0" are both treated as no text.
    if s.is_empty() || s == "0" {
        None
    } else {
        Some(s)
    }
}
