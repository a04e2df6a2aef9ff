use std::fmt;

use serde_json::Value;

/// Ticker used when the caller does not name one.
pub const DEFAULT_SYMBOL: &str = "USD";

/// Currency/ticker identifier (always uppercase, never empty).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    /// Normalize raw user input: ASCII uppercase, otherwise kept as given. Missing or blank
    /// input falls back to `USD`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.filter(|s| !s.trim().is_empty()) {
            Some(s) => Self(s.to_ascii_uppercase()),
            None => Self::default(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Symbol {
    fn default() -> Self {
        Self(DEFAULT_SYMBOL.to_string())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque chat/peer identifier used to address a reply.
///
/// Platforms send it either as a JSON string or a number; we keep the string form.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ChatId(pub String);

impl ChatId {
    /// Interpret a JSON value as a chat id. Falsy values (`null`, `""`, `"0"`, `0`, `false`)
    /// count as absent.
    pub fn from_json(v: &Value) -> Option<Self> {
        let s = match v {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        if s.is_empty() || s == "0" {
            return None;
        }
        Some(Self(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn symbol_is_ascii_uppercased_without_trimming() {
        assert_eq!(Symbol::parse(Some(" eur")).as_str(), " EUR");
        assert_eq!(Symbol::parse(Some("<b>x")).as_str(), "<B>X");
        assert_eq!(Symbol::parse(Some("straße")).as_str(), "STRAßE");
        assert_eq!(Symbol::parse(Some("\u{fb01}x")).as_str(), "\u{fb01}X");
    }

    #[test]
    fn symbol_defaults_to_usd() {
        assert_eq!(Symbol::parse(None).as_str(), "USD");
        assert_eq!(Symbol::parse(Some("   ")).as_str(), "USD");
    }

    #[test]
    fn chat_id_accepts_strings_and_numbers() {
        assert_eq!(ChatId::from_json(&json!(42)), Some(ChatId("42".into())));
        assert_eq!(
            ChatId::from_json(&json!("b0abc")),
            Some(ChatId("b0abc".into()))
        );
    }

    #[test]
    fn chat_id_string_is_kept_verbatim() {
        assert_eq!(
            ChatId::from_json(&json!(" 42 ")),
            Some(ChatId(" 42 ".into()))
        );
    }

    #[test]
    fn chat_id_rejects_falsy_values() {
        for v in [json!(null), json!(""), json!("0"), json!(0), json!(false), json!({})] {
            assert_eq!(ChatId::from_json(&v), None, "{v}");
        }
    }
}
