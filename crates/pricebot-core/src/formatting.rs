//! Formatting utilities (HTML escaping, reply texts).

use crate::price::PriceRecord;

/// Placeholder shown for any absent price field.
pub const NOT_AVAILABLE: &str = "N/A";

pub const HELP_TEXT: &str = "Send /start to receive the latest USD price.";

/// Escape HTML special characters, including both quote kinds (safe inside attributes).
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Plain-text price summary sent in reply to a start-command.
pub fn price_message(price: &PriceRecord) -> String {
    let title = price.title().unwrap_or_else(|| "USD Price".to_string());
    let symbol = price.symbol().unwrap_or_else(|| "USD".to_string());
    let sell = price.sell().unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let updated = price
        .last_update()
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());
    format!("{title} ({symbol})\nSell: {sell}\nLast update: {updated}")
}

/// Text sent back to the chat when replying failed.
pub fn error_message(err: &str) -> String {
    format!("Error: {err}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: serde_json::Value) -> PriceRecord {
        serde_json::from_value(v).unwrap()
    }

    #[test]
    fn escape_html_basic() {
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#039;&amp;&#039;&lt;/a&gt;"
        );
    }

    #[test]
    fn price_message_uses_all_fields() {
        let rec = record(json!({
            "title": "US Dollar",
            "symbol": "USD",
            "sell": "50000",
            "last_update": "2024-01-01"
        }));
        assert_eq!(
            price_message(&rec),
            "US Dollar (USD)\nSell: 50000\nLast update: 2024-01-01"
        );
    }

    #[test]
    fn price_message_defaults_missing_fields() {
        assert_eq!(
            price_message(&PriceRecord::default()),
            "USD Price (USD)\nSell: N/A\nLast update: N/A"
        );
    }
}
