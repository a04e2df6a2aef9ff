//! HTML rendering for the price lookup page.

use std::fmt::Write as _;

use crate::{
    domain::Symbol,
    formatting::{escape_html, NOT_AVAILABLE},
    price::PriceRecord,
};

const STYLE: &str = r#"        body {
            font-family: Arial, sans-serif;
            background-color: #f5f5f5;
            margin: 0;
            padding: 2rem;
            color: #333;
        }
        .container {
            max-width: 600px;
            margin: 0 auto;
            background: #fff;
            padding: 2rem;
            border-radius: 8px;
            box-shadow: 0 2px 8px rgba(0, 0, 0, 0.1);
        }
        h1 {
            margin-top: 0;
        }
        dl {
            display: grid;
            grid-template-columns: auto 1fr;
            gap: 0.5rem 1rem;
        }
        dt {
            font-weight: bold;
        }
        .error {
            padding: 1rem;
            background-color: #fbeaea;
            color: #c0392b;
            border: 1px solid #e74c3c;
            border-radius: 6px;
        }
        form {
            margin-top: 1.5rem;
        }
        label {
            display: block;
            margin-bottom: 0.5rem;
        }
        input[type="text"] {
            padding: 0.5rem;
            width: 100%;
            border: 1px solid #ccc;
            border-radius: 4px;
            font-size: 1rem;
        }
        button {
            margin-top: 0.75rem;
            padding: 0.5rem 1rem;
            font-size: 1rem;
            border: none;
            border-radius: 4px;
            color: #fff;
            background-color: #007bff;
            cursor: pointer;
        }
        button:hover {
            background-color: #0056b3;
        }
"#;

/// Render the full page for one lookup. `outcome` is either the record or the failure text.
pub fn render_price_page(symbol: &Symbol, outcome: Result<&PriceRecord, &str>) -> String {
    let sym = escape_html(symbol.as_str());
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(html, "    <title>Price for {sym}</title>");
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n    <div class=\"container\">\n");
    html.push_str("        <h1>Price Lookup</h1>\n");
    let _ = writeln!(
        html,
        "        <p>Showing the latest price for <strong>{sym}</strong>.</p>"
    );

    match outcome {
        Err(err) => {
            let _ = writeln!(
                html,
                "        <div class=\"error\">Failed to fetch price data: {}</div>",
                escape_html(err)
            );
        }
        Ok(price) => {
            html.push_str("        <dl>\n");
            for (label, value) in [
                ("Title", price.title()),
                ("Symbol", price.symbol()),
                ("Sell", price.sell()),
                ("Last Update", price.last_update()),
            ] {
                let value = value.unwrap_or_else(|| NOT_AVAILABLE.to_string());
                let _ = writeln!(
                    html,
                    "            <dt>{label}</dt>\n            <dd>{}</dd>",
                    escape_html(&value)
                );
            }
            html.push_str("        </dl>\n");
        }
    }

    html.push_str("        <form method=\"get\">\n");
    html.push_str(
        "            <label for=\"symbol\">Check another symbol (uppercase)</label>\n",
    );
    let _ = writeln!(
        html,
        "            <input type=\"text\" id=\"symbol\" name=\"symbol\" value=\"{sym}\" pattern=\"[A-Z0-9]+\" required>"
    );
    html.push_str("            <button type=\"submit\">Get Price</button>\n");
    html.push_str("        </form>\n    </div>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn symbol_is_escaped_in_title_body_and_form() {
        let sym = Symbol::parse(Some("<script>'x'&"));
        let html = render_price_page(&sym, Err("boom"));
        let escaped = "&lt;SCRIPT&gt;&#039;X&#039;&amp;";
        assert!(html.contains(&format!("<title>Price for {escaped}</title>")));
        assert!(html.contains(&format!("<strong>{escaped}</strong>")));
        assert!(html.contains(&format!("value=\"{escaped}\"")));
        assert!(!html.contains("<SCRIPT>"));
    }

    #[test]
    fn symbol_keeps_leading_space_and_non_ascii_letters() {
        let html = render_price_page(&Symbol::parse(Some(" eur")), Err("boom"));
        assert!(html.contains("<title>Price for  EUR</title>"));
        assert!(html.contains("<strong> EUR</strong>"));

        let html = render_price_page(&Symbol::parse(Some("straße")), Err("boom"));
        assert!(html.contains("<title>Price for STRAßE</title>"));
        assert!(html.contains("value=\"STRAßE\""));
    }

    #[test]
    fn failure_renders_error_block_only() {
        let html = render_price_page(&Symbol::default(), Err("API returned HTTP status 404"));
        assert!(html.contains(
            "<div class=\"error\">Failed to fetch price data: API returned HTTP status 404</div>"
        ));
        assert!(!html.contains("<dl>"));
    }

    #[test]
    fn record_fields_render_with_defaults() {
        let rec: PriceRecord =
            serde_json::from_value(json!({"title": "Euro", "sell": 61000})).unwrap();
        let html = render_price_page(&Symbol::parse(Some("eur")), Ok(&rec));
        assert!(html.contains("<dt>Title</dt>\n            <dd>Euro</dd>"));
        assert!(html.contains("<dt>Symbol</dt>\n            <dd>N/A</dd>"));
        assert!(html.contains("<dt>Sell</dt>\n            <dd>61000</dd>"));
        assert!(html.contains("<dt>Last Update</dt>\n            <dd>N/A</dd>"));
        assert!(!html.contains("class=\"error\""));
    }
}
