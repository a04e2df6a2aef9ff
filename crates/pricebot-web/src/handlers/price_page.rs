use std::sync::Arc;

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
};
use serde::Deserialize;

use pricebot_core::{domain::Symbol, render::render_price_page};

use crate::router::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct PriceQuery {
    pub symbol: Option<String>,
}

/// `GET /?symbol=SYM`. Fetch failures are rendered into the page, not returned as errors.
pub async fn price_page(
    State(state): State<Arc<AppState>>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> Html<String> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let symbol = Symbol::parse(query.symbol.as_deref());

    let html = match state.prices.fetch_price(&symbol).await {
        Ok(price) => render_price_page(&symbol, Ok(&price)),
        Err(e) => {
            tracing::warn!(%symbol, error = %e, "price lookup failed");
            render_price_page(&symbol, Err(&e.to_string()))
        }
    };
    Html(html)
}
