use async_trait::async_trait;
use reqwest::{header::ACCEPT, Url};

use pricebot_core::{
    config::Config, domain::Symbol, errors::Error, ports::PriceSource, price::PriceRecord, Result,
};

use crate::{check_status, http_client, transport};

/// Client for `GET {base}/api/v1/price/{SYMBOL}`.
#[derive(Clone, Debug)]
pub struct PriceApiClient {
    http: reqwest::Client,
    base: Url,
}

impl PriceApiClient {
    pub fn new(cfg: &Config) -> Result<Self> {
        Self::with_client(http_client(cfg)?, &cfg.price_api_base)
    }

    pub fn with_client(http: reqwest::Client, base: &str) -> Result<Self> {
        let base = Url::parse(base)
            .map_err(|e| Error::Config(format!("invalid price API base {base:?}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "price API base {base} cannot carry a path"
            )));
        }
        Ok(Self { http, base })
    }

    /// The symbol becomes one percent-encoded path segment.
    pub fn price_url(&self, symbol: &Symbol) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "v1", "price", symbol.as_str()]);
        }
        url
    }
}

#[async_trait]
impl PriceSource for PriceApiClient {
    async fn fetch_price(&self, symbol: &Symbol) -> Result<PriceRecord> {
        let url = self.price_url(symbol);
        tracing::debug!(%url, "fetching price");

        let resp = self
            .http
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(transport)?;

        let status = resp.status();
        if let Err(e) = check_status(status) {
            tracing::warn!(%symbol, status = status.as_u16(), "price API returned an error status");
            return Err(e);
        }

        let body = resp.bytes().await.map_err(transport)?;
        Ok(PriceRecord::from_slice(&body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{config, dead_base, serve};
    use axum::{
        extract::Path,
        http::{HeaderMap, StatusCode},
        routing::get,
        Json, Router,
    };
    use pricebot_core::HttpError;
    use serde_json::json;

    async fn client_for(router: Router) -> PriceApiClient {
        let base = serve(router).await;
        PriceApiClient::new(&config(&[("PRICE_API_BASE", base.as_str())])).unwrap()
    }

    fn fixed(status: StatusCode, body: &'static str) -> Router {
        Router::new().route(
            "/api/v1/price/{symbol}",
            get(move || async move { (status, body) }),
        )
    }

    #[test]
    fn price_url_encodes_symbol_and_keeps_base_path() {
        let c = PriceApiClient::with_client(reqwest::Client::new(), "https://p.example/gw/").unwrap();
        let url = c.price_url(&Symbol::parse(Some("a b/c")));
        assert_eq!(url.as_str(), "https://p.example/gw/api/v1/price/A%20B%2FC");
    }

    #[tokio::test]
    async fn success_decodes_record_and_sends_headers() {
        let router = Router::new().route(
            "/api/v1/price/{symbol}",
            get(|Path(symbol): Path<String>, headers: HeaderMap| async move {
                let header = |name: &str| {
                    headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string()
                };
                Json(json!({
                    "title": "US Dollar",
                    "symbol": symbol,
                    "sell": 50000,
                    "last_update": "2024-01-01",
                    "accept": header("accept"),
                    "ua": header("user-agent"),
                }))
            }),
        );
        let c = client_for(router).await;

        let rec = c.fetch_price(&Symbol::parse(Some("usd"))).await.unwrap();

        assert_eq!(rec.symbol().as_deref(), Some("USD"));
        assert_eq!(rec.sell().as_deref(), Some("50000"));
        assert_eq!(rec.field("accept").as_deref(), Some("application/json"));
        assert!(rec.field("ua").unwrap().starts_with("pricebot/"));
    }

    #[tokio::test]
    async fn non_success_statuses_carry_exact_code() {
        for status in [
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::MOVED_PERMANENTLY,
        ] {
            let c = client_for(fixed(status, r#"{"title":"x"}"#)).await;
            let err = c.fetch_price(&Symbol::default()).await.unwrap_err();
            assert_eq!(err.http(), Some(&HttpError::Status(status.as_u16())));
        }
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        for status in [StatusCode::OK, StatusCode::CREATED] {
            let c = client_for(fixed(status, "<html>maintenance</html>")).await;
            let err = c.fetch_price(&Symbol::default()).await.unwrap_err();
            assert!(matches!(err.http(), Some(HttpError::Decode(_))), "{err}");
        }
    }

    #[tokio::test]
    async fn connection_failure_is_transport_error() {
        let base = dead_base().await;
        let c = PriceApiClient::new(&config(&[("PRICE_API_BASE", base.as_str())])).unwrap();
        let err = c.fetch_price(&Symbol::default()).await.unwrap_err();
        assert!(matches!(err.http(), Some(HttpError::Transport(_))), "{err}");
    }

    #[tokio::test]
    async fn slow_upstream_times_out_as_transport_error() {
        let router = Router::new().route(
            "/api/v1/price/{symbol}",
            get(|| async {
                tokio::time::sleep(std::time::Duration::from_millis(500)).await;
                r#"{"title":"late"}"#
            }),
        );
        let base = serve(router).await;
        let c = PriceApiClient::new(&config(&[
            ("PRICE_API_BASE", base.as_str()),
            ("HTTP_TIMEOUT_MS", "50"),
        ]))
        .unwrap();

        let err = c.fetch_price(&Symbol::default()).await.unwrap_err();
        assert!(matches!(err.http(), Some(HttpError::Transport(_))), "{err}");
    }
}
