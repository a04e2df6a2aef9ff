use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use pricebot_core::{
    config::Config,
    ports::{MessageSender, PriceSource},
    webhook::WebhookDispatcher,
};

use crate::handlers;

#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub prices: Arc<dyn PriceSource>,
    pub dispatcher: Arc<WebhookDispatcher>,
}

impl AppState {
    pub fn new(
        cfg: Arc<Config>,
        prices: Arc<dyn PriceSource>,
        sender: Arc<dyn MessageSender>,
    ) -> Self {
        let dispatcher = Arc::new(WebhookDispatcher::new(
            cfg.bot_token.clone(),
            prices.clone(),
            sender,
        ));
        Self {
            cfg,
            prices,
            dispatcher,
        }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::price_page))
        .route("/webhook", get(handlers::webhook).post(handlers::webhook))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `cfg.bind_addr` and serve until Ctrl-C.
pub async fn serve(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr = state.cfg.bind_addr;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!(addr = %listener.local_addr()?, "pricebot listening");
    if state.cfg.bot_token.configured().is_none() {
        tracing::warn!("webhook will answer every update with \"missing token\"");
    }

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("http server failed")?;

    tracing::info!("pricebot stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
