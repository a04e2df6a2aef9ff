use std::sync::Arc;

use pricebot_core::{
    config::Config,
    ports::{MessageSender, PriceSource},
};
use pricebot_http::{BotApiMessenger, PriceApiClient};
use pricebot_web::AppState;

#[tokio::main]
async fn main() -> Result<(), pricebot_core::Error> {
    pricebot_core::logging::init("pricebot")?;

    let cfg = Arc::new(Config::load()?);
    tracing::info!(
        price_api = %cfg.price_api_base,
        platform_api = %cfg.platform_api_base,
        "configuration loaded"
    );

    let prices: Arc<dyn PriceSource> = Arc::new(PriceApiClient::new(&cfg)?);
    let sender: Arc<dyn MessageSender> = Arc::new(BotApiMessenger::new(&cfg)?);
    let state = Arc::new(AppState::new(cfg, prices, sender));

    pricebot_web::serve(state)
        .await
        .map_err(|e| pricebot_core::Error::External(format!("http server failed: {e:#}")))?;

    Ok(())
}
