use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    Json,
};

use pricebot_core::webhook::OutboundAck;

use crate::router::AppState;

/// `POST|GET /webhook`. Always 200 so the platform treats the update as delivered.
pub async fn webhook(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Json<OutboundAck> {
    let ack = match body {
        Ok(body) => state.dispatcher.handle_update(&body).await,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "unreadable webhook body");
            OutboundAck::failure(rejection.body_text())
        }
    };
    Json(ack)
}
