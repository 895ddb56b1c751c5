//! Store health endpoint
//!
//! `GET /health` opens and closes one connection to the configured store.
//! 200 when it succeeds, 503 with the cause otherwise. No rows are read.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::http::server::AppState;

#[derive(Debug, Serialize)]
pub struct StoreHealth {
    pub status: &'static str,
    pub store: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<StoreHealth>) {
    match state.service.check_store().await {
        (store, Ok(())) => (
            StatusCode::OK,
            Json(StoreHealth {
                status: "ok",
                store,
                detail: None,
            }),
        ),
        (store, Err(e)) => {
            tracing::warn!(store, "health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(StoreHealth {
                    status: "unavailable",
                    store,
                    detail: Some(e.to_string()),
                }),
            )
        }
    }
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}
