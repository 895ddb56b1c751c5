//! Journal entry endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{EntryAdded, JournalEntry};

/// POST /add_entry - append an entry
async fn add_entry(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<JournalEntry>,
) -> Result<Json<EntryAdded>, ApiError> {
    let added = state.service.add_entry(&req.entry).await?;
    Ok(Json(added))
}

/// GET /get_entries - all entries, newest first
async fn get_entries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<JournalEntry>>, ApiError> {
    let entries = state.service.get_entries().await?;
    Ok(Json(entries))
}

/// Entry routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add_entry", post(add_entry))
        .route("/get_entries", get(get_entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{EntryStore, MemoryEntryRepo};
    use crate::error::{ServiceError, ServiceResult};
    use crate::service::EntryService;
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    /// Store whose every call fails like an unreachable database
    struct DownStore;

    #[async_trait]
    impl EntryStore for DownStore {
        async fn append(&self, _entry: &str, _created_at: &str) -> ServiceResult<()> {
            Err(ServiceError::Query(sqlx::Error::PoolTimedOut))
        }

        async fn list(&self) -> ServiceResult<Vec<JournalEntry>> {
            Err(ServiceError::Query(sqlx::Error::PoolTimedOut))
        }

        fn backend(&self) -> &'static str {
            "down"
        }

        async fn ping(&self) -> ServiceResult<()> {
            Err(ServiceError::Query(sqlx::Error::PoolTimedOut))
        }
    }

    fn app_with(store: Arc<dyn EntryStore>) -> Router {
        router().with_state(Arc::new(AppState {
            service: EntryService::new(store),
        }))
    }

    fn post_entry(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/add_entry")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn list_request() -> Request<Body> {
        Request::builder()
            .uri("/get_entries")
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn add_then_list_scenario() {
        let app = app_with(Arc::new(MemoryEntryRepo::new()));

        let response = app
            .clone()
            .oneshot(post_entry(r#"{"entry": "hello"}"#))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["message"], "Entry added successfully");
        let ts = body["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());

        let response = app.oneshot(list_request()).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!([{"entry": "hello"}]));
    }

    #[tokio::test]
    async fn empty_list_is_200() {
        let app = app_with(Arc::new(MemoryEntryRepo::new()));
        let response = app.oneshot(list_request()).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn list_is_newest_first() {
        let app = app_with(Arc::new(MemoryEntryRepo::new()));
        for text in ["a", "b"] {
            let body = format!(r#"{{"entry": "{}"}}"#, text);
            let response = app.clone().oneshot(post_entry(&body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }

        let response = app.oneshot(list_request()).await.unwrap();
        assert_eq!(
            json_body(response).await,
            serde_json::json!([{"entry": "b"}, {"entry": "a"}])
        );
    }

    #[tokio::test]
    async fn store_failure_is_500_with_detail() {
        let app = app_with(Arc::new(DownStore));

        for request in [post_entry(r#"{"entry": "hello"}"#), list_request()] {
            let response = app.clone().oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let body = json_body(response).await;
            assert!(!body["detail"].as_str().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn missing_entry_field_is_rejected() {
        let repo = Arc::new(MemoryEntryRepo::new());
        let app = app_with(repo.clone());

        let response = app.oneshot(post_entry(r#"{"text": "hello"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(json_body(response).await["detail"].is_string());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn non_string_entry_is_rejected() {
        let app = app_with(Arc::new(MemoryEntryRepo::new()));
        let response = app.oneshot(post_entry(r#"{"entry": 42}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
