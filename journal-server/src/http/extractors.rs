//! Custom Axum extractors

use axum::extract::FromRequest;

use super::error::ApiError;

/// `axum::Json` whose rejection renders as `{"detail": ...}`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
