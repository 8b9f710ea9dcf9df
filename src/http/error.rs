//! Handler error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::upstream::FetchError;

/// Failure surfaced by a request handler.
///
/// The wait-times route sets no custom status logic: any fetch failure is a
/// plain 500 with the wrapped error text as body. No partial or fallback
/// response is ever produced.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("failed to fetch wait times: {0}")]
    FetchWaitTimes(#[from] FetchError),
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}
