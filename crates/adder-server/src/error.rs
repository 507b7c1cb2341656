//! Application error types and Axum response conversion.

use adder_core::{AddResponse, InputError};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Request-level errors. Every variant is the client's fault and maps to
/// `400 Bad Request` with the `{"error": ..., "status": "error"}` body.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),

    /// The body could not be read as JSON (content type, syntax, I/O).
    #[error("{0}")]
    Body(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Input(_) | AppError::Body(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Body(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "Rejected request");
        (self.status(), Json(AddResponse::error(&self))).into_response()
    }
}
