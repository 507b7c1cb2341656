//! Handler for the add endpoint.

use adder_core::AddResponse;
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::extract::JsonBody;

/// POST /add - Coerce `num1` and `num2` to integers and return their sum.
pub async fn add(JsonBody(body): JsonBody<Value>) -> Result<Json<AddResponse>, AppError> {
    let sum = adder_core::add(&body)?;
    tracing::debug!(%sum, "Computed sum");
    Ok(Json(AddResponse::success(sum)))
}
