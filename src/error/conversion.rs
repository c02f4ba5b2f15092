/**
 * Error Conversion
 *
 * This module provides the conversion of API errors into HTTP responses.
 * Implementing `IntoResponse` lets handlers return `Result<_, ApiError>`
 * and bubble failures up with `?`. The response body is always the fixed
 * JSON shape `{"error": "<message>"}`, nothing more.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
