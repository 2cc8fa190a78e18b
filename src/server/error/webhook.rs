use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors raised while validating an incoming provider webhook.
///
/// Every variant maps to 400 Bad Request. A request that fails validation is
/// rejected before any database write happens.
#[derive(Error, Debug)]
pub enum WebhookError {
    /// The signature header is absent from the request.
    #[error("Missing webhook signature header")]
    MissingSignature,

    /// The signature header is present but not in the expected format.
    #[error("Malformed webhook signature header: {0}")]
    MalformedSignature(String),

    /// The computed HMAC does not match any signature in the header.
    #[error("Webhook signature verification failed")]
    InvalidSignature,

    /// The payload is not the JSON shape the provider documents.
    #[error("Malformed webhook payload: {0}")]
    MalformedPayload(String),
}

impl IntoResponse for WebhookError {
    fn into_response(self) -> Response {
        tracing::warn!("Rejected webhook: {}", self);

        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
