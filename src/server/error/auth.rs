use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated profile id in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// Session references a profile that no longer exists.
    ///
    /// Happens when a profile is deleted while a session for it is still
    /// live. Results in a 404 Not Found response.
    #[error("User {0} in session but not in database")]
    UserNotInDatabase(i32),

    /// Profile lacks a required permission.
    ///
    /// Results in a 403 Forbidden response. The reason is logged server-side
    /// only.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login with an unknown email or a wrong password.
    ///
    /// Results in a 400 Bad Request with a deliberately generic message so
    /// the response does not reveal which of the two was wrong.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Registration with an email that already has a profile.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Email is already registered")]
    EmailTaken,
}

/// Converts authentication errors into HTTP responses.
///
/// All variants are logged at debug level for diagnostics while keeping
/// client-facing messages generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::UserNotInSession => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "You must be logged in".to_string(),
                }),
            )
                .into_response(),
            Self::UserNotInDatabase(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "User not found".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You don't have permission to do that".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "Invalid email or password".to_string(),
                }),
            )
                .into_response(),
            Self::EmailTaken => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: "That email is already registered".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
