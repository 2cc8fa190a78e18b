use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::profile::{LoginDto, RegisterDto},
    server::{
        error::AppError,
        middleware::{
            auth::AuthGuard,
            session::AuthSession,
        },
        service::auth::{AuthService, LoginParam, RegisterParam},
        state::AppState,
    },
};

/// Register a new member and establish a session.
///
/// The first registered profile bootstraps as admin.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let profile = AuthService::new(&state.db)
        .register(RegisterParam {
            email: payload.email,
            name: payload.name,
            password: payload.password,
        })
        .await?;

    AuthSession::new(&session).set_profile_id(profile.id).await?;

    Ok((StatusCode::CREATED, Json(profile.into_dto())))
}

/// Log in with email and password.
///
/// Successful logins store the profile id in the session and record a login
/// log row with the caller's address and user agent.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let profile = AuthService::new(&state.db)
        .login(LoginParam {
            email: payload.email,
            password: payload.password,
            ip: client_ip(&headers, peer),
            user_agent: header_value(&headers, "user-agent"),
        })
        .await?;

    AuthSession::new(&session).set_profile_id(profile.id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Get the currently authenticated member's profile.
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let profile = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((
        StatusCode::OK,
        Json(crate::server::model::profile::Profile::from_entity(profile).into_dto()),
    ))
}

/// Clear the caller's session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(StatusCode::OK)
}

/// Client address for the login log: first hop of `x-forwarded-for` when a
/// proxy set it, otherwise the peer address of the connection.
fn client_ip(headers: &HeaderMap, peer: SocketAddr) -> String {
    headers
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| peer.ip().to_string())
}

fn header_value(headers: &HeaderMap, name: &str) -> String {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn peer() -> SocketAddr {
        "203.0.113.7:52100".parse().unwrap()
    }

    #[test]
    fn forwarded_header_takes_first_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("198.51.100.4, 10.0.0.1"),
        );

        assert_eq!(client_ip(&headers, peer()), "198.51.100.4");
    }

    #[test]
    fn unproxied_request_records_peer_address() {
        assert_eq!(client_ip(&HeaderMap::new(), peer()), "203.0.113.7");
    }

    #[test]
    fn empty_forwarded_header_falls_back_to_peer() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(""));

        assert_eq!(client_ip(&headers, peer()), "203.0.113.7");
    }
}
