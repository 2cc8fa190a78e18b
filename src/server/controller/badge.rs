use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::AuthGuard,
    service::badge::BadgeService,
    state::AppState,
};

/// The full badge catalogue.
pub async fn get_badges(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let badges = BadgeService::new(&state.db).get_catalogue().await?;

    Ok((
        StatusCode::OK,
        Json(badges.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
    ))
}

/// The caller's earned badges with award timestamps.
pub async fn get_profile_badges(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let awarded = BadgeService::new(&state.db).get_awarded(caller.id).await?;

    Ok((
        StatusCode::OK,
        Json(awarded.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}
