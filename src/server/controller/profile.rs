use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::profile::UpdateProfileDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::profile::ProfileService,
        state::AppState,
    },
};

/// Get the caller's own profile.
pub async fn get_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = ProfileService::new(&state.db).get_profile(caller.id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Update the caller's own profile. Members can only change their name.
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = ProfileService::new(&state.db);
    service.update_name(caller.id, &payload.name).await?;

    let profile = service.get_profile(caller.id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
