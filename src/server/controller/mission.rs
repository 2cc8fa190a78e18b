use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::mission::MissionToggleDto,
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        service::mission::MissionService,
        state::AppState,
    },
};

/// Active missions with today's completion state for the caller.
pub async fn get_missions(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let missions = MissionService::new(&state.db)
        .get_active_missions(caller.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(missions.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Toggle a mission's completion for today, adjusting the caller's XP.
pub async fn toggle_mission(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<MissionToggleDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    if payload.action != "toggle" {
        return Err(AppError::BadRequest(format!(
            "Unknown action '{}'",
            payload.action
        )));
    }

    let result = MissionService::new(&state.db)
        .toggle_mission(caller.id, payload.mission_id)
        .await?;

    Ok((StatusCode::OK, Json(result.into_dto())))
}
