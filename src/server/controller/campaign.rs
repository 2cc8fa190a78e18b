use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::campaign::CreateCampaignDto,
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::campaign::CreateCampaignParam,
        service::facebook::FacebookService,
        state::AppState,
    },
};

/// List the ad account's campaigns.
///
/// # Access Control
/// - `Admin`
pub async fn get_campaigns(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let campaigns = FacebookService::new(&state.http_client, &state.config)
        .list_campaigns()
        .await?;

    Ok((
        StatusCode::OK,
        Json(campaigns.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a paused campaign on the ad account.
///
/// # Access Control
/// - `Admin`
pub async fn create_campaign(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCampaignDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let campaign = FacebookService::new(&state.http_client, &state.config)
        .create_campaign(CreateCampaignParam {
            name: payload.name,
            objective: payload.objective,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(campaign.into_dto())))
}
