use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::PaginationQuery, profile::AdminUpdateProfileDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::profile::{AdminUpdateProfileParam, SubscriptionStatus},
        service::profile::ProfileService,
        state::AppState,
    },
};

/// List all member profiles, paginated and ordered by name.
///
/// # Access Control
/// - `Admin`
pub async fn get_profiles(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let profiles = ProfileService::new(&state.db)
        .get_all_paginated(pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(profiles.into_dto())))
}

/// Partially update a member's profile.
///
/// Accepts any subset of name, subscription status, and admin flag. An
/// unknown subscription status is rejected before any write.
///
/// # Access Control
/// - `Admin`
pub async fn update_profile(
    State(state): State<AppState>,
    session: Session,
    Path(profile_id): Path<i32>,
    Json(payload): Json<AdminUpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let subscription_status = match &payload.subscription_status {
        Some(raw) => Some(SubscriptionStatus::parse(raw).ok_or_else(|| {
            AppError::BadRequest(format!("Unknown subscription status '{raw}'"))
        })?),
        None => None,
    };

    let profile = ProfileService::new(&state.db)
        .admin_update(AdminUpdateProfileParam {
            profile_id,
            name: payload.name,
            subscription_status,
            admin: payload.admin,
        })
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
