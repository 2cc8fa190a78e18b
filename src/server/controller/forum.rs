use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::PaginationQuery, forum::UpsertForumPostDto},
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::forum::UpsertForumPostParam,
        service::forum::ForumService,
        state::AppState,
    },
};

/// List forum posts, newest first.
pub async fn get_posts(
    State(state): State<AppState>,
    session: Session,
    Query(pagination): Query<PaginationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let posts = ForumService::new(&state.db)
        .get_posts(pagination.page, pagination.per_page)
        .await?;

    Ok((StatusCode::OK, Json(posts.into_dto())))
}

/// Create a post authored by the caller.
pub async fn create_post(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertForumPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let post = ForumService::new(&state.db)
        .create_post(
            &caller,
            UpsertForumPostParam {
                title: payload.title,
                body: payload.body,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(post.into_dto())))
}

/// Edit a post. Allowed for the author and for admins.
pub async fn update_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
    Json(payload): Json<UpsertForumPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ForumService::new(&state.db)
        .update_post(
            &caller,
            post_id,
            UpsertForumPostParam {
                title: payload.title,
                body: payload.body,
            },
        )
        .await?;

    Ok(StatusCode::OK)
}

/// Delete a post. Allowed for the author and for admins.
pub async fn delete_post(
    State(state): State<AppState>,
    session: Session,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    ForumService::new(&state.db).delete_post(&caller, post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
