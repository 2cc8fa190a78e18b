use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::academy::{
        AdminLessonDto, AdminModuleDto, LessonCompletionDto, UpsertLessonDto, UpsertModuleDto,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::academy::{UpsertLessonParam, UpsertModuleParam},
        service::{
            academy::AcademyService,
            email::{EmailService, EmailTemplate},
        },
        state::AppState,
    },
};

/// List published modules with the caller's progress.
pub async fn get_modules(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let modules = AcademyService::new(&state.db)
        .get_modules_with_progress(caller.id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(modules.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List a published module's published lessons with completion state.
pub async fn get_module_lessons(
    State(state): State<AppState>,
    session: Session,
    Path(module_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let lessons = AcademyService::new(&state.db)
        .get_lessons_with_progress(caller.id, module_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(lessons.into_iter().map(|l| l.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Mark a lesson complete for the caller.
///
/// Idempotent: completing an already-completed lesson reports
/// `newly_completed: false` instead of failing. A new completion may earn
/// the Academy Master badge in the same transaction; the congratulation
/// email goes out after the award committed and never fails the request.
pub async fn complete_lesson(
    State(state): State<AppState>,
    session: Session,
    Path(lesson_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let outcome = AcademyService::new(&state.db)
        .complete_lesson(caller.id, lesson_id)
        .await?;

    if let Some(badge) = &outcome.awarded_badge {
        EmailService::new(&state.http_client, &state.config)
            .send(
                &caller.email,
                EmailTemplate::BadgeAwarded,
                &[("name", &caller.name), ("badge", &badge.name)],
            )
            .await;
    }

    Ok((
        StatusCode::OK,
        Json(LessonCompletionDto {
            newly_completed: outcome.newly_completed,
            badge_awarded: outcome.awarded_badge.is_some(),
        }),
    ))
}

// Admin curriculum management.

/// List all modules, including unpublished ones.
///
/// # Access Control
/// - `Admin`
pub async fn get_all_modules(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let modules = AcademyService::new(&state.db).get_all_modules().await?;

    Ok((
        StatusCode::OK,
        Json(modules.into_iter().map(module_dto).collect::<Vec<_>>()),
    ))
}

/// Create a module.
///
/// # Access Control
/// - `Admin`
pub async fn create_module(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertModuleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let module = AcademyService::new(&state.db)
        .create_module(module_param(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(module_dto(module))))
}

/// Update a module.
///
/// # Access Control
/// - `Admin`
pub async fn update_module(
    State(state): State<AppState>,
    session: Session,
    Path(module_id): Path<i32>,
    Json(payload): Json<UpsertModuleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AcademyService::new(&state.db)
        .update_module(module_id, module_param(payload))
        .await?;

    Ok(StatusCode::OK)
}

/// Delete a module and, via cascade, its lessons and completions.
///
/// # Access Control
/// - `Admin`
pub async fn delete_module(
    State(state): State<AppState>,
    session: Session,
    Path(module_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AcademyService::new(&state.db).delete_module(module_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List all of a module's lessons, including unpublished ones.
///
/// # Access Control
/// - `Admin`
pub async fn get_lessons(
    State(state): State<AppState>,
    session: Session,
    Path(module_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let lessons = AcademyService::new(&state.db)
        .get_module_lessons(module_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(lessons.into_iter().map(lesson_dto).collect::<Vec<_>>()),
    ))
}

/// Create a lesson in a module.
///
/// # Access Control
/// - `Admin`
pub async fn create_lesson(
    State(state): State<AppState>,
    session: Session,
    Path(module_id): Path<i32>,
    Json(payload): Json<UpsertLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let lesson = AcademyService::new(&state.db)
        .create_lesson(lesson_param(module_id, payload))
        .await?;

    Ok((StatusCode::CREATED, Json(lesson_dto(lesson))))
}

/// Update a lesson.
///
/// # Access Control
/// - `Admin`
pub async fn update_lesson(
    State(state): State<AppState>,
    session: Session,
    Path((module_id, lesson_id)): Path<(i32, i32)>,
    Json(payload): Json<UpsertLessonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AcademyService::new(&state.db)
        .update_lesson(lesson_id, lesson_param(module_id, payload))
        .await?;

    Ok(StatusCode::OK)
}

/// Delete a lesson.
///
/// # Access Control
/// - `Admin`
pub async fn delete_lesson(
    State(state): State<AppState>,
    session: Session,
    Path((_module_id, lesson_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AcademyService::new(&state.db).delete_lesson(lesson_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

fn module_param(dto: UpsertModuleDto) -> UpsertModuleParam {
    UpsertModuleParam {
        title: dto.title,
        slug: dto.slug,
        order_index: dto.order_index,
        published: dto.published,
    }
}

fn lesson_param(module_id: i32, dto: UpsertLessonDto) -> UpsertLessonParam {
    UpsertLessonParam {
        module_id,
        title: dto.title,
        order_index: dto.order_index,
        published: dto.published,
    }
}

fn module_dto(module: entity::academy_module::Model) -> AdminModuleDto {
    AdminModuleDto {
        id: module.id,
        title: module.title,
        slug: module.slug,
        order_index: module.order_index,
        published: module.published,
    }
}

fn lesson_dto(lesson: entity::academy_lesson::Model) -> AdminLessonDto {
    AdminLessonDto {
        id: lesson.id,
        module_id: lesson.module_id,
        title: lesson.title,
        order_index: lesson.order_index,
        published: lesson.published,
    }
}
