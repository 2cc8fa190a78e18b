//! Badge service: catalogue queries and the Academy Master award check.

use sea_orm::{ConnectionTrait, DatabaseConnection};

use crate::server::{
    data::{
        academy_lesson::LessonRepository, academy_module::ModuleRepository,
        badge::BadgeRepository, lesson_completion::CompletionRepository,
    },
    error::AppError,
    model::badge::{AwardedBadge, Badge, ACADEMY_MASTER},
};

pub struct BadgeService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> BadgeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_catalogue(&self) -> Result<Vec<Badge>, AppError> {
        let badges = BadgeRepository::new(self.db).get_all().await?;
        Ok(badges)
    }

    pub async fn get_awarded(&self, profile_id: i32) -> Result<Vec<AwardedBadge>, AppError> {
        let awarded = BadgeRepository::new(self.db).get_awarded(profile_id).await?;
        Ok(awarded)
    }
}

/// Checks the Academy Master condition and awards the badge when it holds.
///
/// The badge is earned iff, for every published module, the member has
/// completed every published lesson in that module, and there is at least one
/// published lesson overall. Returns the badge when a new award row was
/// inserted, so callers can notify the member; repeated checks for a member
/// who already holds the badge are no-ops returning `None`.
///
/// Generic over the connection so lesson-completion runs it inside its own
/// transaction and the backfill task runs it against the pool.
pub async fn check_academy_master<C: ConnectionTrait>(
    db: &C,
    profile_id: i32,
) -> Result<Option<Badge>, AppError> {
    let module_repo = ModuleRepository::new(db);
    let lesson_repo = LessonRepository::new(db);
    let completion_repo = CompletionRepository::new(db);
    let badge_repo = BadgeRepository::new(db);

    let modules = module_repo.get_published().await?;

    let mut any_published_lesson = false;
    for module in &modules {
        let lesson_ids = lesson_repo.published_ids_by_module(module.id).await?;
        if lesson_ids.is_empty() {
            // A published module with no published lessons cannot block the
            // badge; there is nothing in it to complete.
            continue;
        }
        any_published_lesson = true;

        let completed = completion_repo
            .completed_ids_among(profile_id, &lesson_ids)
            .await?;
        if completed.len() < lesson_ids.len() {
            return Ok(None);
        }
    }

    if !any_published_lesson {
        return Ok(None);
    }

    let Some(badge) = badge_repo.find_by_code(ACADEMY_MASTER).await? else {
        return Err(AppError::InternalError(format!(
            "Badge catalogue is missing '{ACADEMY_MASTER}'"
        )));
    };

    if !badge_repo.award_if_missing(profile_id, badge.id).await? {
        return Ok(None);
    }

    tracing::info!(profile_id, "awarded Academy Master badge");
    Ok(Some(badge))
}
