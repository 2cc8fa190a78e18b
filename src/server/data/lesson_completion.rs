//! Lesson completion data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct CompletionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CompletionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records a completion unless one already exists.
    ///
    /// Returns true when a new row was inserted. Completing an
    /// already-completed lesson is a no-op, not an error.
    pub async fn create_if_missing(&self, profile_id: i32, lesson_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::LessonCompletion::find()
            .filter(entity::lesson_completion::Column::ProfileId.eq(profile_id))
            .filter(entity::lesson_completion::Column::LessonId.eq(lesson_id))
            .one(self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        entity::lesson_completion::ActiveModel {
            profile_id: ActiveValue::Set(profile_id),
            lesson_id: ActiveValue::Set(lesson_id),
            completed_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Ids of the lessons a profile has completed, restricted to the given
    /// lesson set. Used by the Academy Master check per module.
    pub async fn completed_ids_among(
        &self,
        profile_id: i32,
        lesson_ids: &[i32],
    ) -> Result<Vec<i32>, DbErr> {
        if lesson_ids.is_empty() {
            return Ok(Vec::new());
        }

        let completions = entity::prelude::LessonCompletion::find()
            .filter(entity::lesson_completion::Column::ProfileId.eq(profile_id))
            .filter(entity::lesson_completion::Column::LessonId.is_in(lesson_ids.to_vec()))
            .all(self.db)
            .await?;

        Ok(completions.into_iter().map(|c| c.lesson_id).collect())
    }

    /// All completion rows, ordered for duplicate detection.
    ///
    /// Ordered by (profile, lesson, id) so the dedupe task keeps the earliest
    /// row of each group deterministically.
    pub async fn get_all_ordered(&self) -> Result<Vec<entity::lesson_completion::Model>, DbErr> {
        use sea_orm::QueryOrder;

        entity::prelude::LessonCompletion::find()
            .order_by_asc(entity::lesson_completion::Column::ProfileId)
            .order_by_asc(entity::lesson_completion::Column::LessonId)
            .order_by_asc(entity::lesson_completion::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete_by_ids(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::LessonCompletion::delete_many()
            .filter(entity::lesson_completion::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
