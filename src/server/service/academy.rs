//! Academy service: curriculum CRUD and lesson completion.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        academy_lesson::LessonRepository, academy_module::ModuleRepository,
        lesson_completion::CompletionRepository,
    },
    error::AppError,
    model::academy::{
        CompletionOutcome, LessonWithProgress, ModuleWithProgress, UpsertLessonParam,
        UpsertModuleParam,
    },
    service::badge,
};

pub struct AcademyService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> AcademyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Published modules in curriculum order, each with the member's progress
    /// over its published lessons.
    pub async fn get_modules_with_progress(
        &self,
        profile_id: i32,
    ) -> Result<Vec<ModuleWithProgress>, AppError> {
        let module_repo = ModuleRepository::new(self.db);
        let lesson_repo = LessonRepository::new(self.db);
        let completion_repo = CompletionRepository::new(self.db);

        let modules = module_repo.get_published().await?;

        let mut result = Vec::with_capacity(modules.len());
        for module in modules {
            let lesson_ids = lesson_repo.published_ids_by_module(module.id).await?;
            let completed = completion_repo
                .completed_ids_among(profile_id, &lesson_ids)
                .await?;

            result.push(ModuleWithProgress {
                id: module.id,
                title: module.title,
                slug: module.slug,
                order_index: module.order_index,
                published: module.published,
                lesson_count: lesson_ids.len() as u64,
                completed_count: completed.len() as u64,
            });
        }

        Ok(result)
    }

    /// Published lessons of one published module, flagged with the member's
    /// completion state.
    pub async fn get_lessons_with_progress(
        &self,
        profile_id: i32,
        module_id: i32,
    ) -> Result<Vec<LessonWithProgress>, AppError> {
        let module = ModuleRepository::new(self.db).find_by_id(module_id).await?;
        match module {
            Some(module) if module.published => (),
            _ => return Err(AppError::NotFound(format!("Module {module_id} not found"))),
        }

        let lessons = LessonRepository::new(self.db)
            .get_by_module(module_id)
            .await?;
        let lesson_ids: Vec<i32> = lessons
            .iter()
            .filter(|l| l.published)
            .map(|l| l.id)
            .collect();
        let completed = CompletionRepository::new(self.db)
            .completed_ids_among(profile_id, &lesson_ids)
            .await?;

        Ok(lessons
            .into_iter()
            .filter(|l| l.published)
            .map(|l| LessonWithProgress {
                id: l.id,
                module_id: l.module_id,
                title: l.title,
                order_index: l.order_index,
                published: l.published,
                completed: completed.contains(&l.id),
            })
            .collect())
    }

    // Admin curriculum management. These operate on the full catalogue,
    // including unpublished entries.

    pub async fn get_all_modules(&self) -> Result<Vec<entity::academy_module::Model>, AppError> {
        let modules = ModuleRepository::new(self.db).get_all().await?;
        Ok(modules)
    }

    pub async fn create_module(
        &self,
        param: UpsertModuleParam,
    ) -> Result<entity::academy_module::Model, AppError> {
        let module = ModuleRepository::new(self.db).create(param).await?;
        tracing::info!(module_id = module.id, slug = %module.slug, "created academy module");
        Ok(module)
    }

    pub async fn update_module(&self, id: i32, param: UpsertModuleParam) -> Result<(), AppError> {
        let touched = ModuleRepository::new(self.db).update(id, param).await?;
        if touched == 0 {
            return Err(AppError::NotFound(format!("Module {id} not found")));
        }
        Ok(())
    }

    pub async fn delete_module(&self, id: i32) -> Result<(), AppError> {
        let deleted = ModuleRepository::new(self.db).delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("Module {id} not found")));
        }
        tracing::info!(module_id = id, "deleted academy module");
        Ok(())
    }

    pub async fn get_module_lessons(
        &self,
        module_id: i32,
    ) -> Result<Vec<entity::academy_lesson::Model>, AppError> {
        if ModuleRepository::new(self.db)
            .find_by_id(module_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!("Module {module_id} not found")));
        }

        let lessons = LessonRepository::new(self.db).get_by_module(module_id).await?;
        Ok(lessons)
    }

    pub async fn create_lesson(
        &self,
        param: UpsertLessonParam,
    ) -> Result<entity::academy_lesson::Model, AppError> {
        if ModuleRepository::new(self.db)
            .find_by_id(param.module_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Module {} not found",
                param.module_id
            )));
        }

        let lesson = LessonRepository::new(self.db).create(param).await?;
        tracing::info!(lesson_id = lesson.id, module_id = lesson.module_id, "created lesson");
        Ok(lesson)
    }

    pub async fn update_lesson(&self, id: i32, param: UpsertLessonParam) -> Result<(), AppError> {
        let touched = LessonRepository::new(self.db).update(id, param).await?;
        if touched == 0 {
            return Err(AppError::NotFound(format!("Lesson {id} not found")));
        }
        Ok(())
    }

    pub async fn delete_lesson(&self, id: i32) -> Result<(), AppError> {
        let deleted = LessonRepository::new(self.db).delete(id).await?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("Lesson {id} not found")));
        }
        tracing::info!(lesson_id = id, "deleted lesson");
        Ok(())
    }

    /// Marks a lesson complete for a member and runs the Academy Master check
    /// when the completion is new.
    ///
    /// The completion insert and any badge award commit atomically; a failed
    /// award rolls the completion back too. Re-completing a lesson is a no-op
    /// that never re-triggers the badge check.
    pub async fn complete_lesson(
        &self,
        profile_id: i32,
        lesson_id: i32,
    ) -> Result<CompletionOutcome, AppError> {
        let lesson = LessonRepository::new(self.db).find_by_id(lesson_id).await?;
        match lesson {
            Some(lesson) if lesson.published => (),
            _ => return Err(AppError::NotFound(format!("Lesson {lesson_id} not found"))),
        }

        let txn = self.db.begin().await?;

        let newly_completed = CompletionRepository::new(&txn)
            .create_if_missing(profile_id, lesson_id)
            .await?;

        let awarded_badge = if newly_completed {
            badge::check_academy_master(&txn, profile_id).await?
        } else {
            None
        };

        txn.commit().await?;

        if newly_completed {
            tracing::info!(
                profile_id,
                lesson_id,
                badge_awarded = awarded_badge.is_some(),
                "lesson completed"
            );
        }

        Ok(CompletionOutcome {
            newly_completed,
            awarded_badge,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Completing the same lesson twice records it once and stays successful.
    #[tokio::test]
    async fn repeat_completion_is_idempotent() -> Result<(), AppError> {
        let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let profile = factory::profile::create_profile(db).await?;
        factory::badge::create_academy_master_badge(db).await?;
        let (_, lessons) = factory::helpers::create_module_with_lessons(db, 2).await?;

        let service = AcademyService::new(db);

        let first = service.complete_lesson(profile.id, lessons[0].id).await?;
        assert!(first.newly_completed);
        assert!(first.awarded_badge.is_none());

        let second = service.complete_lesson(profile.id, lessons[0].id).await?;
        assert!(!second.newly_completed);
        assert!(second.awarded_badge.is_none());

        Ok(())
    }

    /// Finishing the last open lesson awards the badge in the same call.
    #[tokio::test]
    async fn final_lesson_awards_badge() -> Result<(), AppError> {
        let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let profile = factory::profile::create_profile(db).await?;
        factory::badge::create_academy_master_badge(db).await?;
        let (_, lessons) = factory::helpers::create_module_with_lessons(db, 2).await?;

        let service = AcademyService::new(db);

        let partial = service.complete_lesson(profile.id, lessons[0].id).await?;
        assert!(partial.awarded_badge.is_none());

        let full = service.complete_lesson(profile.id, lessons[1].id).await?;
        assert!(full.newly_completed);
        let badge = full.awarded_badge.expect("final lesson should award the badge");
        assert_eq!(badge.name, "Academy Master");

        Ok(())
    }

    /// Draft lessons are invisible to members, completion included.
    #[tokio::test]
    async fn draft_lesson_cannot_be_completed() -> Result<(), AppError> {
        let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let profile = factory::profile::create_profile(db).await?;
        let module = factory::academy_module::create_module(db).await?;
        let draft = factory::academy_lesson::LessonFactory::new(db, module.id)
            .published(false)
            .build()
            .await?;

        let result = AcademyService::new(db)
            .complete_lesson(profile.id, draft.id)
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Module progress counts only the caller's completions of published lessons.
    #[tokio::test]
    async fn progress_counts_own_completions() -> Result<(), AppError> {
        let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let member = factory::profile::create_profile(db).await?;
        let other = factory::profile::create_profile(db).await?;
        factory::badge::create_academy_master_badge(db).await?;
        let (module, lessons) = factory::helpers::create_module_with_lessons(db, 3).await?;

        let service = AcademyService::new(db);
        service.complete_lesson(member.id, lessons[0].id).await?;
        service.complete_lesson(other.id, lessons[0].id).await?;
        service.complete_lesson(other.id, lessons[1].id).await?;

        let modules = service.get_modules_with_progress(member.id).await?;
        let progress = modules.iter().find(|m| m.id == module.id).unwrap();
        assert_eq!(progress.lesson_count, 3);
        assert_eq!(progress.completed_count, 1);

        Ok(())
    }
}
