//! Reassigns lesson `order_index` values to a dense 1..n sequence per module.
//!
//! Lessons are visited in (order_index, id) order, so existing gaps and
//! duplicate positions collapse deterministically and a second run changes
//! nothing.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{academy_lesson::LessonRepository, academy_module::ModuleRepository},
    error::AppError,
};

pub async fn run(db: &DatabaseConnection) -> Result<String, AppError> {
    let module_repo = ModuleRepository::new(db);
    let lesson_repo = LessonRepository::new(db);

    let modules = module_repo.get_all().await?;

    let mut modules_touched = 0u64;
    let mut lessons_renumbered = 0u64;

    for module in modules {
        let lessons = lesson_repo.get_by_module(module.id).await?;

        let mut touched = false;
        for (position, lesson) in lessons.iter().enumerate() {
            let expected = (position + 1) as i32;
            if lesson.order_index != expected {
                lesson_repo.set_order_index(lesson.id, expected).await?;
                lessons_renumbered += 1;
                touched = true;
            }
        }

        if touched {
            modules_touched += 1;
        }
    }

    Ok(format!(
        "renumbered {lessons_renumbered} lessons across {modules_touched} modules"
    ))
}
