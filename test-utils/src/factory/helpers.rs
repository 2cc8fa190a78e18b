//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// Ensures each factory-created entity gets unique identifying values so
/// unique-index collisions cannot happen between factory calls.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a published module with `lesson_count` published lessons.
///
/// Lessons are numbered 1..=lesson_count in order. Use the individual
/// factories when a test needs unpublished entries or custom ordering.
pub async fn create_module_with_lessons(
    db: &DatabaseConnection,
    lesson_count: usize,
) -> Result<
    (
        entity::academy_module::Model,
        Vec<entity::academy_lesson::Model>,
    ),
    DbErr,
> {
    let module = crate::factory::academy_module::create_module(db).await?;

    let mut lessons = Vec::with_capacity(lesson_count);
    for position in 1..=lesson_count {
        let lesson = crate::factory::academy_lesson::LessonFactory::new(db, module.id)
            .order_index(position as i32)
            .build()
            .await?;
        lessons.push(lesson);
    }

    Ok((module, lessons))
}
