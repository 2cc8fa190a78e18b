use super::*;

/// Tests that unpublished lessons are excluded from the id set.
///
/// The Academy Master check counts only published lessons, so a draft lesson
/// must never block the badge.
///
/// Expected: ids of published lessons only.
#[tokio::test]
async fn excludes_unpublished_lessons() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::academy_module::create_module(db).await?;

    let published = factory::academy_lesson::create_lesson(db, module.id).await?;
    factory::academy_lesson::LessonFactory::new(db, module.id)
        .published(false)
        .build()
        .await?;

    let ids = LessonRepository::new(db)
        .published_ids_by_module(module.id)
        .await?;

    assert_eq!(ids, vec![published.id]);

    Ok(())
}

/// Tests a module with no lessons.
///
/// Expected: empty id set.
#[tokio::test]
async fn returns_empty_for_lessonless_module() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::academy_module::create_module(db).await?;

    let ids = LessonRepository::new(db)
        .published_ids_by_module(module.id)
        .await?;

    assert!(ids.is_empty());

    Ok(())
}
