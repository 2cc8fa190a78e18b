use super::*;

/// Tests ordering by (order_index, id).
///
/// Lessons sharing an order_index come back in insertion order, which keeps
/// the renumbering task deterministic.
///
/// Expected: stable ordering with id as tiebreak.
#[tokio::test]
async fn orders_by_position_then_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::academy_module::create_module(db).await?;

    let third = factory::academy_lesson::LessonFactory::new(db, module.id)
        .order_index(5)
        .build()
        .await?;
    let first = factory::academy_lesson::LessonFactory::new(db, module.id)
        .order_index(2)
        .build()
        .await?;
    // Same position as `first`; created later so it sorts after it.
    let second = factory::academy_lesson::LessonFactory::new(db, module.id)
        .order_index(2)
        .build()
        .await?;

    let lessons = LessonRepository::new(db).get_by_module(module.id).await?;

    let ids: Vec<i32> = lessons.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![first.id, second.id, third.id]);

    Ok(())
}

/// Tests that lessons from other modules are excluded.
///
/// Expected: only the requested module's lessons.
#[tokio::test]
async fn scopes_to_the_requested_module() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::academy_module::create_module(db).await?;
    let other = factory::academy_module::create_module(db).await?;

    let lesson = factory::academy_lesson::create_lesson(db, module.id).await?;
    factory::academy_lesson::create_lesson(db, other.id).await?;

    let lessons = LessonRepository::new(db).get_by_module(module.id).await?;

    assert_eq!(lessons.len(), 1);
    assert_eq!(lessons[0].id, lesson.id);

    Ok(())
}
