use super::*;

/// Tests rewriting a single lesson's position.
///
/// Expected: only the targeted lesson changes.
#[tokio::test]
async fn updates_only_the_target_lesson() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let module = factory::academy_module::create_module(db).await?;
    let target = factory::academy_lesson::LessonFactory::new(db, module.id)
        .order_index(7)
        .build()
        .await?;
    let other = factory::academy_lesson::LessonFactory::new(db, module.id)
        .order_index(3)
        .build()
        .await?;

    let repo = LessonRepository::new(db);
    repo.set_order_index(target.id, 1).await?;

    assert_eq!(repo.find_by_id(target.id).await?.unwrap().order_index, 1);
    assert_eq!(repo.find_by_id(other.id).await?.unwrap().order_index, 3);

    Ok(())
}
