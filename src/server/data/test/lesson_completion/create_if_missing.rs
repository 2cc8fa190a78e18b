use super::*;

/// Tests completion idempotence.
///
/// The first call inserts and reports true; the second is a no-op reporting
/// false, and no duplicate row appears.
///
/// Expected: true then false, one row total.
#[tokio::test]
async fn second_completion_is_a_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::create_profile(db).await?;
    let module = factory::academy_module::create_module(db).await?;
    let lesson = factory::academy_lesson::create_lesson(db, module.id).await?;

    let repo = CompletionRepository::new(db);

    assert!(repo.create_if_missing(profile.id, lesson.id).await?);
    assert!(!repo.create_if_missing(profile.id, lesson.id).await?);

    let rows = repo.get_all_ordered().await?;
    assert_eq!(rows.len(), 1);

    Ok(())
}

/// Tests that completions are scoped per profile.
///
/// Expected: different members completing the same lesson each get a row.
#[tokio::test]
async fn completions_are_per_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::profile::create_profile(db).await?;
    let second = factory::profile::create_profile(db).await?;
    let module = factory::academy_module::create_module(db).await?;
    let lesson = factory::academy_lesson::create_lesson(db, module.id).await?;

    let repo = CompletionRepository::new(db);

    assert!(repo.create_if_missing(first.id, lesson.id).await?);
    assert!(repo.create_if_missing(second.id, lesson.id).await?);

    Ok(())
}
