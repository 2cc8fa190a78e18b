use super::*;

/// Tests restricting the result to the given lesson set.
///
/// Expected: only completions intersecting the provided ids.
#[tokio::test]
async fn intersects_with_the_lesson_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::create_profile(db).await?;
    let module = factory::academy_module::create_module(db).await?;
    let in_set = factory::academy_lesson::create_lesson(db, module.id).await?;
    let out_of_set = factory::academy_lesson::create_lesson(db, module.id).await?;

    let repo = CompletionRepository::new(db);
    repo.create_if_missing(profile.id, in_set.id).await?;
    repo.create_if_missing(profile.id, out_of_set.id).await?;

    let completed = repo.completed_ids_among(profile.id, &[in_set.id]).await?;

    assert_eq!(completed, vec![in_set.id]);

    Ok(())
}

/// Tests the empty lesson set short-circuit.
///
/// Expected: empty result without touching the database.
#[tokio::test]
async fn returns_empty_for_empty_set() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::create_profile(db).await?;

    let completed = CompletionRepository::new(db)
        .completed_ids_among(profile.id, &[])
        .await?;

    assert!(completed.is_empty());

    Ok(())
}
