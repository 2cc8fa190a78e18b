use super::*;

/// Tests catalogue lookup by code.
///
/// Expected: Some(badge) for a seeded code, None for an unknown one.
#[tokio::test]
async fn finds_badge_by_code() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Badge)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::badge::create_academy_master_badge(db).await?;

    let repo = BadgeRepository::new(db);

    let found = repo.find_by_code("academy_master").await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().name, "Academy Master");

    let missing = repo.find_by_code("does_not_exist").await?;
    assert!(missing.is_none());

    Ok(())
}
