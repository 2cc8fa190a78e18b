use super::*;

/// Tests that a badge is never awarded twice.
///
/// Expected: true on the first award, false afterwards, one row total.
#[tokio::test]
async fn awards_at_most_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::create_profile(db).await?;
    let badge = factory::badge::create_badge(db).await?;

    let repo = BadgeRepository::new(db);

    assert!(repo.award_if_missing(profile.id, badge.id).await?);
    assert!(!repo.award_if_missing(profile.id, badge.id).await?);

    assert_eq!(repo.get_awarded(profile.id).await?.len(), 1);

    Ok(())
}

/// Tests that awards are independent per profile.
///
/// Expected: each member can earn the same badge once.
#[tokio::test]
async fn awards_are_per_profile() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::profile::create_profile(db).await?;
    let second = factory::profile::create_profile(db).await?;
    let badge = factory::badge::create_badge(db).await?;

    let repo = BadgeRepository::new(db);

    assert!(repo.award_if_missing(first.id, badge.id).await?);
    assert!(repo.award_if_missing(second.id, badge.id).await?);

    Ok(())
}
