use super::*;

/// Tests joining awards with their catalogue entries.
///
/// Expected: only the caller's badges, with catalogue data attached.
#[tokio::test]
async fn returns_only_the_profiles_badges() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::profile::create_profile(db).await?;
    let other = factory::profile::create_profile(db).await?;
    let earned = factory::badge::create_badge(db).await?;
    let not_earned = factory::badge::create_badge(db).await?;

    let repo = BadgeRepository::new(db);
    repo.award_if_missing(member.id, earned.id).await?;
    repo.award_if_missing(other.id, not_earned.id).await?;

    let awarded = repo.get_awarded(member.id).await?;

    assert_eq!(awarded.len(), 1);
    assert_eq!(awarded[0].badge.code, earned.code);

    Ok(())
}

/// Tests a member with no awards.
///
/// Expected: empty list.
#[tokio::test]
async fn returns_empty_without_awards() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::profile::create_profile(db).await?;

    let awarded = BadgeRepository::new(db).get_awarded(member.id).await?;
    assert!(awarded.is_empty());

    Ok(())
}
