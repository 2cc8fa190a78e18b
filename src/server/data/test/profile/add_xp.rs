use super::*;

/// Tests that positive and negative XP deltas accumulate on the column.
///
/// A +n followed by -n leaves the profile where it started, which is what
/// the mission toggle relies on.
///
/// Expected: xp tracks the running sum of deltas.
#[tokio::test]
async fn applies_positive_and_negative_deltas() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::create_profile(db).await?;
    let repo = ProfileRepository::new(db);

    repo.add_xp(profile.id, 25).await?;
    let after_add = repo.find_by_id(profile.id).await?.unwrap();
    assert_eq!(after_add.xp, 25);

    repo.add_xp(profile.id, -25).await?;
    let after_sub = repo.find_by_id(profile.id).await?.unwrap();
    assert_eq!(after_sub.xp, 0);

    Ok(())
}

/// Tests that the delta only touches the targeted profile.
///
/// Expected: other profiles keep their XP.
#[tokio::test]
async fn leaves_other_profiles_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let target = factory::profile::create_profile(db).await?;
    let bystander = factory::profile::ProfileFactory::new(db).xp(50).build().await?;

    let repo = ProfileRepository::new(db);
    repo.add_xp(target.id, 10).await?;

    assert_eq!(repo.find_by_id(bystander.id).await?.unwrap().xp, 50);

    Ok(())
}
