use super::*;

/// Tests detecting an existing admin.
///
/// Expected: true once an admin profile exists.
#[tokio::test]
async fn returns_true_when_admin_exists() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::profile::create_admin(db).await?;

    assert!(ProfileRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Tests the first-registration scenario with an empty table.
///
/// Expected: false, so the first registered profile bootstraps as admin.
#[tokio::test]
async fn returns_false_when_no_admins() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!ProfileRepository::new(db).admin_exists().await?);

    Ok(())
}

/// Tests that regular members do not count as admins.
///
/// Expected: false with only non-admin profiles present.
#[tokio::test]
async fn returns_false_with_only_regular_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::profile::create_profile(db).await?;
    factory::profile::create_profile(db).await?;

    assert!(!ProfileRepository::new(db).admin_exists().await?);

    Ok(())
}
