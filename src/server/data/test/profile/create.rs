use super::*;

/// Tests creating a profile with registration parameters.
///
/// New profiles start with an inactive subscription and zero XP regardless of
/// input.
///
/// Expected: Ok(Profile) with the provided identity fields.
#[tokio::test]
async fn creates_profile_with_defaults() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);

    let profile = repo
        .create(CreateProfileParam {
            email: "jan@example.com".to_string(),
            name: "Jan".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            is_admin: false,
        })
        .await?;

    assert_eq!(profile.email, "jan@example.com");
    assert_eq!(profile.name, "Jan");
    assert!(!profile.admin);
    assert_eq!(profile.subscription_status, "inactive");
    assert_eq!(profile.xp, 0);

    Ok(())
}

/// Tests looking up a created profile by email.
///
/// Expected: Some(model) for the stored email, None otherwise.
#[tokio::test]
async fn finds_created_profile_by_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProfileRepository::new(db);

    repo.create(CreateProfileParam {
        email: "jan@example.com".to_string(),
        name: "Jan".to_string(),
        password_hash: "$argon2id$hash".to_string(),
        is_admin: true,
    })
    .await?;

    let found = repo.find_by_email("jan@example.com").await?;
    assert!(found.is_some());
    assert!(found.unwrap().admin);

    let missing = repo.find_by_email("nobody@example.com").await?;
    assert!(missing.is_none());

    Ok(())
}
