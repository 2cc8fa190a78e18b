use super::*;

/// Tests requiring no permissions for a logged-in member.
///
/// Expected: Ok(profile) for any profile in the session.
#[tokio::test]
async fn returns_profile_for_authenticated_member() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let profile = factory::profile::create_profile(db).await?;
    AuthSession::new(session).set_profile_id(profile.id).await?;

    let result = AuthGuard::new(db, session).require(&[]).await?;

    assert_eq!(result.id, profile.id);
    assert_eq!(result.email, profile.email);

    Ok(())
}

/// Tests rejecting requests with no session entry.
///
/// Expected: AuthError::UserNotInSession (401).
#[tokio::test]
async fn rejects_missing_session() {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));
}

/// Tests rejecting sessions whose profile row no longer exists.
///
/// Expected: AuthError::UserNotInDatabase (404).
#[tokio::test]
async fn rejects_deleted_profile() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_profile_id(9999).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(9999)))
    ));

    Ok(())
}

/// Tests granting admin access to admin profiles.
///
/// Expected: Ok(profile) when the profile has the admin flag.
#[tokio::test]
async fn allows_admin_permission_for_admins() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::profile::create_admin(db).await?;
    AuthSession::new(session).set_profile_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await?;

    assert_eq!(result.id, admin.id);
    assert!(result.admin);

    Ok(())
}

/// Tests denying admin access to regular members.
///
/// Expected: AuthError::AccessDenied (403).
#[tokio::test]
async fn denies_admin_permission_for_members() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let member = factory::profile::create_profile(db).await?;
    AuthSession::new(session).set_profile_id(member.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}
