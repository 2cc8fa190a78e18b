use super::*;

/// Tests moving a profile through the subscription states the webhooks use.
///
/// Expected: the stored string always matches the typed status set last.
#[tokio::test]
async fn transitions_through_statuses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Profile)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::create_profile(db).await?;
    let repo = ProfileRepository::new(db);

    repo.set_subscription_status(profile.id, SubscriptionStatus::Active)
        .await?;
    assert_eq!(
        repo.find_by_id(profile.id).await?.unwrap().subscription_status,
        "active"
    );

    repo.set_subscription_status(profile.id, SubscriptionStatus::PastDue)
        .await?;
    assert_eq!(
        repo.find_by_id(profile.id).await?.unwrap().subscription_status,
        "past_due"
    );

    repo.set_subscription_status(profile.id, SubscriptionStatus::Inactive)
        .await?;
    assert_eq!(
        repo.find_by_id(profile.id).await?.unwrap().subscription_status,
        "inactive"
    );

    Ok(())
}
