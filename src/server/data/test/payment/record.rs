use super::*;

fn stripe_payment(profile_id: i32, provider_payment_id: &str, status: &str) -> RecordPaymentParam {
    RecordPaymentParam {
        profile_id,
        provider: "stripe".to_string(),
        provider_payment_id: provider_payment_id.to_string(),
        amount_cents: 4900,
        currency: "eur".to_string(),
        status: status.to_string(),
    }
}

/// Tests inserting a fresh payment row.
///
/// Expected: Ok(Payment) mirroring the parameters.
#[tokio::test]
async fn records_a_new_payment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::create_profile(db).await?;

    let payment = PaymentRepository::new(db)
        .record(stripe_payment(profile.id, "cs_test_1", "paid"))
        .await?;

    assert_eq!(payment.provider, "stripe");
    assert_eq!(payment.provider_payment_id, "cs_test_1");
    assert_eq!(payment.amount_cents, 4900);
    assert_eq!(payment.status, "paid");

    Ok(())
}

/// Tests the provider-id upsert used for webhook redeliveries.
///
/// Recording the same provider payment id again updates the status instead
/// of inserting a second row.
///
/// Expected: one row whose status tracks the latest delivery.
#[tokio::test]
async fn redelivery_updates_status_without_duplicating() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::create_profile(db).await?;
    let repo = PaymentRepository::new(db);

    let first = repo
        .record(stripe_payment(profile.id, "tr_abc", "open"))
        .await?;
    let second = repo
        .record(stripe_payment(profile.id, "tr_abc", "paid"))
        .await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.status, "paid");
    assert_eq!(repo.get_for_profile(profile.id).await?.len(), 1);

    Ok(())
}

/// Tests status sync by row id.
///
/// Expected: set_status rewrites only the status column.
#[tokio::test]
async fn sets_status_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_payment_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::create_profile(db).await?;
    let repo = PaymentRepository::new(db);

    let payment = repo
        .record(stripe_payment(profile.id, "tr_xyz", "open"))
        .await?;

    repo.set_status(payment.id, "expired").await?;

    let stored = repo.find_by_provider_id("tr_xyz").await?.unwrap();
    assert_eq!(stored.status, "expired");
    assert_eq!(stored.amount_cents, 4900);

    Ok(())
}
