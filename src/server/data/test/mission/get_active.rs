use super::*;

/// Tests that retired missions are hidden.
///
/// Expected: only missions with the active flag.
#[tokio::test]
async fn excludes_inactive_missions() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mission_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let active = factory::mission::create_mission(db).await?;
    factory::mission::MissionFactory::new(db)
        .active(false)
        .build()
        .await?;

    let missions = MissionRepository::new(db).get_active().await?;

    assert_eq!(missions.len(), 1);
    assert_eq!(missions[0].id, active.id);

    Ok(())
}
