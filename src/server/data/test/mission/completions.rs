use super::*;
use chrono::NaiveDate;

/// Tests the insert/find/delete cycle for one day's completion.
///
/// Expected: a completion is visible on its day and gone after deletion.
#[tokio::test]
async fn tracks_completion_for_a_day() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mission_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::create_profile(db).await?;
    let mission = factory::mission::create_mission(db).await?;
    let day = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

    let repo = MissionRepository::new(db);

    assert!(repo.find_completion_on(profile.id, mission.id, day).await?.is_none());

    repo.insert_completion(profile.id, mission.id, day).await?;
    let completion = repo
        .find_completion_on(profile.id, mission.id, day)
        .await?
        .unwrap();
    assert_eq!(completion.completed_on, day);

    repo.delete_completion(completion.id).await?;
    assert!(repo.find_completion_on(profile.id, mission.id, day).await?.is_none());

    Ok(())
}

/// Tests that completions on different days are independent.
///
/// Expected: yesterday's completion does not count for today.
#[tokio::test]
async fn days_are_independent() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_mission_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::create_profile(db).await?;
    let mission = factory::mission::create_mission(db).await?;
    let yesterday = NaiveDate::from_ymd_opt(2026, 3, 13).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();

    let repo = MissionRepository::new(db);
    repo.insert_completion(profile.id, mission.id, yesterday).await?;

    assert!(repo.find_completion_on(profile.id, mission.id, today).await?.is_none());

    let done_today = repo.completed_mission_ids_on(profile.id, today).await?;
    assert!(done_today.is_empty());

    let done_yesterday = repo.completed_mission_ids_on(profile.id, yesterday).await?;
    assert_eq!(done_yesterday, vec![mission.id]);

    Ok(())
}
