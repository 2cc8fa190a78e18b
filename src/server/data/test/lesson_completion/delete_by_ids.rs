use super::*;
use sea_orm::{ActiveModelTrait, ActiveValue};

async fn insert_completion(
    db: &sea_orm::DatabaseConnection,
    profile_id: i32,
    lesson_id: i32,
) -> Result<entity::lesson_completion::Model, DbErr> {
    entity::lesson_completion::ActiveModel {
        profile_id: ActiveValue::Set(profile_id),
        lesson_id: ActiveValue::Set(lesson_id),
        completed_at: ActiveValue::Set(chrono::Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Tests deleting a specific set of completion rows.
///
/// Mirrors the dedupe task: historical duplicates are inserted directly,
/// then all but the earliest are deleted by id.
///
/// Expected: only the listed ids are removed.
#[tokio::test]
async fn deletes_only_listed_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let profile = factory::profile::create_profile(db).await?;
    let module = factory::academy_module::create_module(db).await?;
    let lesson = factory::academy_lesson::create_lesson(db, module.id).await?;

    let keep = insert_completion(db, profile.id, lesson.id).await?;
    let dup_a = insert_completion(db, profile.id, lesson.id).await?;
    let dup_b = insert_completion(db, profile.id, lesson.id).await?;

    let repo = CompletionRepository::new(db);
    let deleted = repo.delete_by_ids(&[dup_a.id, dup_b.id]).await?;
    assert_eq!(deleted, 2);

    let remaining = repo.get_all_ordered().await?;
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, keep.id);

    Ok(())
}

/// Tests the empty id list short-circuit.
///
/// Expected: zero deletions.
#[tokio::test]
async fn empty_id_list_deletes_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_academy_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = CompletionRepository::new(db).delete_by_ids(&[]).await?;
    assert_eq!(deleted, 0);

    Ok(())
}
