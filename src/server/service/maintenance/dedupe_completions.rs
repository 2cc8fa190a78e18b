//! Deletes duplicate lesson completion rows.
//!
//! Historical data predates the unique (profile, lesson) index. Rows come
//! back ordered by (profile, lesson, id); the first of each group is the
//! earliest and is kept.

use sea_orm::DatabaseConnection;

use crate::server::{data::lesson_completion::CompletionRepository, error::AppError};

pub async fn run(db: &DatabaseConnection) -> Result<String, AppError> {
    let repo = CompletionRepository::new(db);

    let completions = repo.get_all_ordered().await?;

    let mut duplicates = Vec::new();
    let mut previous: Option<(i32, i32)> = None;
    for completion in &completions {
        let key = (completion.profile_id, completion.lesson_id);
        if previous == Some(key) {
            duplicates.push(completion.id);
        }
        previous = Some(key);
    }

    let deleted = repo.delete_by_ids(&duplicates).await?;

    Ok(format!("deleted {deleted} duplicate completions"))
}
