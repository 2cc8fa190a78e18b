//! Runs the Academy Master check for every profile.
//!
//! Catches members whose completions predate the badge logic. The award path
//! is the same as the live one, so re-running never hands out duplicates.

use sea_orm::DatabaseConnection;

use crate::server::{data::profile::ProfileRepository, error::AppError, service::badge};

pub async fn run(db: &DatabaseConnection) -> Result<String, AppError> {
    let profile_ids = ProfileRepository::new(db).all_ids().await?;
    let checked = profile_ids.len();

    let mut awarded = 0u64;
    for profile_id in profile_ids {
        if badge::check_academy_master(db, profile_id).await?.is_some() {
            awarded += 1;
        }
    }

    Ok(format!("checked {checked} profiles, awarded {awarded} badges"))
}
