//! Mission service: daily missions and the XP-adjusting toggle.

use chrono::Utc;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{mission::MissionRepository, profile::ProfileRepository},
    error::AppError,
    model::mission::{MissionWithState, ToggleResult},
};

pub struct MissionService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> MissionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Active missions with today's completion state for the member.
    pub async fn get_active_missions(
        &self,
        profile_id: i32,
    ) -> Result<Vec<MissionWithState>, AppError> {
        let repo = MissionRepository::new(self.db);
        let today = Utc::now().date_naive();

        let missions = repo.get_active().await?;
        let done_today = repo.completed_mission_ids_on(profile_id, today).await?;

        Ok(missions
            .into_iter()
            .map(|m| MissionWithState {
                id: m.id,
                title: m.title,
                xp_reward: m.xp_reward,
                done_today: done_today.contains(&m.id),
            })
            .collect())
    }

    /// Toggles a mission's completion for today.
    ///
    /// Completing grants the mission's XP reward; un-completing takes it back.
    /// The completion row and the XP adjustment commit in one transaction, so
    /// toggling on and off again always nets zero XP.
    pub async fn toggle_mission(
        &self,
        profile_id: i32,
        mission_id: i32,
    ) -> Result<ToggleResult, AppError> {
        let mission = MissionRepository::new(self.db).find_by_id(mission_id).await?;
        let mission = match mission {
            Some(mission) if mission.active => mission,
            _ => {
                return Err(AppError::NotFound(format!(
                    "Mission {mission_id} not found"
                )))
            }
        };

        let today = Utc::now().date_naive();
        let txn = self.db.begin().await?;

        let mission_repo = MissionRepository::new(&txn);
        let profile_repo = ProfileRepository::new(&txn);

        let existing = mission_repo
            .find_completion_on(profile_id, mission_id, today)
            .await?;

        let result = match existing {
            Some(completion) => {
                mission_repo.delete_completion(completion.id).await?;
                profile_repo.add_xp(profile_id, -mission.xp_reward).await?;
                ToggleResult {
                    done: false,
                    xp_delta: -mission.xp_reward,
                }
            }
            None => {
                mission_repo
                    .insert_completion(profile_id, mission_id, today)
                    .await?;
                profile_repo.add_xp(profile_id, mission.xp_reward).await?;
                ToggleResult {
                    done: true,
                    xp_delta: mission.xp_reward,
                }
            }
        };

        txn.commit().await?;

        tracing::info!(
            profile_id,
            mission_id,
            done = result.done,
            xp_delta = result.xp_delta,
            "mission toggled"
        );

        Ok(result)
    }
}
