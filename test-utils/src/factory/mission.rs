//! Mission factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test missions. Defaults to active with a 10 XP
/// reward.
pub struct MissionFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    xp_reward: i32,
    active: bool,
}

impl<'a> MissionFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Mission {}", id),
            xp_reward: 10,
            active: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn xp_reward(mut self, xp_reward: i32) -> Self {
        self.xp_reward = xp_reward;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::mission::Model, DbErr> {
        entity::mission::ActiveModel {
            title: ActiveValue::Set(self.title),
            xp_reward: ActiveValue::Set(self.xp_reward),
            active: ActiveValue::Set(self.active),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active mission with default values.
pub async fn create_mission(db: &DatabaseConnection) -> Result<entity::mission::Model, DbErr> {
    MissionFactory::new(db).build().await
}
