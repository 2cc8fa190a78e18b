//! Login audit log repository.

use sea_orm::{ActiveValue, ConnectionTrait, DbErr};

pub struct LoginLogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LoginLogRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn record(&self, profile_id: i32, ip: &str, user_agent: &str) -> Result<(), DbErr> {
        use sea_orm::ActiveModelTrait;

        entity::login_log::ActiveModel {
            profile_id: ActiveValue::Set(profile_id),
            ip: ActiveValue::Set(ip.to_string()),
            user_agent: ActiveValue::Set(user_agent.to_string()),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        Ok(())
    }
}
