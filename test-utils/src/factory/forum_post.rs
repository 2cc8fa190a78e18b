//! Forum post factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ForumPostFactory<'a> {
    db: &'a DatabaseConnection,
    profile_id: i32,
    title: String,
    body: String,
}

impl<'a> ForumPostFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, profile_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            profile_id,
            title: format!("Post {}", id),
            body: format!("Body of post {}", id),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub async fn build(self) -> Result<entity::forum_post::Model, DbErr> {
        let now = Utc::now();
        entity::forum_post::ActiveModel {
            profile_id: ActiveValue::Set(self.profile_id),
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post authored by the given profile with default values.
pub async fn create_post(
    db: &DatabaseConnection,
    profile_id: i32,
) -> Result<entity::forum_post::Model, DbErr> {
    ForumPostFactory::new(db, profile_id).build().await
}
