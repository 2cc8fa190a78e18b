//! Badge factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct BadgeFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    name: String,
    description: String,
}

impl<'a> BadgeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("badge_{}", id),
            name: format!("Badge {}", id),
            description: "A test badge".to_string(),
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub async fn build(self) -> Result<entity::badge::Model, DbErr> {
        entity::badge::ActiveModel {
            code: ActiveValue::Set(self.code),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a badge with a unique code.
pub async fn create_badge(db: &DatabaseConnection) -> Result<entity::badge::Model, DbErr> {
    BadgeFactory::new(db).build().await
}

/// Creates the Academy Master badge the completion flow awards.
pub async fn create_academy_master_badge(
    db: &DatabaseConnection,
) -> Result<entity::badge::Model, DbErr> {
    BadgeFactory::new(db)
        .code("academy_master")
        .name("Academy Master")
        .build()
        .await
}
