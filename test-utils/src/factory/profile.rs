//! Profile factory for creating test member profiles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test profiles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::profile::ProfileFactory;
///
/// let profile = ProfileFactory::new(&db)
///     .email("admin@example.com")
///     .admin(true)
///     .build()
///     .await?;
/// ```
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    name: String,
    password_hash: String,
    admin: bool,
    subscription_status: String,
    xp: i32,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new factory with defaults: unique email and name, inactive
    /// subscription, zero XP, not admin.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("member{}@example.com", id),
            name: format!("Member {}", id),
            password_hash: "$argon2id$test-hash".to_string(),
            admin: false,
            subscription_status: "inactive".to_string(),
            xp: 0,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.password_hash = password_hash.into();
        self
    }

    pub fn admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    pub fn subscription_status(mut self, status: impl Into<String>) -> Self {
        self.subscription_status = status.into();
        self
    }

    pub fn xp(mut self, xp: i32) -> Self {
        self.xp = xp;
        self
    }

    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        entity::profile::ActiveModel {
            email: ActiveValue::Set(self.email),
            name: ActiveValue::Set(self.name),
            password_hash: ActiveValue::Set(self.password_hash),
            admin: ActiveValue::Set(self.admin),
            subscription_status: ActiveValue::Set(self.subscription_status),
            xp: ActiveValue::Set(self.xp),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a profile with default values.
pub async fn create_profile(db: &DatabaseConnection) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db).build().await
}

/// Creates an admin profile with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db).admin(true).build().await
}
