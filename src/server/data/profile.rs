//! Profile data repository.
//!
//! Handles profile creation, lookup, pagination, and the column updates the
//! admin surface and payment webhooks perform. Entity-to-domain conversion
//! happens here at the infrastructure boundary.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, ExprTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::profile::{CreateProfileParam, Profile, SubscriptionStatus};

/// Repository providing database operations for member profiles.
pub struct ProfileRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProfileRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new profile.
    ///
    /// Email uniqueness is enforced by the database; the auth service checks
    /// for an existing profile first to return a friendlier error.
    pub async fn create(&self, param: CreateProfileParam) -> Result<Profile, DbErr> {
        let entity = entity::profile::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            password_hash: ActiveValue::Set(param.password_hash),
            admin: ActiveValue::Set(param.is_admin),
            subscription_status: ActiveValue::Set(
                SubscriptionStatus::Inactive.as_str().to_string(),
            ),
            xp: ActiveValue::Set(0),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Profile::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::profile::Model>, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    /// Checks if any admin profiles exist.
    ///
    /// Used during registration to decide whether the new profile should
    /// bootstrap as the first admin.
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::Profile::find()
            .filter(entity::profile::Column::Admin.eq(true))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all profiles with pagination, ordered alphabetically by name.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Profile>, u64), DbErr> {
        let paginator = entity::prelude::Profile::find()
            .order_by_asc(entity::profile::Column::Name)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let profiles = entities.into_iter().map(Profile::from_entity).collect();

        Ok((profiles, total))
    }

    pub async fn update_name(&self, id: i32, name: &str) -> Result<(), DbErr> {
        entity::prelude::Profile::update_many()
            .filter(entity::profile::Column::Id.eq(id))
            .col_expr(
                entity::profile::Column::Name,
                sea_orm::sea_query::Expr::value(name),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    pub async fn set_admin(&self, id: i32, is_admin: bool) -> Result<(), DbErr> {
        entity::prelude::Profile::update_many()
            .filter(entity::profile::Column::Id.eq(id))
            .col_expr(
                entity::profile::Column::Admin,
                sea_orm::sea_query::Expr::value(is_admin),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets the subscription status column.
    ///
    /// Status strings only enter through [`SubscriptionStatus`], so the
    /// column never holds a value outside the known set.
    pub async fn set_subscription_status(
        &self,
        id: i32,
        status: SubscriptionStatus,
    ) -> Result<(), DbErr> {
        entity::prelude::Profile::update_many()
            .filter(entity::profile::Column::Id.eq(id))
            .col_expr(
                entity::profile::Column::SubscriptionStatus,
                sea_orm::sea_query::Expr::value(status.as_str()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Adds a (possibly negative) XP delta to a profile.
    pub async fn add_xp(&self, id: i32, delta: i32) -> Result<(), DbErr> {
        entity::prelude::Profile::update_many()
            .filter(entity::profile::Column::Id.eq(id))
            .col_expr(
                entity::profile::Column::Xp,
                sea_orm::sea_query::Expr::col(entity::profile::Column::Xp).add(delta),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets every profile id, for maintenance tasks that sweep all members.
    pub async fn all_ids(&self) -> Result<Vec<i32>, DbErr> {
        let profiles = entity::prelude::Profile::find()
            .order_by_asc(entity::profile::Column::Id)
            .all(self.db)
            .await?;

        Ok(profiles.into_iter().map(|p| p.id).collect())
    }
}
