//! Badge data repository.
//!
//! Covers the badge catalogue and per-member awards. Award insertion is
//! guarded against duplicates both here and by the unique index on
//! (profile_id, badge_id).

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::badge::{AwardedBadge, Badge};

pub struct BadgeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BadgeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Badge>, DbErr> {
        let badges = entity::prelude::Badge::find().all(self.db).await?;
        Ok(badges.into_iter().map(Badge::from_entity).collect())
    }

    pub async fn find_by_code(&self, code: &str) -> Result<Option<Badge>, DbErr> {
        let badge = entity::prelude::Badge::find()
            .filter(entity::badge::Column::Code.eq(code))
            .one(self.db)
            .await?;

        Ok(badge.map(Badge::from_entity))
    }

    pub async fn has_badge(&self, profile_id: i32, badge_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::UserBadge::find()
            .filter(entity::user_badge::Column::ProfileId.eq(profile_id))
            .filter(entity::user_badge::Column::BadgeId.eq(badge_id))
            .one(self.db)
            .await?;

        Ok(existing.is_some())
    }

    /// Awards a badge unless the profile already holds it.
    ///
    /// Returns true when a new award row was inserted.
    pub async fn award_if_missing(&self, profile_id: i32, badge_id: i32) -> Result<bool, DbErr> {
        if self.has_badge(profile_id, badge_id).await? {
            return Ok(false);
        }

        entity::user_badge::ActiveModel {
            profile_id: ActiveValue::Set(profile_id),
            badge_id: ActiveValue::Set(badge_id),
            awarded_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Badges a profile has earned, joined with their catalogue entries.
    pub async fn get_awarded(&self, profile_id: i32) -> Result<Vec<AwardedBadge>, DbErr> {
        let rows = entity::prelude::UserBadge::find()
            .filter(entity::user_badge::Column::ProfileId.eq(profile_id))
            .find_also_related(entity::prelude::Badge)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(award, badge)| {
                badge.map(|b| AwardedBadge {
                    badge: Badge::from_entity(b),
                    awarded_at: award.awarded_at,
                })
            })
            .collect())
    }
}
