//! Badge domain models.

use chrono::{DateTime, Utc};

use crate::model::badge::{BadgeDto, UserBadgeDto};

/// Badge code for the full-academy-completion award.
pub const ACADEMY_MASTER: &str = "academy_master";

#[derive(Debug, Clone, PartialEq)]
pub struct Badge {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: String,
}

impl Badge {
    pub fn from_entity(entity: entity::badge::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            name: entity.name,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> BadgeDto {
        BadgeDto {
            id: self.id,
            code: self.code,
            name: self.name,
            description: self.description,
        }
    }
}

/// Badge a member has earned.
#[derive(Debug, Clone, PartialEq)]
pub struct AwardedBadge {
    pub badge: Badge,
    pub awarded_at: DateTime<Utc>,
}

impl AwardedBadge {
    pub fn into_dto(self) -> UserBadgeDto {
        UserBadgeDto {
            badge: self.badge.into_dto(),
            awarded_at: self.awarded_at,
        }
    }
}
