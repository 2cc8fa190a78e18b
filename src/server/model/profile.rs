//! Profile domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::profile::{PaginatedProfilesDto, ProfileDto};

/// Subscription states a profile can be in.
///
/// Stored as a plain string column; this enum is the single place that
/// validates transitions in from the API and the payment webhooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionStatus {
    Active,
    Inactive,
    PastDue,
}

impl SubscriptionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::PastDue => "past_due",
        }
    }

    /// Parses a status string from a request body.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            "past_due" => Some(Self::PastDue),
            _ => None,
        }
    }
}

/// Member profile with subscription and gamification state.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub admin: bool,
    pub subscription_status: String,
    pub xp: i32,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn from_entity(entity: entity::profile::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            admin: entity.admin,
            subscription_status: entity.subscription_status,
            xp: entity.xp,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.id,
            email: self.email,
            name: self.name,
            admin: self.admin,
            subscription_status: self.subscription_status,
            xp: self.xp,
            created_at: self.created_at,
        }
    }
}

/// Parameters for creating a profile during registration.
///
/// `password_hash` is already argon2-hashed by the auth service; repositories
/// never see plaintext passwords.
#[derive(Debug, Clone)]
pub struct CreateProfileParam {
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub is_admin: bool,
}

/// Parameters for the admin profile update operation.
///
/// `None` fields preserve the current value, matching the partial-update
/// request body.
#[derive(Debug, Clone)]
pub struct AdminUpdateProfileParam {
    pub profile_id: i32,
    pub name: Option<String>,
    pub subscription_status: Option<SubscriptionStatus>,
    pub admin: Option<bool>,
}

/// Paginated collection of profiles with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProfiles {
    pub profiles: Vec<Profile>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProfiles {
    pub fn into_dto(self) -> PaginatedProfilesDto {
        PaginatedProfilesDto {
            profiles: self.profiles.into_iter().map(|p| p.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
