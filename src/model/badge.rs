use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub description: String,
}

/// Badge a member has earned, with the time it was awarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBadgeDto {
    pub badge: BadgeDto,
    pub awarded_at: DateTime<Utc>,
}
