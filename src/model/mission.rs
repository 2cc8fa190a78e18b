use serde::{Deserialize, Serialize};

/// Active mission with today's completion state for the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionDto {
    pub id: i32,
    pub title: String,
    pub xp_reward: i32,
    pub done_today: bool,
}

/// Request body for `POST /api/missions/toggle`.
///
/// The `action` field is kept from the original wire contract; the only
/// accepted value is `"toggle"`.
#[derive(Debug, Clone, Deserialize)]
pub struct MissionToggleDto {
    pub action: String,
    pub mission_id: i32,
}

/// Result of toggling a daily mission.
///
/// Toggling a mission on and off again nets `xp_delta` of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionToggleResultDto {
    pub done: bool,
    pub xp_delta: i32,
}
