//! Mission domain models.

use crate::model::mission::{MissionDto, MissionToggleResultDto};

/// Mission with today's completion state for one member.
#[derive(Debug, Clone, PartialEq)]
pub struct MissionWithState {
    pub id: i32,
    pub title: String,
    pub xp_reward: i32,
    pub done_today: bool,
}

impl MissionWithState {
    pub fn into_dto(self) -> MissionDto {
        MissionDto {
            id: self.id,
            title: self.title,
            xp_reward: self.xp_reward,
            done_today: self.done_today,
        }
    }
}

/// Result of toggling a mission for today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleResult {
    pub done: bool,
    pub xp_delta: i32,
}

impl ToggleResult {
    pub fn into_dto(self) -> MissionToggleResultDto {
        MissionToggleResultDto {
            done: self.done,
            xp_delta: self.xp_delta,
        }
    }
}
