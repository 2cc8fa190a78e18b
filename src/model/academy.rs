use serde::{Deserialize, Serialize};

/// Academy module with the caller's progress through its published lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModuleDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub order_index: i32,
    pub published: bool,
    pub lesson_count: u64,
    pub completed_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonDto {
    pub id: i32,
    pub module_id: i32,
    pub title: String,
    pub order_index: i32,
    pub published: bool,
    pub completed: bool,
}

/// Module as the admin curriculum surface sees it, without progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminModuleDto {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub order_index: i32,
    pub published: bool,
}

/// Lesson as the admin curriculum surface sees it, without progress.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminLessonDto {
    pub id: i32,
    pub module_id: i32,
    pub title: String,
    pub order_index: i32,
    pub published: bool,
}

/// Request body for creating or updating a module (admin).
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertModuleDto {
    pub title: String,
    pub slug: String,
    pub order_index: i32,
    pub published: bool,
}

/// Request body for creating or updating a lesson (admin).
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertLessonDto {
    pub title: String,
    pub order_index: i32,
    pub published: bool,
}

/// Response for `POST /api/academy/lessons/{id}/complete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonCompletionDto {
    /// False when the lesson was already completed (the call is a no-op).
    pub newly_completed: bool,
    /// True when this completion earned the Academy Master badge.
    pub badge_awarded: bool,
}
