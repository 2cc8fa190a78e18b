//! Academy domain models and parameters.

use crate::model::academy::{LessonDto, ModuleDto};

/// Academy module with aggregate progress for one member.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleWithProgress {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub order_index: i32,
    pub published: bool,
    /// Number of published lessons in the module.
    pub lesson_count: u64,
    /// Number of those lessons the member has completed.
    pub completed_count: u64,
}

impl ModuleWithProgress {
    pub fn into_dto(self) -> ModuleDto {
        ModuleDto {
            id: self.id,
            title: self.title,
            slug: self.slug,
            order_index: self.order_index,
            published: self.published,
            lesson_count: self.lesson_count,
            completed_count: self.completed_count,
        }
    }
}

/// Lesson with the member's completion state.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonWithProgress {
    pub id: i32,
    pub module_id: i32,
    pub title: String,
    pub order_index: i32,
    pub published: bool,
    pub completed: bool,
}

impl LessonWithProgress {
    pub fn into_dto(self) -> LessonDto {
        LessonDto {
            id: self.id,
            module_id: self.module_id,
            title: self.title,
            order_index: self.order_index,
            published: self.published,
            completed: self.completed,
        }
    }
}

/// Parameters for creating or updating a module.
#[derive(Debug, Clone)]
pub struct UpsertModuleParam {
    pub title: String,
    pub slug: String,
    pub order_index: i32,
    pub published: bool,
}

/// Parameters for creating or updating a lesson within a module.
#[derive(Debug, Clone)]
pub struct UpsertLessonParam {
    pub module_id: i32,
    pub title: String,
    pub order_index: i32,
    pub published: bool,
}

/// Outcome of a lesson completion request.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOutcome {
    /// False when the completion row already existed.
    pub newly_completed: bool,
    /// The Academy Master badge, when this completion triggered the award.
    pub awarded_badge: Option<crate::server::model::badge::Badge>,
}
