//! Academy lesson factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test lessons in a module. Defaults to published.
pub struct LessonFactory<'a> {
    db: &'a DatabaseConnection,
    module_id: i32,
    title: String,
    order_index: i32,
    published: bool,
}

impl<'a> LessonFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, module_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            module_id,
            title: format!("Lesson {}", id),
            order_index: 1,
            published: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn order_index(mut self, order_index: i32) -> Self {
        self.order_index = order_index;
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub async fn build(self) -> Result<entity::academy_lesson::Model, DbErr> {
        entity::academy_lesson::ActiveModel {
            module_id: ActiveValue::Set(self.module_id),
            title: ActiveValue::Set(self.title),
            order_index: ActiveValue::Set(self.order_index),
            published: ActiveValue::Set(self.published),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published lesson in the given module with default values.
pub async fn create_lesson(
    db: &DatabaseConnection,
    module_id: i32,
) -> Result<entity::academy_lesson::Model, DbErr> {
    LessonFactory::new(db, module_id).build().await
}
