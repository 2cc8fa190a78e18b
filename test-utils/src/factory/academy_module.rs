//! Academy module factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test academy modules. Defaults to published with a
/// unique slug.
pub struct ModuleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    slug: String,
    order_index: i32,
    published: bool,
}

impl<'a> ModuleFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            title: format!("Module {}", id),
            slug: format!("module-{}", id),
            order_index: 1,
            published: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
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

    pub async fn build(self) -> Result<entity::academy_module::Model, DbErr> {
        entity::academy_module::ActiveModel {
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            order_index: ActiveValue::Set(self.order_index),
            published: ActiveValue::Set(self.published),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a published module with default values.
pub async fn create_module(
    db: &DatabaseConnection,
) -> Result<entity::academy_module::Model, DbErr> {
    ModuleFactory::new(db).build().await
}
