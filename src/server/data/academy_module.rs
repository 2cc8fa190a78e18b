//! Academy module data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::academy::UpsertModuleParam;

pub struct ModuleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ModuleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: UpsertModuleParam,
    ) -> Result<entity::academy_module::Model, DbErr> {
        entity::academy_module::ActiveModel {
            title: ActiveValue::Set(param.title),
            slug: ActiveValue::Set(param.slug),
            order_index: ActiveValue::Set(param.order_index),
            published: ActiveValue::Set(param.published),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates all editable columns of a module.
    ///
    /// Returns the number of rows touched; zero means the id did not exist.
    pub async fn update(&self, id: i32, param: UpsertModuleParam) -> Result<u64, DbErr> {
        let result = entity::prelude::AcademyModule::update_many()
            .filter(entity::academy_module::Column::Id.eq(id))
            .col_expr(
                entity::academy_module::Column::Title,
                sea_orm::sea_query::Expr::value(param.title),
            )
            .col_expr(
                entity::academy_module::Column::Slug,
                sea_orm::sea_query::Expr::value(param.slug),
            )
            .col_expr(
                entity::academy_module::Column::OrderIndex,
                sea_orm::sea_query::Expr::value(param.order_index),
            )
            .col_expr(
                entity::academy_module::Column::Published,
                sea_orm::sea_query::Expr::value(param.published),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a module; lessons and completions cascade.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AcademyModule::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::academy_module::Model>, DbErr> {
        entity::prelude::AcademyModule::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets all modules ordered by their position in the curriculum.
    pub async fn get_all(&self) -> Result<Vec<entity::academy_module::Model>, DbErr> {
        entity::prelude::AcademyModule::find()
            .order_by_asc(entity::academy_module::Column::OrderIndex)
            .all(self.db)
            .await
    }

    pub async fn get_published(&self) -> Result<Vec<entity::academy_module::Model>, DbErr> {
        entity::prelude::AcademyModule::find()
            .filter(entity::academy_module::Column::Published.eq(true))
            .order_by_asc(entity::academy_module::Column::OrderIndex)
            .all(self.db)
            .await
    }
}
