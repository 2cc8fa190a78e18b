//! Academy lesson data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::academy::UpsertLessonParam;

pub struct LessonRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LessonRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        param: UpsertLessonParam,
    ) -> Result<entity::academy_lesson::Model, DbErr> {
        entity::academy_lesson::ActiveModel {
            module_id: ActiveValue::Set(param.module_id),
            title: ActiveValue::Set(param.title),
            order_index: ActiveValue::Set(param.order_index),
            published: ActiveValue::Set(param.published),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(&self, id: i32, param: UpsertLessonParam) -> Result<u64, DbErr> {
        let result = entity::prelude::AcademyLesson::update_many()
            .filter(entity::academy_lesson::Column::Id.eq(id))
            .col_expr(
                entity::academy_lesson::Column::Title,
                sea_orm::sea_query::Expr::value(param.title),
            )
            .col_expr(
                entity::academy_lesson::Column::OrderIndex,
                sea_orm::sea_query::Expr::value(param.order_index),
            )
            .col_expr(
                entity::academy_lesson::Column::Published,
                sea_orm::sea_query::Expr::value(param.published),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::AcademyLesson::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::academy_lesson::Model>, DbErr> {
        entity::prelude::AcademyLesson::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Gets a module's lessons ordered by position, then id.
    ///
    /// The id tiebreak keeps the ordering stable when historical data holds
    /// duplicate `order_index` values; the renumbering maintenance task
    /// relies on the same ordering.
    pub async fn get_by_module(
        &self,
        module_id: i32,
    ) -> Result<Vec<entity::academy_lesson::Model>, DbErr> {
        entity::prelude::AcademyLesson::find()
            .filter(entity::academy_lesson::Column::ModuleId.eq(module_id))
            .order_by_asc(entity::academy_lesson::Column::OrderIndex)
            .order_by_asc(entity::academy_lesson::Column::Id)
            .all(self.db)
            .await
    }

    /// Ids of the published lessons in a module.
    pub async fn published_ids_by_module(&self, module_id: i32) -> Result<Vec<i32>, DbErr> {
        let lessons = entity::prelude::AcademyLesson::find()
            .filter(entity::academy_lesson::Column::ModuleId.eq(module_id))
            .filter(entity::academy_lesson::Column::Published.eq(true))
            .all(self.db)
            .await?;

        Ok(lessons.into_iter().map(|l| l.id).collect())
    }

    /// Rewrites one lesson's `order_index`, used by the renumbering task.
    pub async fn set_order_index(&self, id: i32, order_index: i32) -> Result<(), DbErr> {
        entity::prelude::AcademyLesson::update_many()
            .filter(entity::academy_lesson::Column::Id.eq(id))
            .col_expr(
                entity::academy_lesson::Column::OrderIndex,
                sea_orm::sea_query::Expr::value(order_index),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }
}
