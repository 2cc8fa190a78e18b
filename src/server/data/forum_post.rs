//! Forum post data repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::forum::{ForumPost, UpsertForumPostParam};

pub struct ForumPostRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ForumPostRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        profile_id: i32,
        param: UpsertForumPostParam,
    ) -> Result<entity::forum_post::Model, DbErr> {
        let now = chrono::Utc::now();
        entity::forum_post::ActiveModel {
            profile_id: ActiveValue::Set(profile_id),
            title: ActiveValue::Set(param.title),
            body: ActiveValue::Set(param.body),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(&self, id: i32, param: UpsertForumPostParam) -> Result<u64, DbErr> {
        let result = entity::prelude::ForumPost::update_many()
            .filter(entity::forum_post::Column::Id.eq(id))
            .col_expr(
                entity::forum_post::Column::Title,
                sea_orm::sea_query::Expr::value(param.title),
            )
            .col_expr(
                entity::forum_post::Column::Body,
                sea_orm::sea_query::Expr::value(param.body),
            )
            .col_expr(
                entity::forum_post::Column::UpdatedAt,
                sea_orm::sea_query::Expr::value(chrono::Utc::now()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ForumPost::delete_by_id(id)
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::forum_post::Model>, DbErr> {
        entity::prelude::ForumPost::find_by_id(id).one(self.db).await
    }

    /// Gets posts newest-first with their author names.
    ///
    /// Posts whose author row is missing are skipped; the cascade delete on
    /// profiles makes that window small.
    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ForumPost>, u64), DbErr> {
        let paginator = entity::prelude::ForumPost::find()
            .find_also_related(entity::prelude::Profile)
            .order_by_desc(entity::forum_post::Column::CreatedAt)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        let posts = rows
            .into_iter()
            .filter_map(|(post, author)| {
                author.map(|a| ForumPost {
                    id: post.id,
                    profile_id: post.profile_id,
                    author_name: a.name,
                    title: post.title,
                    body: post.body,
                    created_at: post.created_at,
                    updated_at: post.updated_at,
                })
            })
            .collect();

        Ok((posts, total))
    }
}
