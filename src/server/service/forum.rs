//! Forum service: post CRUD with author-or-admin edit rules.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::forum_post::ForumPostRepository,
    error::{auth::AuthError, AppError},
    model::forum::{ForumPost, PaginatedForumPosts, UpsertForumPostParam},
};

pub struct ForumService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ForumService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_posts(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedForumPosts, AppError> {
        let (posts, total) = ForumPostRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?;

        let total_pages = total.div_ceil(per_page.max(1));

        Ok(PaginatedForumPosts {
            posts,
            total,
            page,
            per_page,
            total_pages,
        })
    }

    pub async fn create_post(
        &self,
        author: &entity::profile::Model,
        param: UpsertForumPostParam,
    ) -> Result<ForumPost, AppError> {
        validate_post(&param)?;

        let post = ForumPostRepository::new(self.db)
            .create(author.id, param)
            .await?;
        tracing::info!(post_id = post.id, profile_id = author.id, "forum post created");

        Ok(ForumPost {
            id: post.id,
            profile_id: post.profile_id,
            author_name: author.name.clone(),
            title: post.title,
            body: post.body,
            created_at: post.created_at,
            updated_at: post.updated_at,
        })
    }

    /// Updates a post. Only the author or an admin may edit.
    pub async fn update_post(
        &self,
        caller: &entity::profile::Model,
        post_id: i32,
        param: UpsertForumPostParam,
    ) -> Result<(), AppError> {
        validate_post(&param)?;

        let repo = ForumPostRepository::new(self.db);
        let post = repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {post_id} not found")))?;

        if post.profile_id != caller.id && !caller.admin {
            return Err(AuthError::AccessDenied(caller.id, "forum post".to_string()).into());
        }

        repo.update(post_id, param).await?;
        Ok(())
    }

    /// Deletes a post. Only the author or an admin may delete.
    pub async fn delete_post(
        &self,
        caller: &entity::profile::Model,
        post_id: i32,
    ) -> Result<(), AppError> {
        let repo = ForumPostRepository::new(self.db);
        let post = repo
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Post {post_id} not found")))?;

        if post.profile_id != caller.id && !caller.admin {
            return Err(AuthError::AccessDenied(caller.id, "forum post".to_string()).into());
        }

        repo.delete(post_id).await?;
        tracing::info!(post_id, profile_id = caller.id, "forum post deleted");
        Ok(())
    }
}

fn validate_post(param: &UpsertForumPostParam) -> Result<(), AppError> {
    if param.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title must not be empty".to_string()));
    }
    if param.body.trim().is_empty() {
        return Err(AppError::BadRequest("Body must not be empty".to_string()));
    }
    Ok(())
}
