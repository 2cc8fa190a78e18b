//! Forum domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::forum::{ForumPostDto, PaginatedForumPostsDto};

/// Forum post joined with its author's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct ForumPost {
    pub id: i32,
    pub profile_id: i32,
    pub author_name: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ForumPost {
    pub fn into_dto(self) -> ForumPostDto {
        ForumPostDto {
            id: self.id,
            profile_id: self.profile_id,
            author_name: self.author_name,
            title: self.title,
            body: self.body,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedForumPosts {
    pub posts: Vec<ForumPost>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedForumPosts {
    pub fn into_dto(self) -> PaginatedForumPostsDto {
        PaginatedForumPostsDto {
            posts: self.posts.into_iter().map(|p| p.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for creating or editing a post.
#[derive(Debug, Clone)]
pub struct UpsertForumPostParam {
    pub title: String,
    pub body: String,
}
