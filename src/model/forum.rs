use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForumPostDto {
    pub id: i32,
    pub profile_id: i32,
    pub author_name: String,
    pub title: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedForumPostsDto {
    pub posts: Vec<ForumPostDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Request body for creating or editing a forum post.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertForumPostDto {
    pub title: String,
    pub body: String,
}
