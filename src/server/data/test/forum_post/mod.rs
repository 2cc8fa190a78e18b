use crate::server::{data::forum_post::ForumPostRepository, model::forum::UpsertForumPostParam};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_paginated;
mod update;
