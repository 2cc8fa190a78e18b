use crate::server::data::lesson_completion::CompletionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod completed_ids_among;
mod create_if_missing;
mod delete_by_ids;
