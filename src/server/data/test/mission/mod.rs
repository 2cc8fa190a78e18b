use crate::server::data::mission::MissionRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod completions;
mod get_active;
