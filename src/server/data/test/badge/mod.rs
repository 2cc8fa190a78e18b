use crate::server::data::badge::BadgeRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod award_if_missing;
mod find_by_code;
mod get_awarded;
