use crate::server::data::academy_lesson::LessonRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_module;
mod published_ids_by_module;
mod set_order_index;
