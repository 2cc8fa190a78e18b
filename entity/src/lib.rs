//! SeaORM entity models for the Top Tier Men platform database.
//!
//! Each module maps one table. The `prelude` module re-exports every entity
//! for use with `EntityTrait` queries and the test schema builder.

pub mod academy_lesson;
pub mod academy_module;
pub mod badge;
pub mod forum_post;
pub mod lesson_completion;
pub mod login_log;
pub mod maintenance_run;
pub mod mission;
pub mod mission_completion;
pub mod payment;
pub mod profile;
pub mod user_badge;

pub mod prelude;
