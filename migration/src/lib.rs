pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_profile_table;
mod m20260110_000002_create_academy_module_table;
mod m20260110_000003_create_academy_lesson_table;
mod m20260110_000004_create_lesson_completion_table;
mod m20260110_000005_create_badge_table;
mod m20260110_000006_create_user_badge_table;
mod m20260112_000007_create_mission_table;
mod m20260112_000008_create_mission_completion_table;
mod m20260115_000009_create_forum_post_table;
mod m20260118_000010_create_payment_table;
mod m20260118_000011_create_login_log_table;
mod m20260120_000012_create_maintenance_run_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_profile_table::Migration),
            Box::new(m20260110_000002_create_academy_module_table::Migration),
            Box::new(m20260110_000003_create_academy_lesson_table::Migration),
            Box::new(m20260110_000004_create_lesson_completion_table::Migration),
            Box::new(m20260110_000005_create_badge_table::Migration),
            Box::new(m20260110_000006_create_user_badge_table::Migration),
            Box::new(m20260112_000007_create_mission_table::Migration),
            Box::new(m20260112_000008_create_mission_completion_table::Migration),
            Box::new(m20260115_000009_create_forum_post_table::Migration),
            Box::new(m20260118_000010_create_payment_table::Migration),
            Box::new(m20260118_000011_create_login_log_table::Migration),
            Box::new(m20260120_000012_create_maintenance_run_table::Migration),
        ]
    }
}
