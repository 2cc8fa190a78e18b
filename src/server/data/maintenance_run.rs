//! Maintenance run ledger repository.

use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct MaintenanceRunRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MaintenanceRunRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records one ledger row for a completed task run.
    pub async fn record(&self, task_name: &str, summary: &str) -> Result<(), DbErr> {
        entity::maintenance_run::ActiveModel {
            task_name: ActiveValue::Set(task_name.to_string()),
            run_at: ActiveValue::Set(chrono::Utc::now()),
            summary: ActiveValue::Set(summary.to_string()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;
        Ok(())
    }

    /// All ledger rows, newest first. Surfaced by the CLI's `history` task.
    pub async fn get_all(&self) -> Result<Vec<entity::maintenance_run::Model>, DbErr> {
        entity::prelude::MaintenanceRun::find()
            .order_by_desc(entity::maintenance_run::Column::RunAt)
            .all(self.db)
            .await
    }
}
