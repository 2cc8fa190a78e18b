//! Maintenance tasks.
//!
//! Each task is safe to run repeatedly and records a ledger row describing
//! what it did. The `maintenance` binary dispatches into [`run_task`].

pub mod backfill_badges;
pub mod dedupe_completions;
pub mod renumber_lessons;

use sea_orm::DatabaseConnection;

use crate::server::{data::maintenance_run::MaintenanceRunRepository, error::AppError};

/// Task names accepted by the CLI.
pub const TASK_NAMES: &[&str] = &["renumber-lessons", "backfill-badges", "dedupe-completions"];

/// Runs one task by name and records the outcome in the ledger.
///
/// Returns the task's summary line. Unknown names are a [`AppError::BadRequest`]
/// so the CLI can print the available tasks and exit non-zero.
pub async fn run_task(db: &DatabaseConnection, name: &str) -> Result<String, AppError> {
    let summary = match name {
        "renumber-lessons" => renumber_lessons::run(db).await?,
        "backfill-badges" => backfill_badges::run(db).await?,
        "dedupe-completions" => dedupe_completions::run(db).await?,
        _ => {
            return Err(AppError::BadRequest(format!("Unknown task '{name}'")));
        }
    };

    MaintenanceRunRepository::new(db).record(name, &summary).await?;
    tracing::info!(task = name, summary = %summary, "maintenance task finished");

    Ok(summary)
}

/// Past runs from the ledger, newest first, one formatted line per run.
pub async fn history(db: &DatabaseConnection) -> Result<Vec<String>, AppError> {
    let runs = MaintenanceRunRepository::new(db).get_all().await?;

    Ok(runs
        .into_iter()
        .map(|run| format!("{}  {}  {}", run.run_at.to_rfc3339(), run.task_name, run.summary))
        .collect())
}
