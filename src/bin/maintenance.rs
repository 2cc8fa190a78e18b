//! Maintenance CLI.
//!
//! Runs one named maintenance task against the configured database and
//! records the outcome in the `maintenance_run` ledger. Every task is safe
//! to re-run. Failures exit non-zero.
//!
//! ```text
//! maintenance <task>
//! maintenance history
//! ```

use std::process::ExitCode;

use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

use toptier::server::service::maintenance;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(task) = args.next() else {
        eprintln!("usage: maintenance <task>");
        print_tasks();
        return ExitCode::from(2);
    };

    let db = match connect().await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("failed to connect to database: {err}");
            return ExitCode::FAILURE;
        }
    };

    if task == "history" {
        return match maintenance::history(&db).await {
            Ok(lines) if lines.is_empty() => {
                println!("no maintenance runs recorded");
                ExitCode::SUCCESS
            }
            Ok(lines) => {
                for line in lines {
                    println!("{line}");
                }
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("failed to read ledger: {err}");
                ExitCode::FAILURE
            }
        };
    }

    if !maintenance::TASK_NAMES.contains(&task.as_str()) {
        eprintln!("unknown task '{task}'");
        print_tasks();
        return ExitCode::from(2);
    }

    match maintenance::run_task(&db, &task).await {
        Ok(summary) => {
            println!("{task}: {summary}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{task} failed: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn connect() -> Result<DatabaseConnection, Box<dyn std::error::Error>> {
    let database_url = std::env::var("DATABASE_URL")?;

    let mut opt = ConnectOptions::new(database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;
    Migrator::up(&db, None).await?;

    Ok(db)
}

fn print_tasks() {
    eprintln!("available tasks:");
    for name in maintenance::TASK_NAMES {
        eprintln!("  {name}");
    }
    eprintln!("  history");
}
