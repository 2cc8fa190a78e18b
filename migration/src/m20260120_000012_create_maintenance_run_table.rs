use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MaintenanceRun::Table)
                    .if_not_exists()
                    .col(pk_auto(MaintenanceRun::Id))
                    .col(string(MaintenanceRun::TaskName))
                    .col(
                        timestamp_with_time_zone(MaintenanceRun::RunAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(text(MaintenanceRun::Summary))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MaintenanceRun::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MaintenanceRun {
    Table,
    Id,
    TaskName,
    RunAt,
    Summary,
}
