use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_profile_table::Profile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LoginLog::Table)
                    .if_not_exists()
                    .col(pk_auto(LoginLog::Id))
                    .col(integer(LoginLog::ProfileId))
                    .col(string(LoginLog::Ip))
                    .col(string(LoginLog::UserAgent))
                    .col(
                        timestamp_with_time_zone(LoginLog::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_login_log_profile_id")
                            .from(LoginLog::Table, LoginLog::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LoginLog::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LoginLog {
    Table,
    Id,
    ProfileId,
    Ip,
    UserAgent,
    CreatedAt,
}
