use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_profile_table::Profile, m20260112_000007_create_mission_table::Mission,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MissionCompletion::Table)
                    .if_not_exists()
                    .col(pk_auto(MissionCompletion::Id))
                    .col(integer(MissionCompletion::ProfileId))
                    .col(integer(MissionCompletion::MissionId))
                    .col(date(MissionCompletion::CompletedOn))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_completion_profile_id")
                            .from(MissionCompletion::Table, MissionCompletion::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_mission_completion_mission_id")
                            .from(MissionCompletion::Table, MissionCompletion::MissionId)
                            .to(Mission::Table, Mission::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_mission_completion_profile_mission_day")
                    .table(MissionCompletion::Table)
                    .col(MissionCompletion::ProfileId)
                    .col(MissionCompletion::MissionId)
                    .col(MissionCompletion::CompletedOn)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MissionCompletion::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MissionCompletion {
    Table,
    Id,
    ProfileId,
    MissionId,
    CompletedOn,
}
