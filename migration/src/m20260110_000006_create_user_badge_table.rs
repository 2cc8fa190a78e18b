use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260110_000001_create_profile_table::Profile, m20260110_000005_create_badge_table::Badge,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserBadge::Table)
                    .if_not_exists()
                    .col(pk_auto(UserBadge::Id))
                    .col(integer(UserBadge::ProfileId))
                    .col(integer(UserBadge::BadgeId))
                    .col(
                        timestamp_with_time_zone(UserBadge::AwardedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_badge_profile_id")
                            .from(UserBadge::Table, UserBadge::ProfileId)
                            .to(Profile::Table, Profile::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_badge_badge_id")
                            .from(UserBadge::Table, UserBadge::BadgeId)
                            .to(Badge::Table, Badge::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("uq_user_badge_profile_badge")
                    .table(UserBadge::Table)
                    .col(UserBadge::ProfileId)
                    .col(UserBadge::BadgeId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserBadge::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserBadge {
    Table,
    Id,
    ProfileId,
    BadgeId,
    AwardedAt,
}
