use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(pk_auto(Profile::Id))
                    .col(string_uniq(Profile::Email))
                    .col(string(Profile::Name))
                    .col(string(Profile::PasswordHash))
                    .col(boolean(Profile::Admin).default(false))
                    .col(string(Profile::SubscriptionStatus).default("inactive"))
                    .col(integer(Profile::Xp).default(0))
                    .col(
                        timestamp_with_time_zone(Profile::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    Email,
    Name,
    PasswordHash,
    Admin,
    SubscriptionStatus,
    Xp,
    CreatedAt,
}
