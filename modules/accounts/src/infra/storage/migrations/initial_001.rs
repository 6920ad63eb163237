use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Consumers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Consumers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Consumers::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Consumers::Nickname).string().not_null())
                    .col(
                        ColumnDef::new(Consumers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Stores::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Stores::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Stores::UserId).uuid().not_null().unique_key())
                    .col(ColumnDef::new(Stores::StoreName).string().not_null())
                    .col(ColumnDef::new(Stores::ApprovalStatus).string().not_null())
                    .col(
                        ColumnDef::new(Stores::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stores::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Consumers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Consumers {
    Table,
    Id,
    UserId,
    Nickname,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Stores {
    Table,
    Id,
    UserId,
    StoreName,
    ApprovalStatus,
    CreatedAt,
}
