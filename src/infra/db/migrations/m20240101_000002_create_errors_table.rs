//! Migration: Create errors table for the server-error log.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Errors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Errors::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Errors::Stack).text().not_null())
                    .col(
                        ColumnDef::new(Errors::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Most recent failures are read first
        manager
            .create_index(
                Index::create()
                    .name("idx_errors_date")
                    .table(Errors::Table)
                    .col(Errors::Date)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Errors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Errors {
    Table,
    Id,
    Stack,
    Date,
}
