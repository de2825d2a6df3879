//! Create airlines table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Airlines::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Airlines::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Airlines::Name)
                            .string_len(100)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Airlines::Country).string_len(100).not_null())
                    .col(ColumnDef::new(Airlines::ContactNumber).string_len(20).null())
                    .col(ColumnDef::new(Airlines::EstablishedYear).integer().null())
                    .col(ColumnDef::new(Airlines::FleetSize).integer().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Airlines::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Airlines {
    Table,
    Id,
    Name,
    Country,
    ContactNumber,
    EstablishedYear,
    FleetSize,
}
