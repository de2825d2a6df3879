//! Create tours table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tours::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tours::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tours::Name).string_len(200).not_null())
                    .col(
                        ColumnDef::new(Tours::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Tours::Destination)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tours::StartDate).date().not_null())
                    .col(ColumnDef::new(Tours::EndDate).date().not_null())
                    .col(ColumnDef::new(Tours::Price).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(Tours::MaxParticipants)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tours::AvailableSlots).integer().not_null())
                    .col(ColumnDef::new(Tours::GuideName).string_len(100).null())
                    .col(ColumnDef::new(Tours::Image).string().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tours_destination")
                    .table(Tours::Table)
                    .col(Tours::Destination)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tours::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Tours {
    Table,
    Id,
    Name,
    Description,
    Destination,
    StartDate,
    EndDate,
    Price,
    MaxParticipants,
    AvailableSlots,
    GuideName,
    Image,
}
