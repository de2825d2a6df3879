//! Create hotels table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotels::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Hotels::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Hotels::Name).string_len(200).not_null())
                    .col(ColumnDef::new(Hotels::City).string_len(100).not_null())
                    .col(ColumnDef::new(Hotels::Address).text().not_null())
                    .col(
                        ColumnDef::new(Hotels::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Hotels::StarRating).small_integer().not_null())
                    .col(
                        ColumnDef::new(Hotels::ContactEmail)
                            .string_len(255)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Hotels::MainImage).string().null())
                    .col(ColumnDef::new(Hotels::ManagerId).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotels_manager")
                            .from(Hotels::Table, Hotels::ManagerId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotels_city")
                    .table(Hotels::Table)
                    .col(Hotels::City)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotels_manager")
                    .table(Hotels::Table)
                    .col(Hotels::ManagerId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotels::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Hotels {
    Table,
    Id,
    Name,
    City,
    Address,
    Description,
    StarRating,
    ContactEmail,
    MainImage,
    ManagerId,
}
