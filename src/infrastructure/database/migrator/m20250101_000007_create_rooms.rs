//! Create rooms table
//!
//! `is_available` is the booking flag the reservation endpoints flip;
//! `(hotel_id, room_number)` is unique within a hotel.

use sea_orm_migration::prelude::*;

use super::m20250101_000004_create_hotels::Hotels;
use super::m20250101_000005_create_room_types::RoomTypes;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::HotelId).integer().not_null())
                    .col(ColumnDef::new(Rooms::RoomTypeId).integer().null())
                    .col(ColumnDef::new(Rooms::RoomNumber).string_len(10).not_null())
                    .col(
                        ColumnDef::new(Rooms::Capacity)
                            .small_integer()
                            .not_null()
                            .default(1),
                    )
                    .col(
                        ColumnDef::new(Rooms::PricePerNight)
                            .decimal_len(8, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rooms::IsAvailable)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rooms_hotel")
                            .from(Rooms::Table, Rooms::HotelId)
                            .to(Hotels::Table, Hotels::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rooms_room_type")
                            .from(Rooms::Table, Rooms::RoomTypeId)
                            .to(RoomTypes::Table, RoomTypes::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_hotel")
                    .table(Rooms::Table)
                    .col(Rooms::HotelId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rooms_hotel_number")
                    .table(Rooms::Table)
                    .col(Rooms::HotelId)
                    .col(Rooms::RoomNumber)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Rooms {
    Table,
    Id,
    HotelId,
    RoomTypeId,
    RoomNumber,
    Capacity,
    PricePerNight,
    IsAvailable,
}
