//! Create hotel_reservations table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_users::Users;
use super::m20250101_000007_create_rooms::Rooms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(HotelReservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HotelReservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HotelReservations::UserId).string().not_null())
                    .col(
                        ColumnDef::new(HotelReservations::RoomId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HotelReservations::ReservationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HotelReservations::PaymentStatus)
                            .string_len(6)
                            .not_null()
                            .default("Paid"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_reservations_user")
                            .from(HotelReservations::Table, HotelReservations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_reservations_room")
                            .from(HotelReservations::Table, HotelReservations::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotel_reservations_user")
                    .table(HotelReservations::Table)
                    .col(HotelReservations::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_hotel_reservations_room")
                    .table(HotelReservations::Table)
                    .col(HotelReservations::RoomId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(HotelReservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum HotelReservations {
    Table,
    Id,
    UserId,
    RoomId,
    ReservationDate,
    PaymentStatus,
}
