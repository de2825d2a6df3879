//! Create flight_reservations table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_users::Users;
use super::m20250101_000003_create_flights::Flights;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FlightReservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FlightReservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(FlightReservations::UserId)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FlightReservations::FlightId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FlightReservations::SeatNumber)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FlightReservations::ReservationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FlightReservations::PaymentStatus)
                            .string_len(6)
                            .not_null()
                            .default("Paid"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_reservations_user")
                            .from(FlightReservations::Table, FlightReservations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flight_reservations_flight")
                            .from(FlightReservations::Table, FlightReservations::FlightId)
                            .to(Flights::Table, Flights::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flight_reservations_user")
                    .table(FlightReservations::Table)
                    .col(FlightReservations::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FlightReservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum FlightReservations {
    Table,
    Id,
    UserId,
    FlightId,
    SeatNumber,
    ReservationDate,
    PaymentStatus,
}
