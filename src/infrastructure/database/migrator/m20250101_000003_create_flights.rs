//! Create flights table

use sea_orm_migration::prelude::*;

use super::m20250101_000002_create_airlines::Airlines;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Flights::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Flights::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Flights::FlightNumber)
                            .string_len(10)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Flights::Origin).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Flights::Destination)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Flights::DepartureTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Flights::ArrivalTime)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Flights::AirlineId).integer().not_null())
                    .col(ColumnDef::new(Flights::SeatCount).integer().not_null())
                    .col(
                        ColumnDef::new(Flights::AvailableSeats)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Flights::Price)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_flights_airline")
                            .from(Flights::Table, Flights::AirlineId)
                            .to(Airlines::Table, Airlines::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flights_airline")
                    .table(Flights::Table)
                    .col(Flights::AirlineId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_flights_departure")
                    .table(Flights::Table)
                    .col(Flights::DepartureTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Flights::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Flights {
    Table,
    Id,
    FlightNumber,
    Origin,
    Destination,
    DepartureTime,
    ArrivalTime,
    AirlineId,
    SeatCount,
    AvailableSeats,
    Price,
}
