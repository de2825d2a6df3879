//! Create tour_reservations table

use sea_orm_migration::prelude::*;

use super::m20250101_000001_create_users::Users;
use super::m20250101_000009_create_tours::Tours;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TourReservations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TourReservations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TourReservations::UserId).string().not_null())
                    .col(
                        ColumnDef::new(TourReservations::TourId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TourReservations::ReservationDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TourReservations::PaymentStatus)
                            .string_len(6)
                            .not_null()
                            .default("Paid"),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tour_reservations_user")
                            .from(TourReservations::Table, TourReservations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tour_reservations_tour")
                            .from(TourReservations::Table, TourReservations::TourId)
                            .to(Tours::Table, Tours::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_tour_reservations_user")
                    .table(TourReservations::Table)
                    .col(TourReservations::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TourReservations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum TourReservations {
    Table,
    Id,
    UserId,
    TourId,
    ReservationDate,
    PaymentStatus,
}
