//! Create payments table
//!
//! A payment references exactly one reservation as (kind, id); the
//! unique index keeps it one payment per reservation. No database FK is
//! possible across the three reservation tables, so the cancel path
//! removes payment rows in its own transaction.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Payments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Payments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Payments::ReservationKind)
                            .string_len(6)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Payments::ReservationId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Payments::Amount).decimal_len(10, 2).not_null())
                    .col(
                        ColumnDef::new(Payments::PaymentMethod)
                            .string_len(20)
                            .not_null()
                            .default("Credit Card"),
                    )
                    .col(
                        ColumnDef::new(Payments::Status)
                            .string_len(6)
                            .not_null()
                            .default("Paid"),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_payments_reservation")
                    .table(Payments::Table)
                    .col(Payments::ReservationKind)
                    .col(Payments::ReservationId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Payments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Payments {
    Table,
    Id,
    ReservationKind,
    ReservationId,
    Amount,
    PaymentMethod,
    Status,
}
