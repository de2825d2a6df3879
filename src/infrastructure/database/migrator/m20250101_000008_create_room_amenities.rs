//! Create room_amenities join table

use sea_orm_migration::prelude::*;

use super::m20250101_000006_create_amenities::Amenities;
use super::m20250101_000007_create_rooms::Rooms;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RoomAmenities::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(RoomAmenities::RoomId).integer().not_null())
                    .col(
                        ColumnDef::new(RoomAmenities::AmenityId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk_room_amenities")
                            .col(RoomAmenities::RoomId)
                            .col(RoomAmenities::AmenityId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_amenities_room")
                            .from(RoomAmenities::Table, RoomAmenities::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_amenities_amenity")
                            .from(RoomAmenities::Table, RoomAmenities::AmenityId)
                            .to(Amenities::Table, Amenities::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RoomAmenities::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum RoomAmenities {
    Table,
    RoomId,
    AmenityId,
}
