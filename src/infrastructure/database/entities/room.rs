//! Room entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Room model. `(hotel_id, room_number)` is unique (enforced by index).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub hotel_id: i32,
    #[sea_orm(nullable)]
    pub room_type_id: Option<i32>,

    /// e.g. "101", "A-203"
    pub room_number: String,
    pub capacity: i16,
    pub price_per_night: Decimal,

    /// Availability flag: claimed on booking, released on cancellation
    pub is_available: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::hotel::Entity",
        from = "Column::HotelId",
        to = "super::hotel::Column::Id"
    )]
    Hotel,
    #[sea_orm(
        belongs_to = "super::room_type::Entity",
        from = "Column::RoomTypeId",
        to = "super::room_type::Column::Id"
    )]
    RoomType,
}

impl Related<super::hotel::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Hotel.def()
    }
}

impl Related<super::room_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RoomType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
