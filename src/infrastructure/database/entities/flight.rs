//! Flight entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flights")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTimeUtc,
    pub arrival_time: DateTimeUtc,

    pub airline_id: i32,

    pub seat_count: i32,
    pub available_seats: i32,
    pub price: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::airline::Entity",
        from = "Column::AirlineId",
        to = "super::airline::Column::Id"
    )]
    Airline,
}

impl Related<super::airline::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Airline.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
