//! Review entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Review model. `review_type` decides which of the three target
/// columns is set: HOTEL reviews point at a room, the others at a
/// flight or tour.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "reviews")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: String,

    /// Review type: HOTEL, FLIGHT, TOUR
    pub review_type: String,
    #[sea_orm(nullable)]
    pub room_id: Option<i32>,
    #[sea_orm(nullable)]
    pub flight_id: Option<i32>,
    #[sea_orm(nullable)]
    pub tour_id: Option<i32>,

    /// Rating, 1 through 5
    pub rating: i16,
    pub comment: String,

    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id"
    )]
    Room,
    #[sea_orm(
        belongs_to = "super::flight::Entity",
        from = "Column::FlightId",
        to = "super::flight::Column::Id"
    )]
    Flight,
    #[sea_orm(
        belongs_to = "super::tour::Entity",
        from = "Column::TourId",
        to = "super::tour::Column::Id"
    )]
    Tour,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
