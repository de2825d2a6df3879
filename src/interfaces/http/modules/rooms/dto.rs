//! Room catalog DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::room::{Amenity, NewRoom, Room, RoomPatch};
use crate::interfaces::http::common::double_option;
use crate::interfaces::http::modules::amenities::AmenityResponse;

/// Room with its attached amenities.
#[derive(Debug, Serialize, ToSchema)]
pub struct RoomResponse {
    pub id: i32,
    pub hotel_id: i32,
    pub room_type_id: Option<i32>,
    pub room_number: String,
    pub capacity: i16,
    pub price_per_night: Decimal,
    pub is_available: bool,
    pub amenities: Vec<AmenityResponse>,
}

impl RoomResponse {
    pub fn from_parts(room: Room, amenities: Vec<Amenity>) -> Self {
        Self {
            id: room.id,
            hotel_id: room.hotel_id,
            room_type_id: room.room_type_id,
            room_number: room.room_number,
            capacity: room.capacity,
            price_per_night: room.price_per_night,
            is_available: room.is_available,
            amenities: amenities.into_iter().map(AmenityResponse::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomRequest {
    pub hotel_id: i32,
    pub room_type_id: Option<i32>,
    #[validate(length(min = 1, max = 50, message = "Room number must be 1-50 characters"))]
    pub room_number: String,
    pub capacity: i16,
    pub price_per_night: Decimal,
    /// Defaults to available
    pub is_available: Option<bool>,
    /// Amenities to attach, by ID
    pub amenity_ids: Option<Vec<i32>>,
}

impl CreateRoomRequest {
    pub fn into_parts(self) -> (NewRoom, Vec<i32>) {
        let amenity_ids = self.amenity_ids.unwrap_or_default();
        let room = NewRoom {
            hotel_id: self.hotel_id,
            room_type_id: self.room_type_id,
            room_number: self.room_number,
            capacity: self.capacity,
            price_per_night: self.price_per_night,
            is_available: self.is_available.unwrap_or(true),
        };
        (room, amenity_ids)
    }
}

/// Partial room update. The owning hotel is immutable; `null` for
/// `room_type_id` detaches the type; `amenity_ids` replaces the
/// attached set wholesale when present.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomRequest {
    #[serde(default, deserialize_with = "double_option")]
    pub room_type_id: Option<Option<i32>>,
    #[validate(length(min = 1, max = 50, message = "Room number must be 1-50 characters"))]
    pub room_number: Option<String>,
    pub capacity: Option<i16>,
    pub price_per_night: Option<Decimal>,
    pub is_available: Option<bool>,
    pub amenity_ids: Option<Vec<i32>>,
}

impl UpdateRoomRequest {
    pub fn into_parts(self) -> (RoomPatch, Option<Vec<i32>>) {
        let amenity_ids = self.amenity_ids;
        let patch = RoomPatch {
            room_type_id: self.room_type_id,
            room_number: self.room_number,
            capacity: self.capacity,
            price_per_night: self.price_per_night,
            is_available: self.is_available,
        };
        (patch, amenity_ids)
    }
}
