//! Room aggregate: rooms, room types and amenities

use rust_decimal::Decimal;

/// Bookable hotel room. `(hotel_id, room_number)` is unique.
///
/// `is_available` is the booking flag: claimed on reservation, released
/// on cancellation.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: i32,
    pub hotel_id: i32,
    pub room_type_id: Option<i32>,
    pub room_number: String,
    pub capacity: i16,
    pub price_per_night: Decimal,
    pub is_available: bool,
}

#[derive(Debug, Clone)]
pub struct NewRoom {
    pub hotel_id: i32,
    pub room_type_id: Option<i32>,
    pub room_number: String,
    pub capacity: i16,
    pub price_per_night: Decimal,
    pub is_available: bool,
}

/// Partial room update. The owning hotel is immutable.
#[derive(Debug, Clone, Default)]
pub struct RoomPatch {
    pub room_type_id: Option<Option<i32>>,
    pub room_number: Option<String>,
    pub capacity: Option<i16>,
    pub price_per_night: Option<Decimal>,
    pub is_available: Option<bool>,
}

/// Room category, e.g. "Single", "Double", "Suite".
#[derive(Debug, Clone)]
pub struct RoomType {
    pub id: i32,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewRoomType {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct RoomTypePatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// Room feature such as Wi-Fi or a minibar. `icon_class` is a CSS
/// class hint for clients, e.g. "fas fa-wifi".
#[derive(Debug, Clone)]
pub struct Amenity {
    pub id: i32,
    pub name: String,
    pub icon_class: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewAmenity {
    pub name: String,
    pub icon_class: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct AmenityPatch {
    pub name: Option<String>,
    pub icon_class: Option<Option<String>>,
}
