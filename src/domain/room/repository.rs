//! Room, room type and amenity repository interfaces

use async_trait::async_trait;

use crate::domain::room::model::{
    Amenity, AmenityPatch, NewAmenity, NewRoom, NewRoomType, Room, RoomPatch, RoomType,
    RoomTypePatch,
};
use crate::domain::DomainResult;
use crate::shared::types::PaginatedResult;

#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Creates a room and attaches the given amenities.
    async fn create(&self, room: NewRoom, amenity_ids: &[i32]) -> DomainResult<Room>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>>;

    async fn find_by_ids(&self, ids: &[i32]) -> DomainResult<Vec<Room>>;

    /// All rooms of a hotel, ordered by room number.
    async fn find_by_hotel(&self, hotel_id: i32) -> DomainResult<Vec<Room>>;

    /// Amenities attached to a room, ordered by name.
    async fn amenities_of(&self, room_id: i32) -> DomainResult<Vec<Amenity>>;

    /// Partial update; `amenity_ids` of `Some` replaces the attached
    /// amenity set wholesale.
    async fn update(
        &self,
        id: i32,
        patch: RoomPatch,
        amenity_ids: Option<&[i32]>,
    ) -> DomainResult<Option<Room>>;

    async fn delete(&self, id: i32) -> DomainResult<bool>;
}

#[async_trait]
pub trait RoomTypeRepository: Send + Sync {
    async fn create(&self, room_type: NewRoomType) -> DomainResult<RoomType>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RoomType>>;

    /// All room types ordered by name, for form selects.
    async fn find_all(&self) -> DomainResult<Vec<RoomType>>;

    async fn list(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<RoomType>>;

    async fn update(&self, id: i32, patch: RoomTypePatch) -> DomainResult<Option<RoomType>>;

    async fn delete(&self, id: i32) -> DomainResult<bool>;
}

#[async_trait]
pub trait AmenityRepository: Send + Sync {
    async fn create(&self, amenity: NewAmenity) -> DomainResult<Amenity>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Amenity>>;

    /// All amenities ordered by name, for form selects.
    async fn find_all(&self) -> DomainResult<Vec<Amenity>>;

    async fn list(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<Amenity>>;

    async fn update(&self, id: i32, patch: AmenityPatch) -> DomainResult<Option<Amenity>>;

    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
