pub mod model;
pub mod repository;

pub use model::{
    Amenity, AmenityPatch, NewAmenity, NewRoom, NewRoomType, Room, RoomPatch, RoomType,
    RoomTypePatch,
};
pub use repository::{AmenityRepository, RoomRepository, RoomTypeRepository};
