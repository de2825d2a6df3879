pub mod model;
pub mod repository;

pub use model::{Hotel, HotelFilter, HotelPatch, HotelSort, HotelWithPrice, NewHotel};
pub use repository::HotelRepository;
