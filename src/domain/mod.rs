pub mod access;
pub mod airline;
pub mod flight;
pub mod hotel;
pub mod payment;
pub mod repositories;
pub mod reservation;
pub mod review;
pub mod room;
pub mod session;
pub mod tour;
pub mod user;

// Re-export commonly used types
pub use access::{AuthScheme, Principal};
pub use airline::Airline;
pub use flight::{Flight, FlightFilter, FlightSort};
pub use hotel::{Hotel, HotelFilter, HotelSort, HotelWithPrice};
pub use payment::{Payment, PaymentMethod};
pub use repositories::{DomainResult, RepositoryProvider};
pub use reservation::{
    FlightReservation, HotelReservation, PaymentStatus, ReservationKind, TourReservation,
};
pub use review::{Review, ReviewTarget};
pub use room::{Amenity, Room, RoomType};
pub use session::Session;
pub use tour::{Tour, TourFilter, TourSort};
pub use user::User;

// Re-export DomainError for convenience
pub use crate::shared::types::DomainError;
