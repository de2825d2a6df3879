//! Database entities module

pub mod airline;
pub mod amenity;
pub mod flight;
pub mod flight_reservation;
pub mod hotel;
pub mod hotel_reservation;
pub mod payment;
pub mod review;
pub mod room;
pub mod room_amenity;
pub mod room_type;
pub mod session;
pub mod tour;
pub mod tour_reservation;
pub mod user;

pub use airline::Entity as Airline;
pub use amenity::Entity as Amenity;
pub use flight::Entity as Flight;
pub use flight_reservation::Entity as FlightReservation;
pub use hotel::Entity as Hotel;
pub use hotel_reservation::Entity as HotelReservation;
pub use payment::Entity as Payment;
pub use review::Entity as Review;
pub use room::Entity as Room;
pub use room_amenity::Entity as RoomAmenity;
pub use room_type::Entity as RoomType;
pub use session::Entity as Session;
pub use tour::Entity as Tour;
pub use tour_reservation::Entity as TourReservation;
pub use user::Entity as User;
