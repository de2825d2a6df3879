//! REST API modules, one directory per resource.

pub mod airlines;
pub mod amenities;
pub mod auth;
pub mod flight_reservations;
pub mod flights;
pub mod health;
pub mod hotels;
pub mod payments;
pub mod reservations;
pub mod reviews;
pub mod room_types;
pub mod rooms;
pub mod tour_reservations;
pub mod tours;
pub mod users;
