//! Airline aggregate

pub mod model;
pub mod repository;

pub use model::{Airline, AirlinePatch, NewAirline};
pub use repository::AirlineRepository;
