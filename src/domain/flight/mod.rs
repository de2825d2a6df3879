pub mod model;
pub mod repository;

pub use model::{Flight, FlightFilter, FlightPatch, FlightSort, NewFlight};
pub use repository::FlightRepository;
