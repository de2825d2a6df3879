pub mod model;
pub mod repository;

pub use model::{
    FlightReservation, FlightReservationPatch, HotelReservation, NewFlightReservation,
    NewTourReservation, PaymentStatus, ReservationKind, TourReservation, TourReservationPatch,
};
pub use repository::BookingRepository;
