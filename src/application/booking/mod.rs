//! Booking module
//!
//! `BookingService` wraps the transactional room claim with the
//! ownership rules of cancellation and detail reads, and assembles the
//! per-user bookings overview for the web surface.

pub mod service;

pub use service::{BookingDetail, BookingService, UserBookings};
