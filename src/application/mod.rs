//! Application layer
//!
//! Services orchestrate the multi-step use-cases on top of the domain
//! ports. Single-call CRUD goes straight from the HTTP handlers to the
//! repositories; identity (credentials, tokens, sessions) and booking
//! (ownership checks around the transactional room claim) are the two
//! flows with real orchestration.

pub mod booking;
pub mod identity;

pub use booking::{BookingDetail, BookingService, UserBookings};
pub use identity::{IdentityService, ProfileUpdate};
