//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::airline::AirlineRepository;
use super::flight::FlightRepository;
use super::hotel::HotelRepository;
use super::payment::PaymentRepository;
use super::reservation::BookingRepository;
use super::review::ReviewRepository;
use super::room::{AmenityRepository, RoomRepository, RoomTypeRepository};
use super::session::SessionRepository;
use super::tour::TourRepository;
use super::user::UserRepository;
use crate::shared::types::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// Consumers request only the repository they need:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let hotel = repos.hotels().find_by_id(3).await?;
///     let rooms = repos.rooms().find_by_hotel(hotel.id).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn UserRepository;
    fn airlines(&self) -> &dyn AirlineRepository;
    fn flights(&self) -> &dyn FlightRepository;
    fn hotels(&self) -> &dyn HotelRepository;
    fn rooms(&self) -> &dyn RoomRepository;
    fn room_types(&self) -> &dyn RoomTypeRepository;
    fn amenities(&self) -> &dyn AmenityRepository;
    fn tours(&self) -> &dyn TourRepository;
    fn bookings(&self) -> &dyn BookingRepository;
    fn payments(&self) -> &dyn PaymentRepository;
    fn reviews(&self) -> &dyn ReviewRepository;
    fn sessions(&self) -> &dyn SessionRepository;
}
