//! Booking repository interface
//!
//! One port covers all three reservation kinds. Room booking and
//! cancellation are transactional: the availability flip and the
//! reservation row change commit together or not at all.

use async_trait::async_trait;

use crate::domain::reservation::model::{
    FlightReservation, FlightReservationPatch, HotelReservation, NewFlightReservation,
    NewTourReservation, PaymentStatus, TourReservation, TourReservationPatch,
};
use crate::domain::DomainResult;
use crate::shared::types::PaginatedResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Atomically claims the room and records the reservation.
    ///
    /// Fails with `NotFound` when the room does not exist and with
    /// `Conflict` when it is already taken; two concurrent calls for
    /// the same room can never both succeed.
    async fn book_room(
        &self,
        user_id: &str,
        room_id: i32,
        payment_status: PaymentStatus,
    ) -> DomainResult<HotelReservation>;

    /// Releases the room, removes any payment row for the reservation
    /// and deletes the reservation, all in one transaction.
    async fn cancel_hotel_reservation(&self, id: i32) -> DomainResult<()>;

    async fn find_hotel_reservation(&self, id: i32)
        -> DomainResult<Option<HotelReservation>>;

    /// Newest-first page of a user's hotel reservations.
    async fn hotel_reservations_for_user(
        &self,
        user_id: &str,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<HotelReservation>>;

    /// All hotel reservations of a user, newest first (web bookings page).
    async fn all_hotel_reservations_for_user(
        &self,
        user_id: &str,
    ) -> DomainResult<Vec<HotelReservation>>;

    async fn create_flight_reservation(
        &self,
        new: NewFlightReservation,
    ) -> DomainResult<FlightReservation>;

    async fn find_flight_reservation(
        &self,
        id: i32,
    ) -> DomainResult<Option<FlightReservation>>;

    async fn flight_reservations_for_user(
        &self,
        user_id: &str,
    ) -> DomainResult<Vec<FlightReservation>>;

    /// Newest-first page over every flight reservation (admin listing).
    async fn list_flight_reservations(
        &self,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<FlightReservation>>;

    async fn update_flight_reservation(
        &self,
        id: i32,
        patch: FlightReservationPatch,
    ) -> DomainResult<Option<FlightReservation>>;

    /// Deletes the reservation together with any payment row for it.
    async fn delete_flight_reservation(&self, id: i32) -> DomainResult<bool>;

    async fn create_tour_reservation(
        &self,
        new: NewTourReservation,
    ) -> DomainResult<TourReservation>;

    async fn find_tour_reservation(&self, id: i32) -> DomainResult<Option<TourReservation>>;

    async fn tour_reservations_for_user(
        &self,
        user_id: &str,
    ) -> DomainResult<Vec<TourReservation>>;

    /// Newest-first page over every tour reservation (admin listing).
    async fn list_tour_reservations(
        &self,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<TourReservation>>;

    async fn update_tour_reservation(
        &self,
        id: i32,
        patch: TourReservationPatch,
    ) -> DomainResult<Option<TourReservation>>;

    /// Deletes the reservation together with any payment row for it.
    async fn delete_tour_reservation(&self, id: i32) -> DomainResult<bool>;
}
