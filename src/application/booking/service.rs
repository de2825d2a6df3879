//! Booking service
//!
//! The repository performs the atomic room claim; this layer adds what
//! sits around it: who may cancel or read a reservation, and the
//! cross-kind views the web surface renders.

use std::sync::Arc;

use tracing::info;

use crate::domain::access::{require_owner_or_admin, Principal};
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::{
    FlightReservation, HotelReservation, PaymentStatus, ReservationKind, TourReservation,
};
use crate::domain::{DomainError, DomainResult};
use crate::shared::PaginatedResult;

/// All reservations of one user, newest first within each kind.
#[derive(Debug, Clone)]
pub struct UserBookings {
    pub hotel: Vec<HotelReservation>,
    pub flight: Vec<FlightReservation>,
    pub tour: Vec<TourReservation>,
}

/// One reservation of any kind, for the booking detail page.
#[derive(Debug, Clone)]
pub enum BookingDetail {
    Hotel(HotelReservation),
    Flight(FlightReservation),
    Tour(TourReservation),
}

pub struct BookingService {
    repos: Arc<dyn RepositoryProvider>,
}

impl BookingService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self { repos }
    }

    /// Claims the room and records the reservation, atomically.
    pub async fn book_room(
        &self,
        user_id: &str,
        room_id: i32,
        payment_status: PaymentStatus,
    ) -> DomainResult<HotelReservation> {
        let reservation = self
            .repos
            .bookings()
            .book_room(user_id, room_id, payment_status)
            .await?;

        info!(
            user_id,
            room_id,
            reservation_id = reservation.id,
            "Room booked"
        );
        Ok(reservation)
    }

    /// Cancels a hotel reservation. Owner or admin only.
    pub async fn cancel(
        &self,
        principal: Option<&Principal>,
        reservation_id: i32,
    ) -> DomainResult<()> {
        let reservation = self
            .repos
            .bookings()
            .find_hotel_reservation(reservation_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: reservation_id.to_string(),
            })?;

        require_owner_or_admin(principal, &reservation.user_id)?;

        self.repos
            .bookings()
            .cancel_hotel_reservation(reservation_id)
            .await?;

        info!(reservation_id, "Reservation cancelled");
        Ok(())
    }

    /// Hotel reservation detail. Owner or admin only.
    pub async fn reservation_detail(
        &self,
        principal: Option<&Principal>,
        reservation_id: i32,
    ) -> DomainResult<HotelReservation> {
        let reservation = self
            .repos
            .bookings()
            .find_hotel_reservation(reservation_id)
            .await?
            .ok_or(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: reservation_id.to_string(),
            })?;

        require_owner_or_admin(principal, &reservation.user_id)?;
        Ok(reservation)
    }

    /// Newest-first page of the caller's hotel reservations.
    pub async fn reservations_for(
        &self,
        user_id: &str,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<HotelReservation>> {
        self.repos
            .bookings()
            .hotel_reservations_for_user(user_id, page, limit)
            .await
    }

    /// Everything the bookings page shows, across all three kinds.
    pub async fn bookings_overview(&self, user_id: &str) -> DomainResult<UserBookings> {
        let bookings = self.repos.bookings();
        Ok(UserBookings {
            hotel: bookings.all_hotel_reservations_for_user(user_id).await?,
            flight: bookings.flight_reservations_for_user(user_id).await?,
            tour: bookings.tour_reservations_for_user(user_id).await?,
        })
    }

    /// Detail of a reservation of any kind. Owner or admin only.
    pub async fn booking_detail(
        &self,
        principal: Option<&Principal>,
        kind: ReservationKind,
        id: i32,
    ) -> DomainResult<BookingDetail> {
        let bookings = self.repos.bookings();
        let not_found = || DomainError::NotFound {
            entity: "Reservation",
            field: "id",
            value: id.to_string(),
        };

        let (detail, owner_id) = match kind {
            ReservationKind::Hotel => {
                let r = bookings.find_hotel_reservation(id).await?.ok_or_else(not_found)?;
                let owner = r.user_id.clone();
                (BookingDetail::Hotel(r), owner)
            }
            ReservationKind::Flight => {
                let r = bookings.find_flight_reservation(id).await?.ok_or_else(not_found)?;
                let owner = r.user_id.clone();
                (BookingDetail::Flight(r), owner)
            }
            ReservationKind::Tour => {
                let r = bookings.find_tour_reservation(id).await?.ok_or_else(not_found)?;
                let owner = r.user_id.clone();
                (BookingDetail::Tour(r), owner)
            }
        };

        require_owner_or_admin(principal, &owner_id)?;
        Ok(detail)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::access::AuthScheme;
    use crate::domain::reservation::NewTourReservation;
    use crate::infrastructure::database::repositories::test_support::{
        seed_hotel, seed_room, seed_tour, seed_user, setup_db,
    };
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use rust_decimal::Decimal;

    fn principal(user_id: &str, admin: bool) -> Principal {
        Principal {
            user_id: user_id.to_string(),
            username: "someone".to_string(),
            is_staff: admin,
            is_superuser: false,
            scheme: AuthScheme::Token,
        }
    }

    async fn setup() -> (BookingService, String, i32) {
        let db = setup_db().await;
        let user_id = seed_user(&db, "guest").await;
        let hotel_id = seed_hotel(&db, &user_id, "Grand", "Tashkent", 4).await;
        let room_id = seed_room(&db, hotel_id, "101", Decimal::new(120, 0), true).await;
        let service = BookingService::new(Arc::new(SeaOrmRepositoryProvider::new(db)));
        (service, user_id, room_id)
    }

    #[tokio::test]
    async fn owner_can_cancel_own_reservation() {
        let (svc, user_id, room_id) = setup().await;
        let reservation = svc
            .book_room(&user_id, room_id, PaymentStatus::Unpaid)
            .await
            .unwrap();

        let p = principal(&user_id, false);
        svc.cancel(Some(&p), reservation.id).await.unwrap();

        let err = svc.cancel(Some(&p), reservation.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn stranger_cannot_cancel() {
        let (svc, user_id, room_id) = setup().await;
        let reservation = svc
            .book_room(&user_id, room_id, PaymentStatus::Paid)
            .await
            .unwrap();

        let p = principal("someone-else", false);
        let err = svc.cancel(Some(&p), reservation.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));

        let err = svc.cancel(None, reservation.id).await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn admin_can_cancel_any_reservation() {
        let (svc, user_id, room_id) = setup().await;
        let reservation = svc
            .book_room(&user_id, room_id, PaymentStatus::Paid)
            .await
            .unwrap();

        let p = principal("admin-id", true);
        svc.cancel(Some(&p), reservation.id).await.unwrap();
    }

    #[tokio::test]
    async fn detail_applies_the_same_ownership_rule() {
        let (svc, user_id, room_id) = setup().await;
        let reservation = svc
            .book_room(&user_id, room_id, PaymentStatus::Paid)
            .await
            .unwrap();

        let owner = principal(&user_id, false);
        let got = svc
            .reservation_detail(Some(&owner), reservation.id)
            .await
            .unwrap();
        assert_eq!(got.room_id, room_id);

        let stranger = principal("someone-else", false);
        let err = svc
            .reservation_detail(Some(&stranger), reservation.id)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[tokio::test]
    async fn overview_collects_all_three_kinds() {
        let db = setup_db().await;
        let user_id = seed_user(&db, "guest").await;
        let hotel_id = seed_hotel(&db, &user_id, "Grand", "Tashkent", 4).await;
        let room_id = seed_room(&db, hotel_id, "101", Decimal::new(120, 0), true).await;
        let tour_id = seed_tour(&db, "Silk Road", "Samarkand", Decimal::new(300, 0)).await;

        let repos = Arc::new(SeaOrmRepositoryProvider::new(db));
        repos
            .bookings()
            .create_tour_reservation(NewTourReservation {
                user_id: user_id.clone(),
                tour_id,
                payment_status: PaymentStatus::Paid,
            })
            .await
            .unwrap();

        let svc = BookingService::new(repos);
        svc.book_room(&user_id, room_id, PaymentStatus::Paid)
            .await
            .unwrap();

        let overview = svc.bookings_overview(&user_id).await.unwrap();
        assert_eq!(overview.hotel.len(), 1);
        assert!(overview.flight.is_empty());
        assert_eq!(overview.tour.len(), 1);
    }

    #[tokio::test]
    async fn booking_detail_dispatches_on_kind() {
        let db = setup_db().await;
        let user_id = seed_user(&db, "guest").await;
        let tour_id = seed_tour(&db, "Silk Road", "Samarkand", Decimal::new(300, 0)).await;

        let repos = Arc::new(SeaOrmRepositoryProvider::new(db));
        let reservation = repos
            .bookings()
            .create_tour_reservation(NewTourReservation {
                user_id: user_id.clone(),
                tour_id,
                payment_status: PaymentStatus::Paid,
            })
            .await
            .unwrap();

        let svc = BookingService::new(repos);
        let p = principal(&user_id, false);

        let detail = svc
            .booking_detail(Some(&p), ReservationKind::Tour, reservation.id)
            .await
            .unwrap();
        assert!(matches!(detail, BookingDetail::Tour(_)));

        let err = svc
            .booking_detail(Some(&p), ReservationKind::Hotel, reservation.id)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }
}
