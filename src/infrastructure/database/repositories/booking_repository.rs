//! SeaORM implementation of BookingRepository
//!
//! Room booking and cancellation run inside transactions. The
//! availability flip is a conditional update filtered on the current
//! flag, so of two concurrent bookings for the same room exactly one
//! sees `rows_affected == 1` and the other backs off with a conflict.

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use super::{clamp_page, db_err};
use crate::domain::reservation::{
    BookingRepository, FlightReservation, FlightReservationPatch, HotelReservation,
    NewFlightReservation, NewTourReservation, PaymentStatus, ReservationKind, TourReservation,
    TourReservationPatch,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{
    flight_reservation, hotel_reservation, payment, room, tour_reservation,
};
use crate::shared::types::PaginatedResult;

pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn hotel_to_domain(m: hotel_reservation::Model) -> HotelReservation {
    HotelReservation {
        id: m.id,
        user_id: m.user_id,
        room_id: m.room_id,
        reservation_date: m.reservation_date,
        payment_status: PaymentStatus::parse(&m.payment_status).unwrap_or_default(),
    }
}

fn flight_to_domain(m: flight_reservation::Model) -> FlightReservation {
    FlightReservation {
        id: m.id,
        user_id: m.user_id,
        flight_id: m.flight_id,
        seat_number: m.seat_number,
        reservation_date: m.reservation_date,
        payment_status: PaymentStatus::parse(&m.payment_status).unwrap_or_default(),
    }
}

fn tour_to_domain(m: tour_reservation::Model) -> TourReservation {
    TourReservation {
        id: m.id,
        user_id: m.user_id,
        tour_id: m.tour_id,
        reservation_date: m.reservation_date,
        payment_status: PaymentStatus::parse(&m.payment_status).unwrap_or_default(),
    }
}

// ── BookingRepository impl ──────────────────────────────────────

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn book_room(
        &self,
        user_id: &str,
        room_id: i32,
        payment_status: PaymentStatus,
    ) -> DomainResult<HotelReservation> {
        debug!("Booking room {} for user {}", room_id, user_id);

        let txn = self.db.begin().await.map_err(db_err)?;

        let exists = room::Entity::find_by_id(room_id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        if exists.is_none() {
            return Err(DomainError::NotFound {
                entity: "Room",
                field: "id",
                value: room_id.to_string(),
            });
        }

        // The filter on the current flag makes the claim atomic.
        let claimed = room::Entity::update_many()
            .col_expr(room::Column::IsAvailable, Expr::value(false))
            .filter(room::Column::Id.eq(room_id))
            .filter(room::Column::IsAvailable.eq(true))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        if claimed.rows_affected == 0 {
            return Err(DomainError::Conflict("Room is not available".to_string()));
        }

        let model = hotel_reservation::ActiveModel {
            user_id: Set(user_id.to_string()),
            room_id: Set(room_id),
            reservation_date: Set(Utc::now()),
            payment_status: Set(payment_status.as_str().to_string()),
            ..Default::default()
        };
        let inserted = model.insert(&txn).await.map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(hotel_to_domain(inserted))
    }

    async fn cancel_hotel_reservation(&self, id: i32) -> DomainResult<()> {
        debug!("Cancelling hotel reservation: {}", id);

        let txn = self.db.begin().await.map_err(db_err)?;

        let reservation = hotel_reservation::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        let Some(reservation) = reservation else {
            return Err(DomainError::NotFound {
                entity: "Reservation",
                field: "id",
                value: id.to_string(),
            });
        };

        room::Entity::update_many()
            .col_expr(room::Column::IsAvailable, Expr::value(true))
            .filter(room::Column::Id.eq(reservation.room_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        payment::Entity::delete_many()
            .filter(payment::Column::ReservationKind.eq(ReservationKind::Hotel.as_str()))
            .filter(payment::Column::ReservationId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        hotel_reservation::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;
        Ok(())
    }

    async fn find_hotel_reservation(&self, id: i32) -> DomainResult<Option<HotelReservation>> {
        let model = hotel_reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(hotel_to_domain))
    }

    async fn hotel_reservations_for_user(
        &self,
        user_id: &str,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<HotelReservation>> {
        let query = hotel_reservation::Entity::find()
            .filter(hotel_reservation::Column::UserId.eq(user_id))
            .order_by_desc(hotel_reservation::Column::ReservationDate)
            .order_by_desc(hotel_reservation::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let page = clamp_page(page, total, limit);
        let offset = ((page - 1) * limit) as u64;

        let models = query
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let items = models.into_iter().map(hotel_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page, limit))
    }

    async fn all_hotel_reservations_for_user(
        &self,
        user_id: &str,
    ) -> DomainResult<Vec<HotelReservation>> {
        let models = hotel_reservation::Entity::find()
            .filter(hotel_reservation::Column::UserId.eq(user_id))
            .order_by_desc(hotel_reservation::Column::ReservationDate)
            .order_by_desc(hotel_reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(hotel_to_domain).collect())
    }

    async fn create_flight_reservation(
        &self,
        new: NewFlightReservation,
    ) -> DomainResult<FlightReservation> {
        debug!(
            "Creating flight reservation for user {} on flight {}",
            new.user_id, new.flight_id
        );

        let model = flight_reservation::ActiveModel {
            user_id: Set(new.user_id),
            flight_id: Set(new.flight_id),
            seat_number: Set(new.seat_number),
            reservation_date: Set(Utc::now()),
            payment_status: Set(new.payment_status.as_str().to_string()),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(flight_to_domain(inserted))
    }

    async fn find_flight_reservation(&self, id: i32) -> DomainResult<Option<FlightReservation>> {
        let model = flight_reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(flight_to_domain))
    }

    async fn flight_reservations_for_user(
        &self,
        user_id: &str,
    ) -> DomainResult<Vec<FlightReservation>> {
        let models = flight_reservation::Entity::find()
            .filter(flight_reservation::Column::UserId.eq(user_id))
            .order_by_desc(flight_reservation::Column::ReservationDate)
            .order_by_desc(flight_reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(flight_to_domain).collect())
    }

    async fn list_flight_reservations(
        &self,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<FlightReservation>> {
        let query = flight_reservation::Entity::find()
            .order_by_desc(flight_reservation::Column::ReservationDate)
            .order_by_desc(flight_reservation::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let page = clamp_page(page, total, limit);
        let offset = ((page - 1) * limit) as u64;

        let models = query
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(PaginatedResult::new(
            models.into_iter().map(flight_to_domain).collect(),
            total,
            page,
            limit,
        ))
    }

    async fn update_flight_reservation(
        &self,
        id: i32,
        patch: FlightReservationPatch,
    ) -> DomainResult<Option<FlightReservation>> {
        debug!("Updating flight reservation: {}", id);

        let existing = flight_reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: flight_reservation::ActiveModel = existing.into();
        if let Some(seat_number) = patch.seat_number {
            active.seat_number = Set(seat_number);
        }
        if let Some(status) = patch.payment_status {
            active.payment_status = Set(status.as_str().to_string());
        }

        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(Some(flight_to_domain(updated)))
    }

    async fn delete_flight_reservation(&self, id: i32) -> DomainResult<bool> {
        debug!("Deleting flight reservation: {}", id);

        let txn = self.db.begin().await.map_err(db_err)?;
        payment::Entity::delete_many()
            .filter(payment::Column::ReservationKind.eq(ReservationKind::Flight.as_str()))
            .filter(payment::Column::ReservationId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let result = flight_reservation::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn create_tour_reservation(
        &self,
        new: NewTourReservation,
    ) -> DomainResult<TourReservation> {
        debug!(
            "Creating tour reservation for user {} on tour {}",
            new.user_id, new.tour_id
        );

        let model = tour_reservation::ActiveModel {
            user_id: Set(new.user_id),
            tour_id: Set(new.tour_id),
            reservation_date: Set(Utc::now()),
            payment_status: Set(new.payment_status.as_str().to_string()),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(tour_to_domain(inserted))
    }

    async fn find_tour_reservation(&self, id: i32) -> DomainResult<Option<TourReservation>> {
        let model = tour_reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(tour_to_domain))
    }

    async fn tour_reservations_for_user(
        &self,
        user_id: &str,
    ) -> DomainResult<Vec<TourReservation>> {
        let models = tour_reservation::Entity::find()
            .filter(tour_reservation::Column::UserId.eq(user_id))
            .order_by_desc(tour_reservation::Column::ReservationDate)
            .order_by_desc(tour_reservation::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(tour_to_domain).collect())
    }

    async fn list_tour_reservations(
        &self,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<TourReservation>> {
        let query = tour_reservation::Entity::find()
            .order_by_desc(tour_reservation::Column::ReservationDate)
            .order_by_desc(tour_reservation::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let page = clamp_page(page, total, limit);
        let offset = ((page - 1) * limit) as u64;

        let models = query
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(PaginatedResult::new(
            models.into_iter().map(tour_to_domain).collect(),
            total,
            page,
            limit,
        ))
    }

    async fn update_tour_reservation(
        &self,
        id: i32,
        patch: TourReservationPatch,
    ) -> DomainResult<Option<TourReservation>> {
        debug!("Updating tour reservation: {}", id);

        let existing = tour_reservation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: tour_reservation::ActiveModel = existing.into();
        if let Some(status) = patch.payment_status {
            active.payment_status = Set(status.as_str().to_string());
        }

        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(Some(tour_to_domain(updated)))
    }

    async fn delete_tour_reservation(&self, id: i32) -> DomainResult<bool> {
        debug!("Deleting tour reservation: {}", id);

        let txn = self.db.begin().await.map_err(db_err)?;
        payment::Entity::delete_many()
            .filter(payment::Column::ReservationKind.eq(ReservationKind::Tour.as_str()))
            .filter(payment::Column::ReservationId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let result = tour_reservation::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::super::test_support::{
        seed_airline, seed_flight, seed_hotel, seed_room, seed_tour, seed_user, setup_db,
    };
    use super::*;

    async fn room_is_available(db: &DatabaseConnection, room_id: i32) -> bool {
        room::Entity::find_by_id(room_id)
            .one(db)
            .await
            .unwrap()
            .unwrap()
            .is_available
    }

    async fn seed_payment(db: &DatabaseConnection, kind: ReservationKind, reservation_id: i32) {
        payment::ActiveModel {
            reservation_kind: Set(kind.as_str().to_string()),
            reservation_id: Set(reservation_id),
            amount: Set(Decimal::new(10000, 2)),
            payment_method: Set("Credit Card".to_string()),
            status: Set("Paid".to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn booking_claims_the_room_exactly_once() {
        let db = setup_db().await;
        let guest = seed_user(&db, "guest").await;
        let manager = seed_user(&db, "manager").await;
        let hotel = seed_hotel(&db, &manager, "Grand", "Tashkent", 5).await;
        let room_id = seed_room(&db, hotel, "101", Decimal::new(12000, 2), true).await;
        let repo = SeaOrmBookingRepository::new(db.clone());

        let reservation = repo
            .book_room(&guest, room_id, PaymentStatus::Paid)
            .await
            .unwrap();
        assert_eq!(reservation.room_id, room_id);
        assert!(!room_is_available(&db, room_id).await);

        let err = repo
            .book_room(&guest, room_id, PaymentStatus::Paid)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn booking_a_missing_room_is_not_found() {
        let db = setup_db().await;
        let guest = seed_user(&db, "guest").await;
        let repo = SeaOrmBookingRepository::new(db);

        let err = repo
            .book_room(&guest, 404, PaymentStatus::Paid)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Room", .. }));
    }

    #[tokio::test]
    async fn cancel_releases_room_and_sweeps_payment() {
        let db = setup_db().await;
        let guest = seed_user(&db, "guest").await;
        let manager = seed_user(&db, "manager").await;
        let hotel = seed_hotel(&db, &manager, "Grand", "Tashkent", 5).await;
        let room_id = seed_room(&db, hotel, "101", Decimal::new(12000, 2), true).await;
        let repo = SeaOrmBookingRepository::new(db.clone());

        let reservation = repo
            .book_room(&guest, room_id, PaymentStatus::Paid)
            .await
            .unwrap();
        seed_payment(&db, ReservationKind::Hotel, reservation.id).await;

        repo.cancel_hotel_reservation(reservation.id).await.unwrap();

        assert!(room_is_available(&db, room_id).await);
        assert!(repo
            .find_hotel_reservation(reservation.id)
            .await
            .unwrap()
            .is_none());
        let payments = payment::Entity::find().all(&db).await.unwrap();
        assert!(payments.is_empty());

        let err = repo
            .cancel_hotel_reservation(reservation.id)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn hotel_reservations_page_newest_first() {
        let db = setup_db().await;
        let guest = seed_user(&db, "guest").await;
        let manager = seed_user(&db, "manager").await;
        let hotel = seed_hotel(&db, &manager, "Grand", "Tashkent", 5).await;
        let repo = SeaOrmBookingRepository::new(db.clone());

        let mut ids = Vec::new();
        for n in 0..3 {
            let room_id =
                seed_room(&db, hotel, &format!("10{}", n), Decimal::new(9000, 2), true).await;
            ids.push(repo.book_room(&guest, room_id, PaymentStatus::Unpaid).await.unwrap().id);
        }

        let page = repo
            .hotel_reservations_for_user(&guest, 1, 2)
            .await
            .unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);
        // Same-timestamp rows fall back to id order, newest insert first
        assert_eq!(page.items[0].id, ids[2]);

        let all = repo.all_hotel_reservations_for_user(&guest).await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].id, ids[2]);
    }

    #[tokio::test]
    async fn flight_reservation_delete_sweeps_payment() {
        let db = setup_db().await;
        let guest = seed_user(&db, "guest").await;
        let airline = seed_airline(&db, "Uzbekistan Airways").await;
        let flight_id =
            seed_flight(&db, airline, "HY-101", "Tashkent", "Istanbul", Decimal::new(25000, 2), 40)
                .await;
        let repo = SeaOrmBookingRepository::new(db.clone());

        let reservation = repo
            .create_flight_reservation(NewFlightReservation {
                user_id: guest.clone(),
                flight_id,
                seat_number: "12A".to_string(),
                payment_status: PaymentStatus::Paid,
            })
            .await
            .unwrap();
        seed_payment(&db, ReservationKind::Flight, reservation.id).await;

        assert_eq!(repo.flight_reservations_for_user(&guest).await.unwrap().len(), 1);
        assert!(repo.delete_flight_reservation(reservation.id).await.unwrap());
        assert!(payment::Entity::find().all(&db).await.unwrap().is_empty());
        assert!(!repo.delete_flight_reservation(reservation.id).await.unwrap());
    }

    #[tokio::test]
    async fn tour_reservation_round_trip() {
        let db = setup_db().await;
        let guest = seed_user(&db, "guest").await;
        let tour_id = seed_tour(&db, "Silk Road", "Samarkand", Decimal::new(50000, 2)).await;
        let repo = SeaOrmBookingRepository::new(db);

        let reservation = repo
            .create_tour_reservation(NewTourReservation {
                user_id: guest.clone(),
                tour_id,
                payment_status: PaymentStatus::Unpaid,
            })
            .await
            .unwrap();
        assert_eq!(reservation.payment_status, PaymentStatus::Unpaid);

        let found = repo
            .find_tour_reservation(reservation.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.tour_id, tour_id);

        assert_eq!(repo.tour_reservations_for_user(&guest).await.unwrap().len(), 1);
        assert!(repo.delete_tour_reservation(reservation.id).await.unwrap());
    }
}
