//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::airline::AirlineRepository;
use crate::domain::flight::FlightRepository;
use crate::domain::hotel::HotelRepository;
use crate::domain::payment::PaymentRepository;
use crate::domain::repositories::RepositoryProvider;
use crate::domain::reservation::BookingRepository;
use crate::domain::review::ReviewRepository;
use crate::domain::room::{AmenityRepository, RoomRepository, RoomTypeRepository};
use crate::domain::session::SessionRepository;
use crate::domain::tour::TourRepository;
use crate::domain::user::UserRepository;

use super::airline_repository::SeaOrmAirlineRepository;
use super::booking_repository::SeaOrmBookingRepository;
use super::flight_repository::SeaOrmFlightRepository;
use super::hotel_repository::SeaOrmHotelRepository;
use super::payment_repository::SeaOrmPaymentRepository;
use super::review_repository::SeaOrmReviewRepository;
use super::room_repository::{
    SeaOrmAmenityRepository, SeaOrmRoomRepository, SeaOrmRoomTypeRepository,
};
use super::session_repository::SeaOrmSessionRepository;
use super::tour_repository::SeaOrmTourRepository;
use super::user_repository::SeaOrmUserRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let hotel = repos.hotels().find_by_id(3).await?;
/// let rooms = repos.rooms().find_by_hotel(hotel.id).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    users: SeaOrmUserRepository,
    airlines: SeaOrmAirlineRepository,
    flights: SeaOrmFlightRepository,
    hotels: SeaOrmHotelRepository,
    rooms: SeaOrmRoomRepository,
    room_types: SeaOrmRoomTypeRepository,
    amenities: SeaOrmAmenityRepository,
    tours: SeaOrmTourRepository,
    bookings: SeaOrmBookingRepository,
    payments: SeaOrmPaymentRepository,
    reviews: SeaOrmReviewRepository,
    sessions: SeaOrmSessionRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmUserRepository::new(db.clone()),
            airlines: SeaOrmAirlineRepository::new(db.clone()),
            flights: SeaOrmFlightRepository::new(db.clone()),
            hotels: SeaOrmHotelRepository::new(db.clone()),
            rooms: SeaOrmRoomRepository::new(db.clone()),
            room_types: SeaOrmRoomTypeRepository::new(db.clone()),
            amenities: SeaOrmAmenityRepository::new(db.clone()),
            tours: SeaOrmTourRepository::new(db.clone()),
            bookings: SeaOrmBookingRepository::new(db.clone()),
            payments: SeaOrmPaymentRepository::new(db.clone()),
            reviews: SeaOrmReviewRepository::new(db.clone()),
            sessions: SeaOrmSessionRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn UserRepository {
        &self.users
    }

    fn airlines(&self) -> &dyn AirlineRepository {
        &self.airlines
    }

    fn flights(&self) -> &dyn FlightRepository {
        &self.flights
    }

    fn hotels(&self) -> &dyn HotelRepository {
        &self.hotels
    }

    fn rooms(&self) -> &dyn RoomRepository {
        &self.rooms
    }

    fn room_types(&self) -> &dyn RoomTypeRepository {
        &self.room_types
    }

    fn amenities(&self) -> &dyn AmenityRepository {
        &self.amenities
    }

    fn tours(&self) -> &dyn TourRepository {
        &self.tours
    }

    fn bookings(&self) -> &dyn BookingRepository {
        &self.bookings
    }

    fn payments(&self) -> &dyn PaymentRepository {
        &self.payments
    }

    fn reviews(&self) -> &dyn ReviewRepository {
        &self.reviews
    }

    fn sessions(&self) -> &dyn SessionRepository {
        &self.sessions
    }
}
