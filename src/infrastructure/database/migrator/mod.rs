//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_users;
mod m20250101_000002_create_airlines;
mod m20250101_000003_create_flights;
mod m20250101_000004_create_hotels;
mod m20250101_000005_create_room_types;
mod m20250101_000006_create_amenities;
mod m20250101_000007_create_rooms;
mod m20250101_000008_create_room_amenities;
mod m20250101_000009_create_tours;
mod m20250101_000010_create_hotel_reservations;
mod m20250101_000011_create_flight_reservations;
mod m20250101_000012_create_tour_reservations;
mod m20250101_000013_create_payments;
mod m20250101_000014_create_reviews;
mod m20250101_000015_create_sessions;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_users::Migration),
            Box::new(m20250101_000002_create_airlines::Migration),
            Box::new(m20250101_000003_create_flights::Migration),
            Box::new(m20250101_000004_create_hotels::Migration),
            Box::new(m20250101_000005_create_room_types::Migration),
            Box::new(m20250101_000006_create_amenities::Migration),
            Box::new(m20250101_000007_create_rooms::Migration),
            Box::new(m20250101_000008_create_room_amenities::Migration),
            Box::new(m20250101_000009_create_tours::Migration),
            Box::new(m20250101_000010_create_hotel_reservations::Migration),
            Box::new(m20250101_000011_create_flight_reservations::Migration),
            Box::new(m20250101_000012_create_tour_reservations::Migration),
            Box::new(m20250101_000013_create_payments::Migration),
            Box::new(m20250101_000014_create_reviews::Migration),
            Box::new(m20250101_000015_create_sessions::Migration),
        ]
    }
}
