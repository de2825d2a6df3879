//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod airline_repository;
pub mod booking_repository;
pub mod flight_repository;
pub mod hotel_repository;
pub mod payment_repository;
pub mod repository_provider;
pub mod review_repository;
pub mod room_repository;
pub mod session_repository;
pub mod tour_repository;
pub mod user_repository;

pub use repository_provider::SeaOrmRepositoryProvider;

use sea_orm::sea_query::{Expr, Func, SimpleExpr};
use sea_orm::ColumnTrait;

use crate::shared::types::DomainError;

/// Map a SeaORM error into the domain error space.
pub(crate) fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Map an insert/update error, folding unique-constraint violations
/// into `Conflict`.
pub(crate) fn insert_err(e: sea_orm::DbErr, conflict_msg: &str) -> DomainError {
    if e.to_string().contains("UNIQUE") || e.to_string().contains("duplicate") {
        DomainError::Conflict(conflict_msg.to_string())
    } else {
        db_err(e)
    }
}

/// Case-insensitive substring match: `LOWER(col) LIKE '%needle%'`.
pub(crate) fn contains_ci<C: ColumnTrait>(col: C, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col))).like(format!("%{}%", needle.to_lowercase()))
}

/// Out-of-range pages fall back to page 1 instead of erroring, so a
/// stale link never 404s a listing.
pub(crate) fn clamp_page(page: u32, total: u64, limit: u32) -> u32 {
    if page <= 1 {
        return 1;
    }
    let total_pages = ((total as f64) / (limit as f64)).ceil() as u32;
    if page > total_pages {
        1
    } else {
        page
    }
}

// ── Test fixtures ───────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::Utc;
    use rust_decimal::Decimal;
    use sea_orm::{ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, Set};
    use sea_orm_migration::MigratorTrait;

    use crate::infrastructure::database::entities::{airline, flight, hotel, room, tour, user};
    use crate::infrastructure::database::migrator::Migrator;

    /// Fresh in-memory database with the full schema applied.
    ///
    /// A single pooled connection keeps every query on the same
    /// in-memory SQLite instance.
    pub async fn setup_db() -> DatabaseConnection {
        let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
        opt.max_connections(1);
        let db = Database::connect(opt).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    pub async fn seed_user(db: &DatabaseConnection, username: &str) -> String {
        let now = Utc::now();
        let model = user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            username: Set(username.to_string()),
            email: Set(format!("{}@example.com", username)),
            phone_number: Set(None),
            password_hash: Set("hash".to_string()),
            is_customer: Set(true),
            is_hotel_manager: Set(false),
            is_airline_manager: Set(false),
            is_staff: Set(false),
            is_superuser: Set(false),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            last_login_at: Set(None),
        };
        model.insert(db).await.unwrap().id
    }

    pub async fn seed_hotel(
        db: &DatabaseConnection,
        manager_id: &str,
        name: &str,
        city: &str,
        star_rating: i16,
    ) -> i32 {
        let model = hotel::ActiveModel {
            name: Set(name.to_string()),
            city: Set(city.to_string()),
            address: Set(format!("{} street 1", city)),
            description: Set(String::new()),
            star_rating: Set(star_rating),
            contact_email: Set(String::new()),
            main_image: Set(None),
            manager_id: Set(manager_id.to_string()),
            ..Default::default()
        };
        model.insert(db).await.unwrap().id
    }

    pub async fn seed_room(
        db: &DatabaseConnection,
        hotel_id: i32,
        room_number: &str,
        price: Decimal,
        is_available: bool,
    ) -> i32 {
        let model = room::ActiveModel {
            hotel_id: Set(hotel_id),
            room_type_id: Set(None),
            room_number: Set(room_number.to_string()),
            capacity: Set(2),
            price_per_night: Set(price),
            is_available: Set(is_available),
            ..Default::default()
        };
        model.insert(db).await.unwrap().id
    }

    pub async fn seed_airline(db: &DatabaseConnection, name: &str) -> i32 {
        let model = airline::ActiveModel {
            name: Set(name.to_string()),
            country: Set("Uzbekistan".to_string()),
            contact_number: Set(None),
            established_year: Set(None),
            fleet_size: Set(None),
            ..Default::default()
        };
        model.insert(db).await.unwrap().id
    }

    pub async fn seed_flight(
        db: &DatabaseConnection,
        airline_id: i32,
        flight_number: &str,
        origin: &str,
        destination: &str,
        price: Decimal,
        available_seats: i32,
    ) -> i32 {
        let now = Utc::now();
        let model = flight::ActiveModel {
            flight_number: Set(flight_number.to_string()),
            origin: Set(origin.to_string()),
            destination: Set(destination.to_string()),
            departure_time: Set(now + chrono::Duration::days(1)),
            arrival_time: Set(now + chrono::Duration::days(1) + chrono::Duration::hours(3)),
            airline_id: Set(airline_id),
            seat_count: Set(180),
            available_seats: Set(available_seats),
            price: Set(price),
            ..Default::default()
        };
        model.insert(db).await.unwrap().id
    }

    pub async fn seed_tour(
        db: &DatabaseConnection,
        name: &str,
        destination: &str,
        price: Decimal,
    ) -> i32 {
        let today = Utc::now().date_naive();
        let model = tour::ActiveModel {
            name: Set(name.to_string()),
            description: Set(String::new()),
            destination: Set(destination.to_string()),
            start_date: Set(today + chrono::Duration::days(10)),
            end_date: Set(today + chrono::Duration::days(15)),
            price: Set(price),
            max_participants: Set(20),
            available_slots: Set(20),
            guide_name: Set(None),
            image: Set(None),
            ..Default::default()
        };
        model.insert(db).await.unwrap().id
    }
}

#[cfg(test)]
mod tests {
    use super::clamp_page;

    #[test]
    fn clamp_keeps_valid_pages() {
        assert_eq!(clamp_page(2, 10, 3), 2);
        assert_eq!(clamp_page(4, 10, 3), 4);
    }

    #[test]
    fn clamp_resets_out_of_range_pages() {
        assert_eq!(clamp_page(5, 10, 3), 1);
        assert_eq!(clamp_page(2, 0, 3), 1);
        assert_eq!(clamp_page(0, 10, 3), 1);
    }
}
