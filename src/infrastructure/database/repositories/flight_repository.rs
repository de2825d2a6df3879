//! SeaORM implementation of FlightRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{clamp_page, contains_ci, db_err, insert_err};
use crate::domain::flight::{Flight, FlightFilter, FlightPatch, FlightRepository, FlightSort, NewFlight};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::flight;
use crate::shared::types::PaginatedResult;

pub struct SeaOrmFlightRepository {
    db: DatabaseConnection,
}

impl SeaOrmFlightRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: flight::Model) -> Flight {
    Flight {
        id: m.id,
        flight_number: m.flight_number,
        origin: m.origin,
        destination: m.destination,
        departure_time: m.departure_time,
        arrival_time: m.arrival_time,
        airline_id: m.airline_id,
        seat_count: m.seat_count,
        available_seats: m.available_seats,
        price: m.price,
    }
}

// ── FlightRepository impl ───────────────────────────────────────

#[async_trait]
impl FlightRepository for SeaOrmFlightRepository {
    async fn create(&self, new: NewFlight) -> DomainResult<Flight> {
        debug!("Creating flight: {}", new.flight_number);

        let model = flight::ActiveModel {
            flight_number: Set(new.flight_number),
            origin: Set(new.origin),
            destination: Set(new.destination),
            departure_time: Set(new.departure_time),
            arrival_time: Set(new.arrival_time),
            airline_id: Set(new.airline_id),
            seat_count: Set(new.seat_count),
            available_seats: Set(new.available_seats),
            price: Set(new.price),
            ..Default::default()
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, "Flight number already exists"))?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Flight>> {
        let model = flight::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn list(
        &self,
        filter: &FlightFilter,
        sort: FlightSort,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<Flight>> {
        let mut query = flight::Entity::find();
        if let Some(origin) = filter.origin.as_deref() {
            query = query.filter(contains_ci(flight::Column::Origin, origin));
        }
        if let Some(destination) = filter.destination.as_deref() {
            query = query.filter(contains_ci(flight::Column::Destination, destination));
        }
        if let Some(seats) = filter.min_available_seats {
            query = query.filter(flight::Column::AvailableSeats.gte(seats));
        }

        let query = match sort {
            FlightSort::Date => query.order_by_asc(flight::Column::DepartureTime),
            FlightSort::PriceAsc => query.order_by_asc(flight::Column::Price),
            FlightSort::PriceDesc => query.order_by_desc(flight::Column::Price),
        }
        .order_by_asc(flight::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let page = clamp_page(page, total, limit);
        let offset = ((page - 1) * limit) as u64;

        let models = query
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let items = models.into_iter().map(model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page, limit))
    }

    async fn update(&self, id: i32, patch: FlightPatch) -> DomainResult<Option<Flight>> {
        debug!("Updating flight: {}", id);

        let existing = flight::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: flight::ActiveModel = existing.into();
        if let Some(flight_number) = patch.flight_number {
            active.flight_number = Set(flight_number);
        }
        if let Some(origin) = patch.origin {
            active.origin = Set(origin);
        }
        if let Some(destination) = patch.destination {
            active.destination = Set(destination);
        }
        if let Some(departure_time) = patch.departure_time {
            active.departure_time = Set(departure_time);
        }
        if let Some(arrival_time) = patch.arrival_time {
            active.arrival_time = Set(arrival_time);
        }
        if let Some(airline_id) = patch.airline_id {
            active.airline_id = Set(airline_id);
        }
        if let Some(seat_count) = patch.seat_count {
            active.seat_count = Set(seat_count);
        }
        if let Some(available_seats) = patch.available_seats {
            active.available_seats = Set(available_seats);
        }
        if let Some(price) = patch.price {
            active.price = Set(price);
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| insert_err(e, "Flight number already exists"))?;
        Ok(Some(model_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        debug!("Deleting flight: {}", id);

        let result = flight::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::super::test_support::{seed_airline, seed_flight, setup_db};
    use super::*;
    use crate::domain::DomainError;

    #[tokio::test]
    async fn filters_combine_and_match_substrings() {
        let db = setup_db().await;
        let airline = seed_airline(&db, "Uzbekistan Airways").await;
        seed_flight(&db, airline, "HY-101", "Tashkent", "Istanbul", Decimal::new(25000, 2), 40).await;
        seed_flight(&db, airline, "HY-202", "Tashkent", "Dubai", Decimal::new(18000, 2), 2).await;
        seed_flight(&db, airline, "HY-303", "Samarkand", "Istanbul", Decimal::new(21000, 2), 10).await;
        let repo = SeaOrmFlightRepository::new(db);

        let filter = FlightFilter {
            origin: Some("tash".to_string()),
            destination: Some("istan".to_string()),
            min_available_seats: Some(3),
        };
        let result = repo.list(&filter, FlightSort::Date, 1, 10).await.unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].flight_number, "HY-101");
    }

    #[tokio::test]
    async fn price_sorts_order_both_ways() {
        let db = setup_db().await;
        let airline = seed_airline(&db, "Uzbekistan Airways").await;
        seed_flight(&db, airline, "HY-101", "Tashkent", "Istanbul", Decimal::new(25000, 2), 40).await;
        seed_flight(&db, airline, "HY-202", "Tashkent", "Dubai", Decimal::new(18000, 2), 20).await;
        let repo = SeaOrmFlightRepository::new(db);

        let asc = repo
            .list(&FlightFilter::default(), FlightSort::PriceAsc, 1, 10)
            .await
            .unwrap();
        let numbers: Vec<&str> = asc.items.iter().map(|f| f.flight_number.as_str()).collect();
        assert_eq!(numbers, vec!["HY-202", "HY-101"]);

        let desc = repo
            .list(&FlightFilter::default(), FlightSort::PriceDesc, 1, 10)
            .await
            .unwrap();
        let numbers: Vec<&str> = desc.items.iter().map(|f| f.flight_number.as_str()).collect();
        assert_eq!(numbers, vec!["HY-101", "HY-202"]);
    }

    #[tokio::test]
    async fn duplicate_flight_number_is_a_conflict() {
        let db = setup_db().await;
        let airline = seed_airline(&db, "Uzbekistan Airways").await;
        seed_flight(&db, airline, "HY-101", "Tashkent", "Istanbul", Decimal::new(25000, 2), 40).await;
        let repo = SeaOrmFlightRepository::new(db);

        let err = repo
            .create(NewFlight {
                flight_number: "HY-101".to_string(),
                origin: "Tashkent".to_string(),
                destination: "Dubai".to_string(),
                departure_time: chrono::Utc::now(),
                arrival_time: chrono::Utc::now(),
                airline_id: airline,
                seat_count: 100,
                available_seats: 100,
                price: Decimal::new(10000, 2),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_patches_only_given_fields() {
        let db = setup_db().await;
        let airline = seed_airline(&db, "Uzbekistan Airways").await;
        let id = seed_flight(&db, airline, "HY-101", "Tashkent", "Istanbul", Decimal::new(25000, 2), 40).await;
        let repo = SeaOrmFlightRepository::new(db);

        let patch = FlightPatch {
            available_seats: Some(12),
            ..Default::default()
        };
        let updated = repo.update(id, patch).await.unwrap().unwrap();
        assert_eq!(updated.available_seats, 12);
        assert_eq!(updated.origin, "Tashkent");

        assert!(repo.update(9999, FlightPatch::default()).await.unwrap().is_none());
    }
}
