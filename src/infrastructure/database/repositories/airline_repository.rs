//! SeaORM implementation of AirlineRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{clamp_page, db_err, insert_err};
use crate::domain::airline::{Airline, AirlinePatch, AirlineRepository, NewAirline};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::airline;
use crate::shared::types::PaginatedResult;

pub struct SeaOrmAirlineRepository {
    db: DatabaseConnection,
}

impl SeaOrmAirlineRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: airline::Model) -> Airline {
    Airline {
        id: m.id,
        name: m.name,
        country: m.country,
        contact_number: m.contact_number,
        established_year: m.established_year,
        fleet_size: m.fleet_size,
    }
}

// ── AirlineRepository impl ──────────────────────────────────────

#[async_trait]
impl AirlineRepository for SeaOrmAirlineRepository {
    async fn create(&self, new: NewAirline) -> DomainResult<Airline> {
        debug!("Creating airline: {}", new.name);

        let model = airline::ActiveModel {
            name: Set(new.name),
            country: Set(new.country),
            contact_number: Set(new.contact_number),
            established_year: Set(new.established_year),
            fleet_size: Set(new.fleet_size),
            ..Default::default()
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, "Airline name already exists"))?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Airline>> {
        let model = airline::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_ids(&self, ids: &[i32]) -> DomainResult<Vec<Airline>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = airline::Entity::find()
            .filter(airline::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn find_all(&self) -> DomainResult<Vec<Airline>> {
        let models = airline::Entity::find()
            .order_by_asc(airline::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn list(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<Airline>> {
        let query = airline::Entity::find().order_by_asc(airline::Column::Name);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let page = clamp_page(page, total, limit);
        let offset = ((page - 1) * limit) as u64;

        let models = query
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items: Vec<Airline> = models.into_iter().map(model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page, limit))
    }

    async fn update(&self, id: i32, patch: AirlinePatch) -> DomainResult<Option<Airline>> {
        debug!("Updating airline: {}", id);

        let existing = airline::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: airline::ActiveModel = existing.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(country) = patch.country {
            active.country = Set(country);
        }
        if let Some(contact_number) = patch.contact_number {
            active.contact_number = Set(contact_number);
        }
        if let Some(established_year) = patch.established_year {
            active.established_year = Set(established_year);
        }
        if let Some(fleet_size) = patch.fleet_size {
            active.fleet_size = Set(fleet_size);
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| insert_err(e, "Airline name already exists"))?;
        Ok(Some(model_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        debug!("Deleting airline: {}", id);

        let result = airline::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::super::test_support::setup_db;
    use super::*;

    fn uzair() -> NewAirline {
        NewAirline {
            name: "Uzbekistan Airways".to_string(),
            country: "Uzbekistan".to_string(),
            contact_number: None,
            established_year: Some(1992),
            fleet_size: Some(34),
        }
    }

    #[tokio::test]
    async fn crud_round_trip() {
        let db = setup_db().await;
        let repo = SeaOrmAirlineRepository::new(db);

        let created = repo.create(uzair()).await.unwrap();
        assert_eq!(created.country, "Uzbekistan");

        let updated = repo
            .update(
                created.id,
                AirlinePatch {
                    fleet_size: Some(Some(40)),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.fleet_size, Some(40));
        assert_eq!(updated.name, "Uzbekistan Airways");

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_all_orders_by_name() {
        let db = setup_db().await;
        let repo = SeaOrmAirlineRepository::new(db);

        repo.create(NewAirline {
            name: "Turkish Airlines".to_string(),
            country: "Turkey".to_string(),
            contact_number: None,
            established_year: None,
            fleet_size: None,
        })
        .await
        .unwrap();
        repo.create(NewAirline {
            name: "Air Astana".to_string(),
            country: "Kazakhstan".to_string(),
            contact_number: None,
            established_year: None,
            fleet_size: None,
        })
        .await
        .unwrap();

        let all = repo.find_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Air Astana", "Turkish Airlines"]);
    }
}
