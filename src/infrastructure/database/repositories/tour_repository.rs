//! SeaORM implementation of TourRepository
//!
//! The rating sort keys on the average of tour review ratings, an
//! aggregate folded in Rust; the other sorts stay in SQL.

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{clamp_page, contains_ci, db_err};
use crate::domain::tour::{NewTour, Tour, TourFilter, TourPatch, TourRepository, TourSort};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{review, tour};
use crate::shared::types::PaginatedResult;

pub struct SeaOrmTourRepository {
    db: DatabaseConnection,
}

impl SeaOrmTourRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Average review rating per tour, for every tour that has at
    /// least one review.
    async fn average_ratings(&self) -> DomainResult<HashMap<i32, f64>> {
        let rows: Vec<(Option<i32>, i16)> = review::Entity::find()
            .select_only()
            .column(review::Column::TourId)
            .column(review::Column::Rating)
            .filter(review::Column::ReviewType.eq("TOUR"))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut sums: HashMap<i32, (i64, i64)> = HashMap::new();
        for (tour_id, rating) in rows {
            let Some(tour_id) = tour_id else { continue };
            let entry = sums.entry(tour_id).or_insert((0, 0));
            entry.0 += rating as i64;
            entry.1 += 1;
        }
        Ok(sums
            .into_iter()
            .map(|(id, (sum, count))| (id, sum as f64 / count as f64))
            .collect())
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: tour::Model) -> Tour {
    Tour {
        id: m.id,
        name: m.name,
        description: m.description,
        destination: m.destination,
        start_date: m.start_date,
        end_date: m.end_date,
        price: m.price,
        max_participants: m.max_participants,
        available_slots: m.available_slots,
        guide_name: m.guide_name,
        image: m.image,
    }
}

// ── TourRepository impl ─────────────────────────────────────────

#[async_trait]
impl TourRepository for SeaOrmTourRepository {
    async fn create(&self, new: NewTour) -> DomainResult<Tour> {
        debug!("Creating tour: {}", new.name);

        let model = tour::ActiveModel {
            name: Set(new.name),
            description: Set(new.description),
            destination: Set(new.destination),
            start_date: Set(new.start_date),
            end_date: Set(new.end_date),
            price: Set(new.price),
            max_participants: Set(new.max_participants),
            available_slots: Set(new.available_slots),
            guide_name: Set(new.guide_name),
            image: Set(new.image),
            ..Default::default()
        };

        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Tour>> {
        let model = tour::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn list(
        &self,
        filter: &TourFilter,
        sort: TourSort,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<Tour>> {
        let mut query = tour::Entity::find();
        if let Some(destination) = filter.destination.as_deref() {
            query = query.filter(contains_ci(tour::Column::Destination, destination));
        }

        match sort {
            TourSort::Default | TourSort::PriceAsc | TourSort::PriceDesc => {
                let query = match sort {
                    TourSort::PriceAsc => query.order_by_asc(tour::Column::Price),
                    TourSort::PriceDesc => query.order_by_desc(tour::Column::Price),
                    _ => query,
                }
                .order_by_asc(tour::Column::Id);

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
            TourSort::RatingDesc => {
                let models = query
                    .order_by_asc(tour::Column::Id)
                    .all(&self.db)
                    .await
                    .map_err(db_err)?;
                let ratings = self.average_ratings().await?;

                // Unreviewed tours sort last; the stable sort keeps id
                // order among ties.
                let mut tours: Vec<Tour> = models.into_iter().map(model_to_domain).collect();
                tours.sort_by(|a, b| {
                    match (ratings.get(&a.id), ratings.get(&b.id)) {
                        (Some(x), Some(y)) => y.partial_cmp(x).unwrap_or(std::cmp::Ordering::Equal),
                        (Some(_), None) => std::cmp::Ordering::Less,
                        (None, Some(_)) => std::cmp::Ordering::Greater,
                        (None, None) => std::cmp::Ordering::Equal,
                    }
                });

                let total = tours.len() as u64;
                let page = clamp_page(page, total, limit);
                let start = ((page - 1) * limit) as usize;
                let items: Vec<Tour> = tours
                    .into_iter()
                    .skip(start)
                    .take(limit as usize)
                    .collect();
                Ok(PaginatedResult::new(items, total, page, limit))
            }
        }
    }

    async fn update(&self, id: i32, patch: TourPatch) -> DomainResult<Option<Tour>> {
        debug!("Updating tour: {}", id);

        let existing = tour::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: tour::ActiveModel = existing.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(destination) = patch.destination {
            active.destination = Set(destination);
        }
        if let Some(start_date) = patch.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(end_date) = patch.end_date {
            active.end_date = Set(end_date);
        }
        if let Some(price) = patch.price {
            active.price = Set(price);
        }
        if let Some(max_participants) = patch.max_participants {
            active.max_participants = Set(max_participants);
        }
        if let Some(available_slots) = patch.available_slots {
            active.available_slots = Set(available_slots);
        }
        if let Some(guide_name) = patch.guide_name {
            active.guide_name = Set(guide_name);
        }
        if let Some(image) = patch.image {
            active.image = Set(image);
        }

        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(Some(model_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        debug!("Deleting tour: {}", id);

        let result = tour::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;
    use sea_orm::{ActiveModelTrait, Set};

    use super::super::test_support::{seed_tour, seed_user, setup_db};
    use super::*;

    async fn seed_tour_review(db: &DatabaseConnection, user_id: &str, tour_id: i32, rating: i16) {
        review::ActiveModel {
            user_id: Set(user_id.to_string()),
            review_type: Set("TOUR".to_string()),
            tour_id: Set(Some(tour_id)),
            rating: Set(rating),
            comment: Set("seed".to_string()),
            created_at: Set(Utc::now()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn destination_filter_is_case_insensitive_substring() {
        let db = setup_db().await;
        seed_tour(&db, "Silk Road Classic", "Samarkand", Decimal::new(50000, 2)).await;
        seed_tour(&db, "Desert Trek", "Kyzylkum", Decimal::new(30000, 2)).await;
        let repo = SeaOrmTourRepository::new(db);

        let filter = TourFilter {
            destination: Some("samar".to_string()),
        };
        let result = repo.list(&filter, TourSort::Default, 1, 10).await.unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].name, "Silk Road Classic");
    }

    #[tokio::test]
    async fn rating_sort_averages_reviews_and_parks_unreviewed_last() {
        let db = setup_db().await;
        let reviewer = seed_user(&db, "reviewer").await;
        let good = seed_tour(&db, "Good Tour", "Khiva", Decimal::new(40000, 2)).await;
        let better = seed_tour(&db, "Better Tour", "Khiva", Decimal::new(45000, 2)).await;
        let unrated = seed_tour(&db, "Unrated Tour", "Khiva", Decimal::new(20000, 2)).await;
        seed_tour_review(&db, &reviewer, good, 3).await;
        seed_tour_review(&db, &reviewer, good, 4).await;
        seed_tour_review(&db, &reviewer, better, 5).await;
        let repo = SeaOrmTourRepository::new(db);

        let result = repo
            .list(&TourFilter::default(), TourSort::RatingDesc, 1, 10)
            .await
            .unwrap();
        let ids: Vec<i32> = result.items.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![better, good, unrated]);
    }

    #[tokio::test]
    async fn price_sort_orders_ascending() {
        let db = setup_db().await;
        seed_tour(&db, "Pricey", "Bukhara", Decimal::new(90000, 2)).await;
        seed_tour(&db, "Cheap", "Bukhara", Decimal::new(10000, 2)).await;
        let repo = SeaOrmTourRepository::new(db);

        let result = repo
            .list(&TourFilter::default(), TourSort::PriceAsc, 1, 10)
            .await
            .unwrap();
        let names: Vec<&str> = result.items.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Cheap", "Pricey"]);
    }

    #[tokio::test]
    async fn update_can_clear_optional_fields() {
        let db = setup_db().await;
        let id = seed_tour(&db, "Guided", "Fergana", Decimal::new(25000, 2)).await;
        let repo = SeaOrmTourRepository::new(db);

        let patch = TourPatch {
            guide_name: Some(Some("Aziz".to_string())),
            ..Default::default()
        };
        let updated = repo.update(id, patch).await.unwrap().unwrap();
        assert_eq!(updated.guide_name.as_deref(), Some("Aziz"));

        let patch = TourPatch {
            guide_name: Some(None),
            ..Default::default()
        };
        let updated = repo.update(id, patch).await.unwrap().unwrap();
        assert!(updated.guide_name.is_none());
    }
}
