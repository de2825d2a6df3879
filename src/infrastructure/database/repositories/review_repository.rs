//! SeaORM implementation of ReviewRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{clamp_page, db_err};
use crate::domain::review::{NewReview, Review, ReviewPatch, ReviewRepository, ReviewTarget};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::review;
use crate::shared::types::PaginatedResult;

pub struct SeaOrmReviewRepository {
    db: DatabaseConnection,
}

impl SeaOrmReviewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: review::Model) -> DomainResult<Review> {
    let target_id = match m.review_type.as_str() {
        "HOTEL" => m.room_id,
        "FLIGHT" => m.flight_id,
        "TOUR" => m.tour_id,
        _ => None,
    };
    let target = target_id
        .and_then(|id| ReviewTarget::from_parts(&m.review_type, id))
        .ok_or_else(|| DomainError::Database(format!("Review {} has no valid target", m.id)))?;

    Ok(Review {
        id: m.id,
        user_id: m.user_id,
        target,
        rating: m.rating,
        comment: m.comment,
        created_at: m.created_at,
    })
}

fn target_columns(target: ReviewTarget) -> (Option<i32>, Option<i32>, Option<i32>) {
    match target {
        ReviewTarget::Room(id) => (Some(id), None, None),
        ReviewTarget::Flight(id) => (None, Some(id), None),
        ReviewTarget::Tour(id) => (None, None, Some(id)),
    }
}

// ── ReviewRepository impl ───────────────────────────────────────

#[async_trait]
impl ReviewRepository for SeaOrmReviewRepository {
    async fn create(&self, new: NewReview) -> DomainResult<Review> {
        debug!(
            "Creating {} review by user {}",
            new.target.type_str(),
            new.user_id
        );

        let (room_id, flight_id, tour_id) = target_columns(new.target);
        let model = review::ActiveModel {
            user_id: Set(new.user_id),
            review_type: Set(new.target.type_str().to_string()),
            room_id: Set(room_id),
            flight_id: Set(flight_id),
            tour_id: Set(tour_id),
            rating: Set(new.rating),
            comment: Set(new.comment),
            created_at: Set(Utc::now()),
            ..Default::default()
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        model_to_domain(inserted)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Review>> {
        let model = review::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        model.map(model_to_domain).transpose()
    }

    async fn list(
        &self,
        target: Option<ReviewTarget>,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<Review>> {
        let mut query = review::Entity::find();
        if let Some(target) = target {
            query = query.filter(review::Column::ReviewType.eq(target.type_str()));
            query = match target {
                ReviewTarget::Room(id) => query.filter(review::Column::RoomId.eq(id)),
                ReviewTarget::Flight(id) => query.filter(review::Column::FlightId.eq(id)),
                ReviewTarget::Tour(id) => query.filter(review::Column::TourId.eq(id)),
            };
        }
        let query = query
            .order_by_desc(review::Column::CreatedAt)
            .order_by_desc(review::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let page = clamp_page(page, total, limit);
        let offset = ((page - 1) * limit) as u64;

        let models = query
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let items = models
            .into_iter()
            .map(model_to_domain)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(PaginatedResult::new(items, total, page, limit))
    }

    async fn update(&self, id: i32, patch: ReviewPatch) -> DomainResult<Option<Review>> {
        debug!("Updating review: {}", id);

        let existing = review::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: review::ActiveModel = existing.into();
        if let Some(rating) = patch.rating {
            active.rating = Set(rating);
        }
        if let Some(comment) = patch.comment {
            active.comment = Set(comment);
        }

        let updated = active.update(&self.db).await.map_err(db_err)?;
        model_to_domain(updated).map(Some)
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        debug!("Deleting review: {}", id);

        let result = review::Entity::delete_by_id(id)
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

    use super::super::test_support::{seed_hotel, seed_room, seed_tour, seed_user, setup_db};
    use super::*;

    #[tokio::test]
    async fn create_sets_exactly_one_target_column() {
        let db = setup_db().await;
        let author = seed_user(&db, "author").await;
        let manager = seed_user(&db, "manager").await;
        let hotel = seed_hotel(&db, &manager, "Grand", "Tashkent", 5).await;
        let room_id = seed_room(&db, hotel, "101", Decimal::new(12000, 2), true).await;
        let repo = SeaOrmReviewRepository::new(db.clone());

        let created = repo
            .create(NewReview {
                user_id: author,
                target: ReviewTarget::Room(room_id),
                rating: 4,
                comment: "Comfortable".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.target, ReviewTarget::Room(room_id));

        let row = review::Entity::find_by_id(created.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(row.room_id, Some(room_id));
        assert!(row.flight_id.is_none());
        assert!(row.tour_id.is_none());
    }

    #[tokio::test]
    async fn list_narrows_to_one_target() {
        let db = setup_db().await;
        let author = seed_user(&db, "author").await;
        let t1 = seed_tour(&db, "Silk Road", "Samarkand", Decimal::new(50000, 2)).await;
        let t2 = seed_tour(&db, "Desert Trek", "Kyzylkum", Decimal::new(30000, 2)).await;
        let repo = SeaOrmReviewRepository::new(db);

        for (tour, rating) in [(t1, 5), (t1, 3), (t2, 4)] {
            repo.create(NewReview {
                user_id: author.clone(),
                target: ReviewTarget::Tour(tour),
                rating,
                comment: "ok".to_string(),
            })
            .await
            .unwrap();
        }

        let all = repo.list(None, 1, 10).await.unwrap();
        assert_eq!(all.total, 3);

        let narrowed = repo.list(Some(ReviewTarget::Tour(t1)), 1, 10).await.unwrap();
        assert_eq!(narrowed.total, 2);
        // Newest first: same timestamps fall back to id order
        assert!(narrowed.items[0].id > narrowed.items[1].id);
    }

    #[tokio::test]
    async fn update_touches_rating_and_comment_only() {
        let db = setup_db().await;
        let author = seed_user(&db, "author").await;
        let tour = seed_tour(&db, "Silk Road", "Samarkand", Decimal::new(50000, 2)).await;
        let repo = SeaOrmReviewRepository::new(db);

        let created = repo
            .create(NewReview {
                user_id: author,
                target: ReviewTarget::Tour(tour),
                rating: 2,
                comment: "Meh".to_string(),
            })
            .await
            .unwrap();

        let patch = ReviewPatch {
            rating: Some(5),
            comment: Some("Actually great".to_string()),
        };
        let updated = repo.update(created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.rating, 5);
        assert_eq!(updated.comment, "Actually great");
        assert_eq!(updated.target, ReviewTarget::Tour(tour));

        assert!(repo.update(9999, ReviewPatch::default()).await.unwrap().is_none());
        assert!(repo.delete(created.id).await.unwrap());
    }
}
