//! SeaORM implementation of HotelRepository
//!
//! Price sorts key on an aggregate (the hotel's cheapest room), so they
//! order the filtered set in Rust; the other sorts stay in SQL.

use std::collections::HashMap;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{clamp_page, contains_ci, db_err, insert_err};
use crate::domain::hotel::{
    Hotel, HotelFilter, HotelPatch, HotelRepository, HotelSort, HotelWithPrice, NewHotel,
};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{hotel, room};
use crate::shared::types::PaginatedResult;

pub struct SeaOrmHotelRepository {
    db: DatabaseConnection,
}

impl SeaOrmHotelRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Cheapest room price per hotel, optionally narrowed to a set of
    /// hotel ids. Folded in Rust from a narrow two-column select.
    async fn min_room_prices(&self, only: Option<&[i32]>) -> DomainResult<HashMap<i32, Decimal>> {
        let mut query = room::Entity::find()
            .select_only()
            .column(room::Column::HotelId)
            .column(room::Column::PricePerNight);
        if let Some(ids) = only {
            if ids.is_empty() {
                return Ok(HashMap::new());
            }
            query = query.filter(room::Column::HotelId.is_in(ids.iter().copied()));
        }

        let rows: Vec<(i32, Decimal)> = query
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let mut prices: HashMap<i32, Decimal> = HashMap::new();
        for (hotel_id, price) in rows {
            prices
                .entry(hotel_id)
                .and_modify(|p| *p = (*p).min(price))
                .or_insert(price);
        }
        Ok(prices)
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: hotel::Model) -> Hotel {
    Hotel {
        id: m.id,
        name: m.name,
        city: m.city,
        address: m.address,
        description: m.description,
        star_rating: m.star_rating,
        contact_email: m.contact_email,
        main_image: m.main_image,
        manager_id: m.manager_id,
    }
}

// ── HotelRepository impl ────────────────────────────────────────

#[async_trait]
impl HotelRepository for SeaOrmHotelRepository {
    async fn create(&self, new: NewHotel) -> DomainResult<Hotel> {
        debug!("Creating hotel: {}", new.name);

        let model = hotel::ActiveModel {
            name: Set(new.name),
            city: Set(new.city),
            address: Set(new.address),
            description: Set(new.description),
            star_rating: Set(new.star_rating),
            contact_email: Set(new.contact_email),
            main_image: Set(new.main_image),
            manager_id: Set(new.manager_id),
            ..Default::default()
        };

        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Hotel>> {
        let model = hotel::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_ids(&self, ids: &[i32]) -> DomainResult<Vec<Hotel>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = hotel::Entity::find()
            .filter(hotel::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn list(
        &self,
        filter: &HotelFilter,
        sort: HotelSort,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<HotelWithPrice>> {
        let mut query = hotel::Entity::find();
        if let Some(city) = filter.city_query() {
            query = query.filter(contains_ci(hotel::Column::City, city));
        }

        match sort {
            HotelSort::Default | HotelSort::RatingDesc => {
                let query = match sort {
                    HotelSort::RatingDesc => query
                        .order_by_desc(hotel::Column::StarRating)
                        .order_by_asc(hotel::Column::Id),
                    _ => query.order_by_asc(hotel::Column::Id),
                };

                let total = query.clone().count(&self.db).await.map_err(db_err)?;
                let page = clamp_page(page, total, limit);
                let offset = ((page - 1) * limit) as u64;

                let models = query
                    .offset(offset)
                    .limit(limit as u64)
                    .all(&self.db)
                    .await
                    .map_err(db_err)?;

                let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
                let prices = self.min_room_prices(Some(&ids)).await?;

                let items: Vec<HotelWithPrice> = models
                    .into_iter()
                    .map(|m| {
                        let min_room_price = prices.get(&m.id).copied();
                        HotelWithPrice {
                            hotel: model_to_domain(m),
                            min_room_price,
                        }
                    })
                    .collect();
                Ok(PaginatedResult::new(items, total, page, limit))
            }
            HotelSort::PriceAsc | HotelSort::PriceDesc => {
                let models = query
                    .order_by_asc(hotel::Column::Id)
                    .all(&self.db)
                    .await
                    .map_err(db_err)?;
                let prices = self.min_room_prices(None).await?;

                let mut hotels: Vec<HotelWithPrice> = models
                    .into_iter()
                    .map(|m| {
                        let min_room_price = prices.get(&m.id).copied();
                        HotelWithPrice {
                            hotel: model_to_domain(m),
                            min_room_price,
                        }
                    })
                    .collect();

                // Hotels without rooms sort last either way; the stable
                // sort keeps id order among ties.
                hotels.sort_by(|a, b| match (a.min_room_price, b.min_room_price) {
                    (Some(x), Some(y)) => {
                        if sort == HotelSort::PriceAsc {
                            x.cmp(&y)
                        } else {
                            y.cmp(&x)
                        }
                    }
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                });

                let total = hotels.len() as u64;
                let page = clamp_page(page, total, limit);
                let start = ((page - 1) * limit) as usize;
                let items: Vec<HotelWithPrice> = hotels
                    .into_iter()
                    .skip(start)
                    .take(limit as usize)
                    .collect();
                Ok(PaginatedResult::new(items, total, page, limit))
            }
        }
    }

    async fn update(&self, id: i32, patch: HotelPatch) -> DomainResult<Option<Hotel>> {
        debug!("Updating hotel: {}", id);

        let existing = hotel::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: hotel::ActiveModel = existing.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(city) = patch.city {
            active.city = Set(city);
        }
        if let Some(address) = patch.address {
            active.address = Set(address);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }
        if let Some(star_rating) = patch.star_rating {
            active.star_rating = Set(star_rating);
        }
        if let Some(contact_email) = patch.contact_email {
            active.contact_email = Set(contact_email);
        }
        if let Some(main_image) = patch.main_image {
            active.main_image = Set(main_image);
        }
        if let Some(manager_id) = patch.manager_id {
            active.manager_id = Set(manager_id);
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| insert_err(e, "Hotel could not be updated"))?;
        Ok(Some(model_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        debug!("Deleting hotel: {}", id);

        let result = hotel::Entity::delete_by_id(id)
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

    use super::super::test_support::{seed_hotel, seed_room, seed_user, setup_db};
    use super::*;

    #[tokio::test]
    async fn city_filter_is_case_insensitive_substring() {
        let db = setup_db().await;
        let manager = seed_user(&db, "manager").await;
        seed_hotel(&db, &manager, "Grand Tashkent", "Tashkent", 5).await;
        seed_hotel(&db, &manager, "Silk Road Inn", "Samarkand", 4).await;
        let repo = SeaOrmHotelRepository::new(db);

        let filter = HotelFilter {
            city: Some("tash".to_string()),
        };
        let result = repo
            .list(&filter, HotelSort::Default, 1, 10)
            .await
            .unwrap();
        assert_eq!(result.items.len(), 1);
        assert_eq!(result.items[0].hotel.city, "Tashkent");
    }

    #[tokio::test]
    async fn city_all_matches_everything() {
        let db = setup_db().await;
        let manager = seed_user(&db, "manager").await;
        seed_hotel(&db, &manager, "Grand Tashkent", "Tashkent", 5).await;
        seed_hotel(&db, &manager, "Silk Road Inn", "Samarkand", 4).await;
        let repo = SeaOrmHotelRepository::new(db);

        let filter = HotelFilter {
            city: Some("all".to_string()),
        };
        let result = repo
            .list(&filter, HotelSort::Default, 1, 10)
            .await
            .unwrap();
        assert_eq!(result.total, 2);
    }

    #[tokio::test]
    async fn price_sort_uses_cheapest_room_and_parks_roomless_hotels_last() {
        let db = setup_db().await;
        let manager = seed_user(&db, "manager").await;
        let cheap = seed_hotel(&db, &manager, "Budget Stay", "Bukhara", 2).await;
        let pricey = seed_hotel(&db, &manager, "Palace", "Bukhara", 5).await;
        let empty = seed_hotel(&db, &manager, "Unfurnished", "Bukhara", 3).await;
        seed_room(&db, cheap, "101", Decimal::new(4000, 2), true).await;
        seed_room(&db, cheap, "102", Decimal::new(9000, 2), true).await;
        seed_room(&db, pricey, "P1", Decimal::new(30000, 2), true).await;
        let repo = SeaOrmHotelRepository::new(db);

        let asc = repo
            .list(&HotelFilter::default(), HotelSort::PriceAsc, 1, 10)
            .await
            .unwrap();
        let ids: Vec<i32> = asc.items.iter().map(|h| h.hotel.id).collect();
        assert_eq!(ids, vec![cheap, pricey, empty]);
        assert_eq!(asc.items[0].min_room_price, Some(Decimal::new(4000, 2)));

        let desc = repo
            .list(&HotelFilter::default(), HotelSort::PriceDesc, 1, 10)
            .await
            .unwrap();
        let ids: Vec<i32> = desc.items.iter().map(|h| h.hotel.id).collect();
        assert_eq!(ids, vec![pricey, cheap, empty]);
    }

    #[tokio::test]
    async fn rating_sort_is_descending() {
        let db = setup_db().await;
        let manager = seed_user(&db, "manager").await;
        seed_hotel(&db, &manager, "Two Star", "Khiva", 2).await;
        seed_hotel(&db, &manager, "Five Star", "Khiva", 5).await;
        seed_hotel(&db, &manager, "Four Star", "Khiva", 4).await;
        let repo = SeaOrmHotelRepository::new(db);

        let result = repo
            .list(&HotelFilter::default(), HotelSort::RatingDesc, 1, 10)
            .await
            .unwrap();
        let ratings: Vec<i16> = result.items.iter().map(|h| h.hotel.star_rating).collect();
        assert_eq!(ratings, vec![5, 4, 2]);
    }

    #[tokio::test]
    async fn out_of_range_page_falls_back_to_first() {
        let db = setup_db().await;
        let manager = seed_user(&db, "manager").await;
        for i in 0..4 {
            seed_hotel(&db, &manager, &format!("Hotel {}", i), "Nukus", 3).await;
        }
        let repo = SeaOrmHotelRepository::new(db);

        let first = repo
            .list(&HotelFilter::default(), HotelSort::Default, 1, 3)
            .await
            .unwrap();
        let beyond = repo
            .list(&HotelFilter::default(), HotelSort::Default, 99, 3)
            .await
            .unwrap();
        assert_eq!(beyond.page, 1);
        let first_ids: Vec<i32> = first.items.iter().map(|h| h.hotel.id).collect();
        let beyond_ids: Vec<i32> = beyond.items.iter().map(|h| h.hotel.id).collect();
        assert_eq!(first_ids, beyond_ids);
    }
}
