//! SeaORM implementations of the room aggregate repositories: rooms,
//! room types and amenities.

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use super::{clamp_page, db_err, insert_err};
use crate::domain::room::{
    Amenity, AmenityPatch, AmenityRepository, NewAmenity, NewRoom, NewRoomType, Room, RoomPatch,
    RoomRepository, RoomType, RoomTypePatch, RoomTypeRepository,
};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::{amenity, room, room_amenity, room_type};
use crate::shared::types::PaginatedResult;

pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn room_to_domain(m: room::Model) -> Room {
    Room {
        id: m.id,
        hotel_id: m.hotel_id,
        room_type_id: m.room_type_id,
        room_number: m.room_number,
        capacity: m.capacity,
        price_per_night: m.price_per_night,
        is_available: m.is_available,
    }
}

fn room_type_to_domain(m: room_type::Model) -> RoomType {
    RoomType {
        id: m.id,
        name: m.name,
        description: m.description,
    }
}

fn amenity_to_domain(m: amenity::Model) -> Amenity {
    Amenity {
        id: m.id,
        name: m.name,
        icon_class: m.icon_class,
    }
}

fn amenity_rows(room_id: i32, amenity_ids: &[i32]) -> Vec<room_amenity::ActiveModel> {
    amenity_ids
        .iter()
        .map(|&amenity_id| room_amenity::ActiveModel {
            room_id: Set(room_id),
            amenity_id: Set(amenity_id),
        })
        .collect()
}

// ── RoomRepository impl ─────────────────────────────────────────

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn create(&self, new: NewRoom, amenity_ids: &[i32]) -> DomainResult<Room> {
        debug!("Creating room {} in hotel {}", new.room_number, new.hotel_id);

        let txn = self.db.begin().await.map_err(db_err)?;

        let model = room::ActiveModel {
            hotel_id: Set(new.hotel_id),
            room_type_id: Set(new.room_type_id),
            room_number: Set(new.room_number),
            capacity: Set(new.capacity),
            price_per_night: Set(new.price_per_night),
            is_available: Set(new.is_available),
            ..Default::default()
        };
        let inserted = model
            .insert(&txn)
            .await
            .map_err(|e| insert_err(e, "Room number already exists in this hotel"))?;

        if !amenity_ids.is_empty() {
            room_amenity::Entity::insert_many(amenity_rows(inserted.id, amenity_ids))
                .exec(&txn)
                .await
                .map_err(db_err)?;
        }

        txn.commit().await.map_err(db_err)?;
        Ok(room_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Room>> {
        let model = room::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(room_to_domain))
    }

    async fn find_by_ids(&self, ids: &[i32]) -> DomainResult<Vec<Room>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = room::Entity::find()
            .filter(room::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(room_to_domain).collect())
    }

    async fn find_by_hotel(&self, hotel_id: i32) -> DomainResult<Vec<Room>> {
        let models = room::Entity::find()
            .filter(room::Column::HotelId.eq(hotel_id))
            .order_by_asc(room::Column::RoomNumber)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(room_to_domain).collect())
    }

    async fn amenities_of(&self, room_id: i32) -> DomainResult<Vec<Amenity>> {
        let ids: Vec<i32> = room_amenity::Entity::find()
            .select_only()
            .column(room_amenity::Column::AmenityId)
            .filter(room_amenity::Column::RoomId.eq(room_id))
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(db_err)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = amenity::Entity::find()
            .filter(amenity::Column::Id.is_in(ids))
            .order_by_asc(amenity::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(amenity_to_domain).collect())
    }

    async fn update(
        &self,
        id: i32,
        patch: RoomPatch,
        amenity_ids: Option<&[i32]>,
    ) -> DomainResult<Option<Room>> {
        debug!("Updating room: {}", id);

        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = room::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: room::ActiveModel = existing.into();
        if let Some(room_type_id) = patch.room_type_id {
            active.room_type_id = Set(room_type_id);
        }
        if let Some(room_number) = patch.room_number {
            active.room_number = Set(room_number);
        }
        if let Some(capacity) = patch.capacity {
            active.capacity = Set(capacity);
        }
        if let Some(price_per_night) = patch.price_per_night {
            active.price_per_night = Set(price_per_night);
        }
        if let Some(is_available) = patch.is_available {
            active.is_available = Set(is_available);
        }
        let updated = active
            .update(&txn)
            .await
            .map_err(|e| insert_err(e, "Room number already exists in this hotel"))?;

        if let Some(amenity_ids) = amenity_ids {
            room_amenity::Entity::delete_many()
                .filter(room_amenity::Column::RoomId.eq(id))
                .exec(&txn)
                .await
                .map_err(db_err)?;
            if !amenity_ids.is_empty() {
                room_amenity::Entity::insert_many(amenity_rows(id, amenity_ids))
                    .exec(&txn)
                    .await
                    .map_err(db_err)?;
            }
        }

        txn.commit().await.map_err(db_err)?;
        Ok(Some(room_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        debug!("Deleting room: {}", id);

        let txn = self.db.begin().await.map_err(db_err)?;
        room_amenity::Entity::delete_many()
            .filter(room_amenity::Column::RoomId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let result = room::Entity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(db_err)?;
        txn.commit().await.map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}

// ── RoomTypeRepository impl ─────────────────────────────────────

pub struct SeaOrmRoomTypeRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomTypeRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoomTypeRepository for SeaOrmRoomTypeRepository {
    async fn create(&self, new: NewRoomType) -> DomainResult<RoomType> {
        debug!("Creating room type: {}", new.name);

        let model = room_type::ActiveModel {
            name: Set(new.name),
            description: Set(new.description),
            ..Default::default()
        };
        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, "Room type name already exists"))?;
        Ok(room_type_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<RoomType>> {
        let model = room_type::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(room_type_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<RoomType>> {
        let models = room_type::Entity::find()
            .order_by_asc(room_type::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(room_type_to_domain).collect())
    }

    async fn list(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<RoomType>> {
        let query = room_type::Entity::find().order_by_asc(room_type::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let page = clamp_page(page, total, limit);
        let offset = ((page - 1) * limit) as u64;

        let models = query
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let items = models.into_iter().map(room_type_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page, limit))
    }

    async fn update(&self, id: i32, patch: RoomTypePatch) -> DomainResult<Option<RoomType>> {
        debug!("Updating room type: {}", id);

        let existing = room_type::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: room_type::ActiveModel = existing.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(description) = patch.description {
            active.description = Set(description);
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| insert_err(e, "Room type name already exists"))?;
        Ok(Some(room_type_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        debug!("Deleting room type: {}", id);

        let result = room_type::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}

// ── AmenityRepository impl ──────────────────────────────────────

pub struct SeaOrmAmenityRepository {
    db: DatabaseConnection,
}

impl SeaOrmAmenityRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AmenityRepository for SeaOrmAmenityRepository {
    async fn create(&self, new: NewAmenity) -> DomainResult<Amenity> {
        debug!("Creating amenity: {}", new.name);

        let model = amenity::ActiveModel {
            name: Set(new.name),
            icon_class: Set(new.icon_class),
            ..Default::default()
        };
        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, "Amenity name already exists"))?;
        Ok(amenity_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Amenity>> {
        let model = amenity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(amenity_to_domain))
    }

    async fn find_all(&self) -> DomainResult<Vec<Amenity>> {
        let models = amenity::Entity::find()
            .order_by_asc(amenity::Column::Name)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(amenity_to_domain).collect())
    }

    async fn list(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<Amenity>> {
        let query = amenity::Entity::find().order_by_asc(amenity::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let page = clamp_page(page, total, limit);
        let offset = ((page - 1) * limit) as u64;

        let models = query
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let items = models.into_iter().map(amenity_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page, limit))
    }

    async fn update(&self, id: i32, patch: AmenityPatch) -> DomainResult<Option<Amenity>> {
        debug!("Updating amenity: {}", id);

        let existing = amenity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: amenity::ActiveModel = existing.into();
        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(icon_class) = patch.icon_class {
            active.icon_class = Set(icon_class);
        }

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| insert_err(e, "Amenity name already exists"))?;
        Ok(Some(amenity_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        debug!("Deleting amenity: {}", id);

        let txn = self.db.begin().await.map_err(db_err)?;
        room_amenity::Entity::delete_many()
            .filter(room_amenity::Column::AmenityId.eq(id))
            .exec(&txn)
            .await
            .map_err(db_err)?;
        let result = amenity::Entity::delete_by_id(id)
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

    use super::super::test_support::{seed_hotel, seed_room, seed_user, setup_db};
    use super::*;
    use crate::domain::DomainError;

    async fn seed_amenity(db: &DatabaseConnection, name: &str) -> i32 {
        amenity::ActiveModel {
            name: Set(name.to_string()),
            icon_class: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
        .id
    }

    #[tokio::test]
    async fn create_attaches_amenities() {
        let db = setup_db().await;
        let manager = seed_user(&db, "manager").await;
        let hotel = seed_hotel(&db, &manager, "Grand", "Tashkent", 5).await;
        let wifi = seed_amenity(&db, "Wi-Fi").await;
        let bar = seed_amenity(&db, "Minibar").await;
        let repo = SeaOrmRoomRepository::new(db);

        let room = repo
            .create(
                NewRoom {
                    hotel_id: hotel,
                    room_type_id: None,
                    room_number: "101".to_string(),
                    capacity: 2,
                    price_per_night: Decimal::new(12000, 2),
                    is_available: true,
                },
                &[wifi, bar],
            )
            .await
            .unwrap();

        let amenities = repo.amenities_of(room.id).await.unwrap();
        let names: Vec<&str> = amenities.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Minibar", "Wi-Fi"]);
    }

    #[tokio::test]
    async fn duplicate_room_number_in_hotel_is_a_conflict() {
        let db = setup_db().await;
        let manager = seed_user(&db, "manager").await;
        let hotel = seed_hotel(&db, &manager, "Grand", "Tashkent", 5).await;
        seed_room(&db, hotel, "101", Decimal::new(12000, 2), true).await;
        let repo = SeaOrmRoomRepository::new(db);

        let err = repo
            .create(
                NewRoom {
                    hotel_id: hotel,
                    room_type_id: None,
                    room_number: "101".to_string(),
                    capacity: 2,
                    price_per_night: Decimal::new(15000, 2),
                    is_available: true,
                },
                &[],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_replaces_amenity_set_wholesale() {
        let db = setup_db().await;
        let manager = seed_user(&db, "manager").await;
        let hotel = seed_hotel(&db, &manager, "Grand", "Tashkent", 5).await;
        let wifi = seed_amenity(&db, "Wi-Fi").await;
        let bar = seed_amenity(&db, "Minibar").await;
        let safe = seed_amenity(&db, "Safe").await;
        let repo = SeaOrmRoomRepository::new(db);

        let room = repo
            .create(
                NewRoom {
                    hotel_id: hotel,
                    room_type_id: None,
                    room_number: "101".to_string(),
                    capacity: 2,
                    price_per_night: Decimal::new(12000, 2),
                    is_available: true,
                },
                &[wifi, bar],
            )
            .await
            .unwrap();

        repo.update(room.id, RoomPatch::default(), Some(&[safe]))
            .await
            .unwrap()
            .unwrap();
        let amenities = repo.amenities_of(room.id).await.unwrap();
        assert_eq!(amenities.len(), 1);
        assert_eq!(amenities[0].name, "Safe");

        // None leaves the set untouched
        repo.update(room.id, RoomPatch::default(), None)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(repo.amenities_of(room.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rooms_of_hotel_are_ordered_by_number() {
        let db = setup_db().await;
        let manager = seed_user(&db, "manager").await;
        let hotel = seed_hotel(&db, &manager, "Grand", "Tashkent", 5).await;
        seed_room(&db, hotel, "203", Decimal::new(12000, 2), true).await;
        seed_room(&db, hotel, "101", Decimal::new(9000, 2), true).await;
        let repo = SeaOrmRoomRepository::new(db);

        let rooms = repo.find_by_hotel(hotel).await.unwrap();
        let numbers: Vec<&str> = rooms.iter().map(|r| r.room_number.as_str()).collect();
        assert_eq!(numbers, vec!["101", "203"]);
    }

    #[tokio::test]
    async fn room_type_find_all_orders_by_name() {
        let db = setup_db().await;
        let repo = SeaOrmRoomTypeRepository::new(db);

        repo.create(NewRoomType {
            name: "Suite".to_string(),
            description: "Top floor".to_string(),
        })
        .await
        .unwrap();
        repo.create(NewRoomType {
            name: "Double".to_string(),
            description: "Two beds".to_string(),
        })
        .await
        .unwrap();

        let all = repo.find_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Double", "Suite"]);
    }

    #[tokio::test]
    async fn amenity_crud_round_trip() {
        let db = setup_db().await;
        let repo = SeaOrmAmenityRepository::new(db);

        let created = repo
            .create(NewAmenity {
                name: "Pool".to_string(),
                icon_class: Some("fas fa-swimmer".to_string()),
            })
            .await
            .unwrap();

        let patch = AmenityPatch {
            icon_class: Some(None),
            ..Default::default()
        };
        let updated = repo.update(created.id, patch).await.unwrap().unwrap();
        assert!(updated.icon_class.is_none());

        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
