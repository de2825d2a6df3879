//! SeaORM implementation of UserRepository

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{clamp_page, db_err, insert_err};
use crate::domain::user::{NewUser, User, UserPatch, UserRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::user;
use crate::shared::types::PaginatedResult;

pub struct SeaOrmUserRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: user::Model) -> User {
    User {
        id: m.id,
        username: m.username,
        email: m.email,
        phone_number: m.phone_number,
        is_customer: m.is_customer,
        is_hotel_manager: m.is_hotel_manager,
        is_airline_manager: m.is_airline_manager,
        is_staff: m.is_staff,
        is_superuser: m.is_superuser,
        is_active: m.is_active,
        password_hash: m.password_hash,
        created_at: m.created_at,
        updated_at: m.updated_at,
        last_login_at: m.last_login_at,
    }
}

// ── UserRepository impl ─────────────────────────────────────────

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn create(&self, new: NewUser) -> DomainResult<User> {
        debug!("Creating user: {}", new.username);

        let now = Utc::now();
        let model = user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            username: Set(new.username),
            email: Set(new.email),
            phone_number: Set(new.phone_number),
            password_hash: Set(new.password_hash),
            is_customer: Set(new.is_customer),
            is_hotel_manager: Set(new.is_hotel_manager),
            is_airline_manager: Set(new.is_airline_manager),
            is_staff: Set(false),
            is_superuser: Set(false),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
            last_login_at: Set(None),
        };

        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, "Username or email already exists"))?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_ids(&self, ids: &[String]) -> DomainResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let models = user::Entity::find()
            .filter(user::Column::Id.is_in(ids.iter().cloned()))
            .all(&self.db)
            .await
            .map_err(db_err)?;
        Ok(models.into_iter().map(model_to_domain).collect())
    }

    async fn list(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<User>> {
        let query = user::Entity::find().order_by_desc(user::Column::CreatedAt);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let page = clamp_page(page, total, limit);
        let offset = ((page - 1) * limit) as u64;

        let models = query
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items: Vec<User> = models.into_iter().map(model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page, limit))
    }

    async fn update(&self, id: &str, patch: UserPatch) -> DomainResult<Option<User>> {
        debug!("Updating user: {}", id);

        let existing = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: user::ActiveModel = existing.into();
        if let Some(username) = patch.username {
            active.username = Set(username);
        }
        if let Some(email) = patch.email {
            active.email = Set(email);
        }
        if let Some(phone_number) = patch.phone_number {
            active.phone_number = Set(phone_number);
        }
        if let Some(password_hash) = patch.password_hash {
            active.password_hash = Set(password_hash);
        }
        if let Some(is_customer) = patch.is_customer {
            active.is_customer = Set(is_customer);
        }
        if let Some(is_hotel_manager) = patch.is_hotel_manager {
            active.is_hotel_manager = Set(is_hotel_manager);
        }
        if let Some(is_airline_manager) = patch.is_airline_manager {
            active.is_airline_manager = Set(is_airline_manager);
        }
        if let Some(is_active) = patch.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(Utc::now());

        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| insert_err(e, "Username or email already exists"))?;
        Ok(Some(model_to_domain(updated)))
    }

    async fn touch_last_login(&self, id: &str) -> DomainResult<()> {
        use sea_orm::sea_query::Expr;

        user::Entity::update_many()
            .col_expr(user::Column::LastLoginAt, Expr::value(Some(Utc::now())))
            .filter(user::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> DomainResult<bool> {
        debug!("Deleting user: {}", id);

        let result = user::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn count(&self) -> DomainResult<u64> {
        user::Entity::find().count(&self.db).await.map_err(db_err)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::super::test_support::setup_db;
    use super::*;
    use crate::shared::types::DomainError;

    fn new_user(username: &str) -> NewUser {
        NewUser::customer(
            username.to_string(),
            format!("{}@example.com", username),
            "hash".to_string(),
            None,
        )
    }

    #[tokio::test]
    async fn create_and_find_round_trip() {
        let db = setup_db().await;
        let repo = SeaOrmUserRepository::new(db);

        let created = repo.create(new_user("alice")).await.unwrap();
        assert!(created.is_customer);
        assert!(!created.is_admin());

        let by_id = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert_eq!(by_id.username, "alice");

        let by_name = repo.find_by_username("alice").await.unwrap().unwrap();
        assert_eq!(by_name.id, created.id);

        let by_email = repo
            .find_by_email("alice@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, created.id);
    }

    #[tokio::test]
    async fn duplicate_username_is_a_conflict() {
        let db = setup_db().await;
        let repo = SeaOrmUserRepository::new(db);

        repo.create(new_user("bob")).await.unwrap();
        let mut dup = new_user("bob");
        dup.email = "other@example.com".to_string();
        let err = repo.create(dup).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_patches_only_given_fields() {
        let db = setup_db().await;
        let repo = SeaOrmUserRepository::new(db);

        let created = repo.create(new_user("carol")).await.unwrap();
        let updated = repo
            .update(
                &created.id,
                UserPatch {
                    phone_number: Some(Some("+998901234567".to_string())),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.username, "carol");
        assert_eq!(updated.phone_number.as_deref(), Some("+998901234567"));
    }

    #[tokio::test]
    async fn update_of_missing_user_returns_none() {
        let db = setup_db().await;
        let repo = SeaOrmUserRepository::new(db);
        let result = repo.update("no-such-id", UserPatch::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_a_row_went_away() {
        let db = setup_db().await;
        let repo = SeaOrmUserRepository::new(db);

        let created = repo.create(new_user("dave")).await.unwrap();
        assert!(repo.delete(&created.id).await.unwrap());
        assert!(!repo.delete(&created.id).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn touch_last_login_sets_timestamp() {
        let db = setup_db().await;
        let repo = SeaOrmUserRepository::new(db);

        let created = repo.create(new_user("erin")).await.unwrap();
        assert!(created.last_login_at.is_none());

        repo.touch_last_login(&created.id).await.unwrap();
        let after = repo.find_by_id(&created.id).await.unwrap().unwrap();
        assert!(after.last_login_at.is_some());
    }
}
