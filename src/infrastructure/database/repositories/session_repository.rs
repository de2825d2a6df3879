//! SeaORM implementation of SessionRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};

use super::db_err;
use crate::domain::session::{NewSession, Session, SessionRepository};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::session;

pub struct SeaOrmSessionRepository {
    db: DatabaseConnection,
}

impl SeaOrmSessionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: session::Model) -> Session {
    Session {
        token_hash: m.token_hash,
        user_id: m.user_id,
        created_at: m.created_at,
        expires_at: m.expires_at,
    }
}

// ── SessionRepository impl ──────────────────────────────────────

#[async_trait]
impl SessionRepository for SeaOrmSessionRepository {
    async fn create(&self, new: NewSession) -> DomainResult<Session> {
        debug!("Creating session for user {}", new.user_id);

        let model = session::ActiveModel {
            token_hash: Set(new.token_hash),
            user_id: Set(new.user_id),
            created_at: Set(Utc::now()),
            expires_at: Set(new.expires_at),
        };
        let inserted = model.insert(&self.db).await.map_err(db_err)?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_token_hash(&self, token_hash: &str) -> DomainResult<Option<Session>> {
        let model = session::Entity::find_by_id(token_hash.to_string())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn delete_by_token_hash(&self, token_hash: &str) -> DomainResult<bool> {
        debug!("Deleting session");

        let result = session::Entity::delete_by_id(token_hash.to_string())
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let result = session::Entity::delete_many()
            .filter(session::Column::ExpiresAt.lte(now))
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        if result.rows_affected > 0 {
            debug!("Swept {} expired sessions", result.rows_affected);
        }
        Ok(result.rows_affected)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::super::test_support::{seed_user, setup_db};
    use super::*;

    #[tokio::test]
    async fn create_and_find_by_hash() {
        let db = setup_db().await;
        let user = seed_user(&db, "alice").await;
        let repo = SeaOrmSessionRepository::new(db);

        let created = repo
            .create(NewSession {
                token_hash: "hash-1".to_string(),
                user_id: user.clone(),
                expires_at: Utc::now() + Duration::days(14),
            })
            .await
            .unwrap();
        assert_eq!(created.user_id, user);

        let found = repo.find_by_token_hash("hash-1").await.unwrap().unwrap();
        assert_eq!(found.user_id, user);
        assert!(repo.find_by_token_hash("hash-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_reports_whether_session_existed() {
        let db = setup_db().await;
        let user = seed_user(&db, "alice").await;
        let repo = SeaOrmSessionRepository::new(db);

        repo.create(NewSession {
            token_hash: "hash-1".to_string(),
            user_id: user,
            expires_at: Utc::now() + Duration::days(14),
        })
        .await
        .unwrap();

        assert!(repo.delete_by_token_hash("hash-1").await.unwrap());
        assert!(!repo.delete_by_token_hash("hash-1").await.unwrap());
    }

    #[tokio::test]
    async fn sweep_removes_only_expired_sessions() {
        let db = setup_db().await;
        let user = seed_user(&db, "alice").await;
        let repo = SeaOrmSessionRepository::new(db);

        let now = Utc::now();
        repo.create(NewSession {
            token_hash: "stale".to_string(),
            user_id: user.clone(),
            expires_at: now - Duration::hours(1),
        })
        .await
        .unwrap();
        repo.create(NewSession {
            token_hash: "live".to_string(),
            user_id: user,
            expires_at: now + Duration::hours(1),
        })
        .await
        .unwrap();

        assert_eq!(repo.delete_expired(now).await.unwrap(), 1);
        assert!(repo.find_by_token_hash("stale").await.unwrap().is_none());
        assert!(repo.find_by_token_hash("live").await.unwrap().is_some());
    }
}
