//! Session repository interface

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::session::model::{NewSession, Session};
use crate::domain::DomainResult;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create(&self, session: NewSession) -> DomainResult<Session>;

    async fn find_by_token_hash(&self, token_hash: &str)
        -> DomainResult<Option<Session>>;

    async fn delete_by_token_hash(&self, token_hash: &str) -> DomainResult<bool>;

    /// Removes sessions whose deadline has passed, returning how many.
    async fn delete_expired(&self, now: DateTime<Utc>) -> DomainResult<u64>;
}
