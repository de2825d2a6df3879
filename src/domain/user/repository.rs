//! User repository interface

use async_trait::async_trait;

use super::model::{NewUser, User, UserPatch};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a new user and return it with its generated id.
    async fn create(&self, user: NewUser) -> DomainResult<User>;

    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Batch lookup used when composing nested responses.
    async fn find_by_ids(&self, ids: &[String]) -> DomainResult<Vec<User>>;

    async fn list(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<User>>;

    /// Apply a partial update. Returns `None` when the user does not exist.
    async fn update(&self, id: &str, patch: UserPatch) -> DomainResult<Option<User>>;

    /// Record a successful login.
    async fn touch_last_login(&self, id: &str) -> DomainResult<()>;

    async fn delete(&self, id: &str) -> DomainResult<bool>;

    /// Total number of accounts (used for first-boot admin seeding).
    async fn count(&self) -> DomainResult<u64>;
}
