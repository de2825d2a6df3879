//! Review repository interface

use async_trait::async_trait;

use crate::domain::review::model::{NewReview, Review, ReviewPatch, ReviewTarget};
use crate::domain::DomainResult;
use crate::shared::types::PaginatedResult;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn create(&self, review: NewReview) -> DomainResult<Review>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Review>>;

    /// Newest-first page; `target` narrows to one reviewed item.
    async fn list(
        &self,
        target: Option<ReviewTarget>,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<Review>>;

    async fn update(&self, id: i32, patch: ReviewPatch) -> DomainResult<Option<Review>>;

    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
