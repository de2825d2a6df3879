//! Tour repository interface

use async_trait::async_trait;

use crate::domain::tour::model::{NewTour, Tour, TourFilter, TourPatch, TourSort};
use crate::domain::DomainResult;
use crate::shared::types::PaginatedResult;

#[async_trait]
pub trait TourRepository: Send + Sync {
    async fn create(&self, tour: NewTour) -> DomainResult<Tour>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Tour>>;

    /// Filtered, sorted page of tours.
    async fn list(
        &self,
        filter: &TourFilter,
        sort: TourSort,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<Tour>>;

    async fn update(&self, id: i32, patch: TourPatch) -> DomainResult<Option<Tour>>;

    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
