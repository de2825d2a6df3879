//! Hotel repository interface

use async_trait::async_trait;

use crate::domain::hotel::model::{Hotel, HotelFilter, HotelPatch, HotelSort, HotelWithPrice, NewHotel};
use crate::domain::DomainResult;
use crate::shared::types::PaginatedResult;

#[async_trait]
pub trait HotelRepository: Send + Sync {
    async fn create(&self, hotel: NewHotel) -> DomainResult<Hotel>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Hotel>>;

    async fn find_by_ids(&self, ids: &[i32]) -> DomainResult<Vec<Hotel>>;

    /// Filtered, sorted page of hotels with their cheapest room price.
    async fn list(
        &self,
        filter: &HotelFilter,
        sort: HotelSort,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<HotelWithPrice>>;

    async fn update(&self, id: i32, patch: HotelPatch) -> DomainResult<Option<Hotel>>;

    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
