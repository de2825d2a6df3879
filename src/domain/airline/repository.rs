//! Airline repository interface

use async_trait::async_trait;

use super::model::{Airline, AirlinePatch, NewAirline};
use crate::domain::DomainResult;
use crate::shared::PaginatedResult;

#[async_trait]
pub trait AirlineRepository: Send + Sync {
    async fn create(&self, airline: NewAirline) -> DomainResult<Airline>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Airline>>;

    async fn find_by_ids(&self, ids: &[i32]) -> DomainResult<Vec<Airline>>;

    /// All airlines ordered by name (used by flight forms).
    async fn find_all(&self) -> DomainResult<Vec<Airline>>;

    async fn list(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<Airline>>;

    async fn update(&self, id: i32, patch: AirlinePatch) -> DomainResult<Option<Airline>>;

    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
