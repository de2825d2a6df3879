//! Flight repository interface

use async_trait::async_trait;

use crate::domain::flight::model::{Flight, FlightFilter, FlightPatch, FlightSort, NewFlight};
use crate::domain::DomainResult;
use crate::shared::types::PaginatedResult;

#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn create(&self, flight: NewFlight) -> DomainResult<Flight>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Flight>>;

    /// Filtered, sorted page of flights.
    async fn list(
        &self,
        filter: &FlightFilter,
        sort: FlightSort,
        page: u32,
        limit: u32,
    ) -> DomainResult<PaginatedResult<Flight>>;

    async fn update(&self, id: i32, patch: FlightPatch) -> DomainResult<Option<Flight>>;

    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
