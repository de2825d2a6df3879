//! Payment repository interface

use async_trait::async_trait;

use crate::domain::payment::model::{NewPayment, Payment, PaymentPatch};
use crate::domain::reservation::ReservationKind;
use crate::domain::DomainResult;
use crate::shared::types::PaginatedResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    /// Records a payment; a second payment for the same reservation is
    /// a `Conflict`.
    async fn create(&self, payment: NewPayment) -> DomainResult<Payment>;

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Payment>>;

    async fn find_by_reservation(
        &self,
        kind: ReservationKind,
        reservation_id: i32,
    ) -> DomainResult<Option<Payment>>;

    async fn list(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<Payment>>;

    async fn update(&self, id: i32, patch: PaymentPatch) -> DomainResult<Option<Payment>>;

    async fn delete(&self, id: i32) -> DomainResult<bool>;
}
