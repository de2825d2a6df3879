//! SeaORM implementation of PaymentRepository

use async_trait::async_trait;
use log::debug;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

use super::{clamp_page, db_err, insert_err};
use crate::domain::payment::{
    NewPayment, Payment, PaymentMethod, PaymentPatch, PaymentRepository,
};
use crate::domain::reservation::{PaymentStatus, ReservationKind};
use crate::domain::DomainResult;
use crate::infrastructure::database::entities::payment;
use crate::shared::types::PaginatedResult;

pub struct SeaOrmPaymentRepository {
    db: DatabaseConnection,
}

impl SeaOrmPaymentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn model_to_domain(m: payment::Model) -> Payment {
    Payment {
        id: m.id,
        kind: ReservationKind::parse(&m.reservation_kind).unwrap_or(ReservationKind::Hotel),
        reservation_id: m.reservation_id,
        amount: m.amount,
        payment_method: PaymentMethod::parse(&m.payment_method).unwrap_or_default(),
        status: PaymentStatus::parse(&m.status).unwrap_or_default(),
    }
}

// ── PaymentRepository impl ──────────────────────────────────────

#[async_trait]
impl PaymentRepository for SeaOrmPaymentRepository {
    async fn create(&self, new: NewPayment) -> DomainResult<Payment> {
        debug!(
            "Creating payment for {} reservation {}",
            new.kind.as_str(),
            new.reservation_id
        );

        let model = payment::ActiveModel {
            reservation_kind: Set(new.kind.as_str().to_string()),
            reservation_id: Set(new.reservation_id),
            amount: Set(new.amount),
            payment_method: Set(new.payment_method.as_str().to_string()),
            status: Set(new.status.as_str().to_string()),
            ..Default::default()
        };
        let inserted = model
            .insert(&self.db)
            .await
            .map_err(|e| insert_err(e, "Payment already exists for this reservation"))?;
        Ok(model_to_domain(inserted))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Payment>> {
        let model = payment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn find_by_reservation(
        &self,
        kind: ReservationKind,
        reservation_id: i32,
    ) -> DomainResult<Option<Payment>> {
        let model = payment::Entity::find()
            .filter(payment::Column::ReservationKind.eq(kind.as_str()))
            .filter(payment::Column::ReservationId.eq(reservation_id))
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(model.map(model_to_domain))
    }

    async fn list(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<Payment>> {
        let query = payment::Entity::find().order_by_asc(payment::Column::Id);

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let page = clamp_page(page, total, limit);
        let offset = ((page - 1) * limit) as u64;

        let models = query
            .offset(offset)
            .limit(limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;
        let items = models.into_iter().map(model_to_domain).collect();
        Ok(PaginatedResult::new(items, total, page, limit))
    }

    async fn update(&self, id: i32, patch: PaymentPatch) -> DomainResult<Option<Payment>> {
        debug!("Updating payment: {}", id);

        let existing = payment::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;
        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: payment::ActiveModel = existing.into();
        if let Some(amount) = patch.amount {
            active.amount = Set(amount);
        }
        if let Some(method) = patch.payment_method {
            active.payment_method = Set(method.as_str().to_string());
        }
        if let Some(status) = patch.status {
            active.status = Set(status.as_str().to_string());
        }

        let updated = active.update(&self.db).await.map_err(db_err)?;
        Ok(Some(model_to_domain(updated)))
    }

    async fn delete(&self, id: i32) -> DomainResult<bool> {
        debug!("Deleting payment: {}", id);

        let result = payment::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(result.rows_affected > 0)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::super::test_support::setup_db;
    use super::*;
    use crate::domain::DomainError;

    fn sample(kind: ReservationKind, reservation_id: i32) -> NewPayment {
        NewPayment {
            kind,
            reservation_id,
            amount: Decimal::new(25000, 2),
            payment_method: PaymentMethod::PayPal,
            status: PaymentStatus::Paid,
        }
    }

    #[tokio::test]
    async fn create_and_look_up_by_reservation() {
        let db = setup_db().await;
        let repo = SeaOrmPaymentRepository::new(db);

        let created = repo.create(sample(ReservationKind::Flight, 7)).await.unwrap();
        assert_eq!(created.kind, ReservationKind::Flight);
        assert_eq!(created.payment_method, PaymentMethod::PayPal);

        let found = repo
            .find_by_reservation(ReservationKind::Flight, 7)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, created.id);

        // Same id under a different kind is a different reservation
        assert!(repo
            .find_by_reservation(ReservationKind::Tour, 7)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn second_payment_for_reservation_is_a_conflict() {
        let db = setup_db().await;
        let repo = SeaOrmPaymentRepository::new(db);

        repo.create(sample(ReservationKind::Hotel, 1)).await.unwrap();
        let err = repo.create(sample(ReservationKind::Hotel, 1)).await.unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // The same reservation id under another kind is fine
        repo.create(sample(ReservationKind::Tour, 1)).await.unwrap();
    }

    #[tokio::test]
    async fn update_patches_status_and_method() {
        let db = setup_db().await;
        let repo = SeaOrmPaymentRepository::new(db);

        let created = repo.create(sample(ReservationKind::Tour, 3)).await.unwrap();
        let patch = PaymentPatch {
            status: Some(PaymentStatus::Unpaid),
            payment_method: Some(PaymentMethod::ApplePayGooglePay),
            ..Default::default()
        };
        let updated = repo.update(created.id, patch).await.unwrap().unwrap();
        assert_eq!(updated.status, PaymentStatus::Unpaid);
        assert_eq!(updated.payment_method, PaymentMethod::ApplePayGooglePay);
        assert_eq!(updated.amount, Decimal::new(25000, 2));
    }

    #[tokio::test]
    async fn delete_reports_whether_row_existed() {
        let db = setup_db().await;
        let repo = SeaOrmPaymentRepository::new(db);

        let created = repo.create(sample(ReservationKind::Hotel, 9)).await.unwrap();
        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
