//! Payment entity

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment model. `(reservation_kind, reservation_id)` is unique
/// (enforced by index): at most one payment per reservation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Reservation kind: HOTEL, FLIGHT, TOUR
    pub reservation_kind: String,
    pub reservation_id: i32,

    pub amount: Decimal,
    /// Payment method: Credit Card, PayPal, ApplePay/Google Pay
    pub payment_method: String,
    /// Payment status: Paid, Unpaid
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
