//! Payment DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::payment::Payment;

#[derive(Debug, Serialize, ToSchema)]
pub struct PaymentResponse {
    pub id: i32,
    /// "HOTEL", "FLIGHT" or "TOUR"
    pub reservation_type: String,
    pub reservation_id: i32,
    pub amount: Decimal,
    /// "Credit Card", "PayPal" or "ApplePay/Google Pay"
    pub payment_method: String,
    /// "Paid" or "Unpaid"
    pub status: String,
}

impl From<Payment> for PaymentResponse {
    fn from(payment: Payment) -> Self {
        Self {
            id: payment.id,
            reservation_type: payment.kind.as_str().to_string(),
            reservation_id: payment.reservation_id,
            amount: payment.amount,
            payment_method: payment.payment_method.as_str().to_string(),
            status: payment.status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePaymentRequest {
    /// "HOTEL", "FLIGHT" or "TOUR"
    pub reservation_type: String,
    pub reservation_id: i32,
    pub amount: Decimal,
    /// "Credit Card" (default), "PayPal" or "ApplePay/Google Pay"
    pub payment_method: Option<String>,
    /// "Paid" (default) or "Unpaid"
    pub status: Option<String>,
}

/// Partial payment update; the reservation reference is immutable.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePaymentRequest {
    pub amount: Option<Decimal>,
    /// "Credit Card", "PayPal" or "ApplePay/Google Pay"
    pub payment_method: Option<String>,
    /// "Paid" or "Unpaid"
    pub status: Option<String>,
}
