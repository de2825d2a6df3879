//! Payment domain entity

use rust_decimal::Decimal;

use crate::domain::reservation::{PaymentStatus, ReservationKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    CreditCard,
    PayPal,
    ApplePayGooglePay,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::PayPal => "PayPal",
            Self::ApplePayGooglePay => "ApplePay/Google Pay",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Credit Card" => Some(Self::CreditCard),
            "PayPal" => Some(Self::PayPal),
            "ApplePay/Google Pay" => Some(Self::ApplePayGooglePay),
            _ => None,
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::CreditCard
    }
}

/// Payment for exactly one reservation, addressed by kind + id.
/// At most one payment row exists per reservation.
#[derive(Debug, Clone)]
pub struct Payment {
    pub id: i32,
    pub kind: ReservationKind,
    pub reservation_id: i32,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone)]
pub struct NewPayment {
    pub kind: ReservationKind,
    pub reservation_id: i32,
    pub amount: Decimal,
    pub payment_method: PaymentMethod,
    pub status: PaymentStatus,
}

/// Partial payment update; the reservation reference is immutable.
#[derive(Debug, Clone, Default)]
pub struct PaymentPatch {
    pub amount: Option<Decimal>,
    pub payment_method: Option<PaymentMethod>,
    pub status: Option<PaymentStatus>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_wire_values_match_choices() {
        assert_eq!(PaymentMethod::CreditCard.as_str(), "Credit Card");
        assert_eq!(PaymentMethod::ApplePayGooglePay.as_str(), "ApplePay/Google Pay");
        assert_eq!(PaymentMethod::parse("PayPal"), Some(PaymentMethod::PayPal));
        assert_eq!(PaymentMethod::parse("Cash"), None);
        assert_eq!(PaymentMethod::default(), PaymentMethod::CreditCard);
    }
}
