//! Reservation domain entities
//!
//! Three reservation kinds share a lifecycle (created with a payment
//! status, later cancelled) but reference different inventory: a room,
//! a flight seat, or a tour.

use chrono::{DateTime, Utc};

/// Settlement state carried on every reservation and payment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "Paid",
            Self::Unpaid => "Unpaid",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Paid" => Some(Self::Paid),
            "Unpaid" => Some(Self::Unpaid),
            _ => None,
        }
    }
}

impl Default for PaymentStatus {
    fn default() -> Self {
        Self::Paid
    }
}

/// Which inventory a reservation (or payment) points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReservationKind {
    Hotel,
    Flight,
    Tour,
}

impl ReservationKind {
    /// Stored discriminator value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "HOTEL",
            Self::Flight => "FLIGHT",
            Self::Tour => "TOUR",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "HOTEL" => Some(Self::Hotel),
            "FLIGHT" => Some(Self::Flight),
            "TOUR" => Some(Self::Tour),
            _ => None,
        }
    }

    /// Parses the `{kind}` path segment of booking detail URLs,
    /// case-insensitively.
    pub fn from_path_segment(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "hotel" => Some(Self::Hotel),
            "flight" => Some(Self::Flight),
            "tour" => Some(Self::Tour),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HotelReservation {
    pub id: i32,
    pub user_id: String,
    pub room_id: i32,
    pub reservation_date: DateTime<Utc>,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone)]
pub struct FlightReservation {
    pub id: i32,
    pub user_id: String,
    pub flight_id: i32,
    pub seat_number: String,
    pub reservation_date: DateTime<Utc>,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone)]
pub struct TourReservation {
    pub id: i32,
    pub user_id: String,
    pub tour_id: i32,
    pub reservation_date: DateTime<Utc>,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone)]
pub struct NewFlightReservation {
    pub user_id: String,
    pub flight_id: i32,
    pub seat_number: String,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone)]
pub struct NewTourReservation {
    pub user_id: String,
    pub tour_id: i32,
    pub payment_status: PaymentStatus,
}

/// Partial update for the admin flight-reservation API.
#[derive(Debug, Clone, Default)]
pub struct FlightReservationPatch {
    pub seat_number: Option<String>,
    pub payment_status: Option<PaymentStatus>,
}

/// Partial update for the admin tour-reservation API.
#[derive(Debug, Clone, Default)]
pub struct TourReservationPatch {
    pub payment_status: Option<PaymentStatus>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_status_round_trips() {
        assert_eq!(PaymentStatus::parse("Paid"), Some(PaymentStatus::Paid));
        assert_eq!(PaymentStatus::parse("Unpaid"), Some(PaymentStatus::Unpaid));
        assert_eq!(PaymentStatus::parse("paid"), None);
        assert_eq!(PaymentStatus::default(), PaymentStatus::Paid);
    }

    #[test]
    fn kind_discriminators_are_uppercase() {
        assert_eq!(ReservationKind::Hotel.as_str(), "HOTEL");
        assert_eq!(ReservationKind::parse("TOUR"), Some(ReservationKind::Tour));
        assert_eq!(ReservationKind::parse("tour"), None);
    }

    #[test]
    fn path_segment_is_case_insensitive() {
        assert_eq!(
            ReservationKind::from_path_segment("hotel"),
            Some(ReservationKind::Hotel)
        );
        assert_eq!(
            ReservationKind::from_path_segment("Flight"),
            Some(ReservationKind::Flight)
        );
        assert_eq!(ReservationKind::from_path_segment("cruise"), None);
    }
}
