//! Flight domain entity

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Scheduled flight.
///
/// `available_seats` is a plain counter maintained by catalog edits;
/// flight bookings do not decrement it.
#[derive(Debug, Clone)]
pub struct Flight {
    pub id: i32,
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub airline_id: i32,
    pub seat_count: i32,
    pub available_seats: i32,
    pub price: Decimal,
}

#[derive(Debug, Clone)]
pub struct NewFlight {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub airline_id: i32,
    pub seat_count: i32,
    pub available_seats: i32,
    pub price: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct FlightPatch {
    pub flight_number: Option<String>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub airline_id: Option<i32>,
    pub seat_count: Option<i32>,
    pub available_seats: Option<i32>,
    pub price: Option<Decimal>,
}

/// Sort order for flight listings. Unknown values fall back to
/// departure date, the listing's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightSort {
    Date,
    PriceAsc,
    PriceDesc,
}

impl FlightSort {
    pub fn from_param(s: Option<&str>) -> Self {
        match s {
            Some("price_asc") => Self::PriceAsc,
            Some("price_desc") => Self::PriceDesc,
            _ => Self::Date,
        }
    }
}

/// Search criteria for flight listings.
///
/// `min_available_seats` comes from the `passengers` query parameter;
/// non-numeric input is treated as absent rather than an error.
#[derive(Debug, Clone, Default)]
pub struct FlightFilter {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub min_available_seats: Option<i32>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_parses_known_values() {
        assert_eq!(FlightSort::from_param(Some("price_asc")), FlightSort::PriceAsc);
        assert_eq!(FlightSort::from_param(Some("price_desc")), FlightSort::PriceDesc);
        assert_eq!(FlightSort::from_param(Some("date")), FlightSort::Date);
    }

    #[test]
    fn unknown_sort_falls_back_to_date() {
        assert_eq!(FlightSort::from_param(Some("bogus")), FlightSort::Date);
        assert_eq!(FlightSort::from_param(None), FlightSort::Date);
    }
}
