//! Flight page DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::flight::{FlightPatch, NewFlight};
use crate::interfaces::http::common::PaginatedResponse;
use crate::interfaces::http::modules::airlines::AirlineResponse;
use crate::interfaces::http::modules::flights::FlightResponse;

#[derive(Debug, Serialize)]
pub struct FlightSearchEcho {
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub passengers: Option<String>,
    pub sort: String,
}

#[derive(Debug, Serialize)]
pub struct FlightListPage {
    pub flights: PaginatedResponse<FlightResponse>,
    pub search_params: FlightSearchEcho,
}

/// Form context: the airline dropdown always ships with the form,
/// `flight` is set when editing.
#[derive(Debug, Serialize)]
pub struct FlightFormPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight: Option<FlightResponse>,
    pub airlines: Vec<AirlineResponse>,
}

/// The flight form; `airline` is the selected dropdown id, the two
/// timestamps arrive as `datetime-local` strings and are parsed by the
/// handler.
#[derive(Debug, Deserialize)]
pub struct FlightForm {
    pub flight_number: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub airline: i32,
    pub seat_count: i32,
    pub available_seats: i32,
    pub price: Decimal,
}

impl FlightForm {
    pub fn into_new(self, departure_time: DateTime<Utc>, arrival_time: DateTime<Utc>) -> NewFlight {
        NewFlight {
            flight_number: self.flight_number,
            origin: self.origin,
            destination: self.destination,
            departure_time,
            arrival_time,
            airline_id: self.airline,
            seat_count: self.seat_count,
            available_seats: self.available_seats,
            price: self.price,
        }
    }

    /// Full-row overwrite with the already parsed timestamps.
    pub fn into_patch(
        self,
        departure_time: DateTime<Utc>,
        arrival_time: DateTime<Utc>,
    ) -> FlightPatch {
        FlightPatch {
            flight_number: Some(self.flight_number),
            origin: Some(self.origin),
            destination: Some(self.destination),
            departure_time: Some(departure_time),
            arrival_time: Some(arrival_time),
            airline_id: Some(self.airline),
            seat_count: Some(self.seat_count),
            available_seats: Some(self.available_seats),
            price: Some(self.price),
        }
    }
}
