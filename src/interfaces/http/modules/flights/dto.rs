//! Flight catalog DTOs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::flight::{Flight, FlightFilter, FlightPatch, FlightSort, NewFlight};
use crate::interfaces::http::common::MAX_PAGE_SIZE;
use crate::shared::types::{page_or_first, page_size_or};

#[derive(Debug, Serialize, ToSchema)]
pub struct FlightResponse {
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

impl From<Flight> for FlightResponse {
    fn from(flight: Flight) -> Self {
        Self {
            id: flight.id,
            flight_number: flight.flight_number,
            origin: flight.origin,
            destination: flight.destination,
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            airline_id: flight.airline_id,
            seat_count: flight.seat_count,
            available_seats: flight.available_seats,
            price: flight.price,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFlightRequest {
    #[validate(length(min = 1, max = 20, message = "Flight number must be 1-20 characters"))]
    pub flight_number: String,
    #[validate(length(min = 1, max = 100, message = "Origin must be 1-100 characters"))]
    pub origin: String,
    #[validate(length(min = 1, max = 100, message = "Destination must be 1-100 characters"))]
    pub destination: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub airline_id: i32,
    pub seat_count: i32,
    /// Defaults to `seat_count`
    pub available_seats: Option<i32>,
    pub price: Decimal,
}

impl From<CreateFlightRequest> for NewFlight {
    fn from(request: CreateFlightRequest) -> Self {
        Self {
            flight_number: request.flight_number,
            origin: request.origin,
            destination: request.destination,
            departure_time: request.departure_time,
            arrival_time: request.arrival_time,
            airline_id: request.airline_id,
            seat_count: request.seat_count,
            available_seats: request.available_seats.unwrap_or(request.seat_count),
            price: request.price,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateFlightRequest {
    #[validate(length(min = 1, max = 20, message = "Flight number must be 1-20 characters"))]
    pub flight_number: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Origin must be 1-100 characters"))]
    pub origin: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Destination must be 1-100 characters"))]
    pub destination: Option<String>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub airline_id: Option<i32>,
    pub seat_count: Option<i32>,
    pub available_seats: Option<i32>,
    pub price: Option<Decimal>,
}

impl From<UpdateFlightRequest> for FlightPatch {
    fn from(request: UpdateFlightRequest) -> Self {
        Self {
            flight_number: request.flight_number,
            origin: request.origin,
            destination: request.destination,
            departure_time: request.departure_time,
            arrival_time: request.arrival_time,
            airline_id: request.airline_id,
            seat_count: request.seat_count,
            available_seats: request.available_seats,
            price: request.price,
        }
    }
}

/// Flight search query. `passengers` filters on available seats;
/// non-numeric input is ignored rather than rejected.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct FlightListParams {
    /// Case-insensitive origin substring
    pub origin: Option<String>,
    /// Case-insensitive destination substring
    pub destination: Option<String>,
    /// Minimum available seats
    pub passengers: Option<String>,
    /// date | price_asc | price_desc
    pub sort: Option<String>,
    /// Page number, 1-based
    pub page: Option<String>,
    /// Items per page, capped at 100
    pub count: Option<String>,
}

impl FlightListParams {
    pub fn filter(&self) -> FlightFilter {
        FlightFilter {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            min_available_seats: self
                .passengers
                .as_deref()
                .and_then(|p| p.trim().parse().ok()),
        }
    }

    pub fn sort(&self) -> FlightSort {
        FlightSort::from_param(self.sort.as_deref())
    }

    pub fn page(&self) -> u32 {
        page_or_first(self.page.as_deref())
    }

    pub fn limit(&self, default: u32) -> u32 {
        page_size_or(self.count.as_deref(), default, MAX_PAGE_SIZE)
    }
}
