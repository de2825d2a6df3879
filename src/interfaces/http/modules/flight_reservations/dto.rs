//! Flight reservation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::reservation::FlightReservation;

#[derive(Debug, Serialize, ToSchema)]
pub struct FlightReservationResponse {
    pub id: i32,
    pub user_id: String,
    pub flight_id: i32,
    pub seat_number: String,
    pub reservation_date: DateTime<Utc>,
    /// "Paid" or "Unpaid"
    pub payment_status: String,
}

impl From<FlightReservation> for FlightReservationResponse {
    fn from(reservation: FlightReservation) -> Self {
        Self {
            id: reservation.id,
            user_id: reservation.user_id,
            flight_id: reservation.flight_id,
            seat_number: reservation.seat_number,
            reservation_date: reservation.reservation_date,
            payment_status: reservation.payment_status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFlightReservationRequest {
    pub user_id: String,
    pub flight_id: i32,
    #[validate(length(min = 1, max = 10, message = "Seat number must be 1-10 characters"))]
    pub seat_number: String,
    /// "Paid" (default) or "Unpaid"
    pub payment_status: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateFlightReservationRequest {
    #[validate(length(min = 1, max = 10, message = "Seat number must be 1-10 characters"))]
    pub seat_number: Option<String>,
    /// "Paid" or "Unpaid"
    pub payment_status: Option<String>,
}
