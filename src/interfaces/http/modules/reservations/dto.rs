//! Hotel reservation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::reservation::HotelReservation;

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelReservationResponse {
    pub id: i32,
    pub user_id: String,
    pub room_id: i32,
    pub reservation_date: DateTime<Utc>,
    /// "Paid" or "Unpaid"
    pub payment_status: String,
}

impl From<HotelReservation> for HotelReservationResponse {
    fn from(reservation: HotelReservation) -> Self {
        Self {
            id: reservation.id,
            user_id: reservation.user_id,
            room_id: reservation.room_id,
            reservation_date: reservation.reservation_date,
            payment_status: reservation.payment_status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReservationRequest {
    #[validate(range(min = 1, message = "A room ID is required"))]
    pub room_id: i32,
    /// "Paid" (default) or "Unpaid"
    pub payment_status: Option<String>,
}
