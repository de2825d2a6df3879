//! Tour reservation DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::reservation::TourReservation;

#[derive(Debug, Serialize, ToSchema)]
pub struct TourReservationResponse {
    pub id: i32,
    pub user_id: String,
    pub tour_id: i32,
    pub reservation_date: DateTime<Utc>,
    /// "Paid" or "Unpaid"
    pub payment_status: String,
}

impl From<TourReservation> for TourReservationResponse {
    fn from(reservation: TourReservation) -> Self {
        Self {
            id: reservation.id,
            user_id: reservation.user_id,
            tour_id: reservation.tour_id,
            reservation_date: reservation.reservation_date,
            payment_status: reservation.payment_status.as_str().to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTourReservationRequest {
    pub user_id: String,
    pub tour_id: i32,
    /// "Paid" (default) or "Unpaid"
    pub payment_status: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTourReservationRequest {
    /// "Paid" or "Unpaid"
    pub payment_status: Option<String>,
}
