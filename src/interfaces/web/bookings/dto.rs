//! Bookings page DTOs
//!
//! Reuses the REST reservation serializers; the page context only
//! groups them.

use serde::Serialize;

use crate::application::{BookingDetail, UserBookings};
use crate::interfaces::http::modules::flight_reservations::FlightReservationResponse;
use crate::interfaces::http::modules::reservations::HotelReservationResponse;
use crate::interfaces::http::modules::tour_reservations::TourReservationResponse;

#[derive(Debug, Serialize)]
pub struct BookingsPage {
    pub hotel_reservations: Vec<HotelReservationResponse>,
    pub flight_reservations: Vec<FlightReservationResponse>,
    pub tour_reservations: Vec<TourReservationResponse>,
}

impl From<UserBookings> for BookingsPage {
    fn from(bookings: UserBookings) -> Self {
        Self {
            hotel_reservations: bookings.hotel.into_iter().map(Into::into).collect(),
            flight_reservations: bookings.flight.into_iter().map(Into::into).collect(),
            tour_reservations: bookings.tour.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum BookingResponse {
    Hotel(HotelReservationResponse),
    Flight(FlightReservationResponse),
    Tour(TourReservationResponse),
}

/// Detail context; `type` is the lowercase path segment it came from.
#[derive(Debug, Serialize)]
pub struct BookingDetailPage {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub booking: BookingResponse,
}

impl From<BookingDetail> for BookingDetailPage {
    fn from(detail: BookingDetail) -> Self {
        match detail {
            BookingDetail::Hotel(r) => Self {
                kind: "hotel",
                booking: BookingResponse::Hotel(r.into()),
            },
            BookingDetail::Flight(r) => Self {
                kind: "flight",
                booking: BookingResponse::Flight(r.into()),
            },
            BookingDetail::Tour(r) => Self {
                kind: "tour",
                booking: BookingResponse::Tour(r.into()),
            },
        }
    }
}
