//! Hotel reservation API handlers
//!
//! The whole group sits behind `require_auth`; creation books the room
//! through the transactional claim in `BookingService`, so a room can
//! never be double-booked even under concurrent requests.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateReservationRequest, HotelReservationResponse};
use crate::application::BookingService;
use crate::domain::access::Principal;
use crate::domain::reservation::PaymentStatus;
use crate::domain::DomainError;
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, ListingParams, PaginatedResponse, ValidatedJson,
};

/// Reservation handler state
#[derive(Clone)]
pub struct ReservationAppState {
    pub bookings: Arc<BookingService>,
}

#[utoipa::path(
    get,
    path = "/api/reservation/",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(ListingParams),
    responses(
        (status = 200, description = "Caller's hotel reservations", body = ApiResponse<PaginatedResponse<HotelReservationResponse>>),
        (status = 401, description = "Unauthenticated")
    )
)]
pub async fn list_reservations(
    State(state): State<ReservationAppState>,
    Extension(principal): Extension<Principal>,
    Query(params): Query<ListingParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<HotelReservationResponse>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<HotelReservationResponse>>>),
> {
    let page = state
        .bookings
        .reservations_for(&principal.user_id, params.page(), params.limit())
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page.map(HotelReservationResponse::from),
    ))))
}

#[utoipa::path(
    post,
    path = "/api/reservation/create/",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    request_body = CreateReservationRequest,
    responses(
        (status = 201, description = "Room booked", body = ApiResponse<HotelReservationResponse>),
        (status = 404, description = "No such room"),
        (status = 409, description = "Room is not available")
    )
)]
pub async fn create_reservation(
    State(state): State<ReservationAppState>,
    Extension(principal): Extension<Principal>,
    ValidatedJson(request): ValidatedJson<CreateReservationRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<HotelReservationResponse>>),
    (StatusCode, Json<ApiResponse<HotelReservationResponse>>),
> {
    let payment_status = match request.payment_status.as_deref() {
        None => PaymentStatus::default(),
        Some(raw) => PaymentStatus::parse(raw).ok_or_else(|| {
            domain_error_response(DomainError::Validation(format!(
                "Invalid payment status: {}",
                raw
            )))
        })?,
    };

    let reservation = state
        .bookings
        .book_room(&principal.user_id, request.room_id, payment_status)
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(reservation.into())),
    ))
}

#[utoipa::path(
    post,
    path = "/api/reservation/{id}/cancel/",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation cancelled"),
        (status = 403, description = "Neither the owner nor an admin"),
        (status = 404, description = "No such reservation")
    )
)]
pub async fn cancel_reservation(
    State(state): State<ReservationAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    state
        .bookings
        .cancel(Some(&principal), id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(())))
}

#[utoipa::path(
    get,
    path = "/api/reservation/{id}/",
    tag = "Reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<HotelReservationResponse>),
        (status = 403, description = "Neither the owner nor an admin"),
        (status = 404, description = "No such reservation")
    )
)]
pub async fn get_reservation(
    State(state): State<ReservationAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<
    Json<ApiResponse<HotelReservationResponse>>,
    (StatusCode, Json<ApiResponse<HotelReservationResponse>>),
> {
    let reservation = state
        .bookings
        .reservation_detail(Some(&principal), id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(reservation.into())))
}
