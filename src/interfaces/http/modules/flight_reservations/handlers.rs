//! Flight reservation API handlers
//!
//! Admin-only glue for back-office tooling. Creating a row does not
//! touch the flight's seat counter; the catalog owns that number.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    CreateFlightReservationRequest, FlightReservationResponse, UpdateFlightReservationRequest,
};
use crate::domain::access::{require_admin, Principal};
use crate::domain::reservation::{FlightReservationPatch, NewFlightReservation, PaymentStatus};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, ListingParams, PaginatedResponse, ValidatedJson,
};

/// Flight reservation handler state
#[derive(Clone)]
pub struct FlightReservationAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/flight-reservation/",
    tag = "Flight reservations",
    security(("bearer_auth" = [])),
    params(ListingParams),
    responses(
        (status = 200, description = "Flight reservation page", body = ApiResponse<PaginatedResponse<FlightReservationResponse>>),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn list_flight_reservations(
    State(state): State<FlightReservationAppState>,
    Extension(principal): Extension<Principal>,
    Query(params): Query<ListingParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<FlightReservationResponse>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<FlightReservationResponse>>>),
> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let page = state
        .repos
        .bookings()
        .list_flight_reservations(params.page(), params.limit())
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page.map(FlightReservationResponse::from),
    ))))
}

#[utoipa::path(
    get,
    path = "/api/flight-reservation/{id}/",
    tag = "Flight reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<FlightReservationResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such reservation")
    )
)]
pub async fn get_flight_reservation(
    State(state): State<FlightReservationAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<
    Json<ApiResponse<FlightReservationResponse>>,
    (StatusCode, Json<ApiResponse<FlightReservationResponse>>),
> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let reservation = state
        .repos
        .bookings()
        .find_flight_reservation(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(reservation_not_found(id)))?;

    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    post,
    path = "/api/flight-reservation/",
    tag = "Flight reservations",
    security(("bearer_auth" = [])),
    request_body = CreateFlightReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<FlightReservationResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_flight_reservation(
    State(state): State<FlightReservationAppState>,
    Extension(principal): Extension<Principal>,
    ValidatedJson(request): ValidatedJson<CreateFlightReservationRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<FlightReservationResponse>>),
    (StatusCode, Json<ApiResponse<FlightReservationResponse>>),
> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    if state
        .repos
        .users()
        .find_by_id(&request.user_id)
        .await
        .map_err(domain_error_response)?
        .is_none()
    {
        return Err(domain_error_response(DomainError::Validation(format!(
            "User {} does not exist",
            request.user_id
        ))));
    }
    if state
        .repos
        .flights()
        .find_by_id(request.flight_id)
        .await
        .map_err(domain_error_response)?
        .is_none()
    {
        return Err(domain_error_response(DomainError::Validation(format!(
            "Flight {} does not exist",
            request.flight_id
        ))));
    }

    let payment_status =
        parse_status(request.payment_status.as_deref()).map_err(domain_error_response)?;

    let reservation = state
        .repos
        .bookings()
        .create_flight_reservation(NewFlightReservation {
            user_id: request.user_id,
            flight_id: request.flight_id,
            seat_number: request.seat_number,
            payment_status,
        })
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(reservation.into())),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/flight-reservation/{id}/",
    tag = "Flight reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = UpdateFlightReservationRequest,
    responses(
        (status = 200, description = "Updated reservation", body = ApiResponse<FlightReservationResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such reservation")
    )
)]
pub async fn update_flight_reservation(
    State(state): State<FlightReservationAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateFlightReservationRequest>,
) -> Result<
    Json<ApiResponse<FlightReservationResponse>>,
    (StatusCode, Json<ApiResponse<FlightReservationResponse>>),
> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let payment_status = match request.payment_status.as_deref() {
        None => None,
        Some(raw) => Some(
            PaymentStatus::parse(raw)
                .ok_or_else(|| invalid_status(raw))
                .map_err(domain_error_response)?,
        ),
    };

    let reservation = state
        .repos
        .bookings()
        .update_flight_reservation(
            id,
            FlightReservationPatch {
                seat_number: request.seat_number,
                payment_status,
            },
        )
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(reservation_not_found(id)))?;

    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    delete,
    path = "/api/flight-reservation/{id}/",
    tag = "Flight reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such reservation")
    )
)]
pub async fn delete_flight_reservation(
    State(state): State<FlightReservationAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let deleted = state
        .repos
        .bookings()
        .delete_flight_reservation(id)
        .await
        .map_err(domain_error_response)?;
    if !deleted {
        return Err(domain_error_response(reservation_not_found(id)));
    }

    Ok(Json(ApiResponse::success(())))
}

fn reservation_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "FlightReservation",
        field: "id",
        value: id.to_string(),
    }
}

fn invalid_status(raw: &str) -> DomainError {
    DomainError::Validation(format!("Invalid payment status: {}", raw))
}

fn parse_status(raw: Option<&str>) -> Result<PaymentStatus, DomainError> {
    match raw {
        None => Ok(PaymentStatus::default()),
        Some(s) => PaymentStatus::parse(s).ok_or_else(|| invalid_status(s)),
    }
}
