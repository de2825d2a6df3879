//! Tour reservation API handlers
//!
//! Admin-only glue for back-office tooling. Creating a row does not
//! touch the tour's slot counter; the catalog owns that number.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    CreateTourReservationRequest, TourReservationResponse, UpdateTourReservationRequest,
};
use crate::domain::access::{require_admin, Principal};
use crate::domain::reservation::{NewTourReservation, PaymentStatus, TourReservationPatch};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, ListingParams, PaginatedResponse, ValidatedJson,
};

/// Tour reservation handler state
#[derive(Clone)]
pub struct TourReservationAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/tour-reservation/",
    tag = "Tour reservations",
    security(("bearer_auth" = [])),
    params(ListingParams),
    responses(
        (status = 200, description = "Tour reservation page", body = ApiResponse<PaginatedResponse<TourReservationResponse>>),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn list_tour_reservations(
    State(state): State<TourReservationAppState>,
    Extension(principal): Extension<Principal>,
    Query(params): Query<ListingParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<TourReservationResponse>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<TourReservationResponse>>>),
> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let page = state
        .repos
        .bookings()
        .list_tour_reservations(params.page(), params.limit())
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page.map(TourReservationResponse::from),
    ))))
}

#[utoipa::path(
    get,
    path = "/api/tour-reservation/{id}/",
    tag = "Tour reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<TourReservationResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such reservation")
    )
)]
pub async fn get_tour_reservation(
    State(state): State<TourReservationAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<
    Json<ApiResponse<TourReservationResponse>>,
    (StatusCode, Json<ApiResponse<TourReservationResponse>>),
> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let reservation = state
        .repos
        .bookings()
        .find_tour_reservation(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(reservation_not_found(id)))?;

    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    post,
    path = "/api/tour-reservation/",
    tag = "Tour reservations",
    security(("bearer_auth" = [])),
    request_body = CreateTourReservationRequest,
    responses(
        (status = 201, description = "Reservation created", body = ApiResponse<TourReservationResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_tour_reservation(
    State(state): State<TourReservationAppState>,
    Extension(principal): Extension<Principal>,
    ValidatedJson(request): ValidatedJson<CreateTourReservationRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<TourReservationResponse>>),
    (StatusCode, Json<ApiResponse<TourReservationResponse>>),
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
        .tours()
        .find_by_id(request.tour_id)
        .await
        .map_err(domain_error_response)?
        .is_none()
    {
        return Err(domain_error_response(DomainError::Validation(format!(
            "Tour {} does not exist",
            request.tour_id
        ))));
    }

    let payment_status =
        parse_status(request.payment_status.as_deref()).map_err(domain_error_response)?;

    let reservation = state
        .repos
        .bookings()
        .create_tour_reservation(NewTourReservation {
            user_id: request.user_id,
            tour_id: request.tour_id,
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
    path = "/api/tour-reservation/{id}/",
    tag = "Tour reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    request_body = UpdateTourReservationRequest,
    responses(
        (status = 200, description = "Updated reservation", body = ApiResponse<TourReservationResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such reservation")
    )
)]
pub async fn update_tour_reservation(
    State(state): State<TourReservationAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateTourReservationRequest>,
) -> Result<
    Json<ApiResponse<TourReservationResponse>>,
    (StatusCode, Json<ApiResponse<TourReservationResponse>>),
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
        .update_tour_reservation(id, TourReservationPatch { payment_status })
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(reservation_not_found(id)))?;

    Ok(Json(ApiResponse::success(reservation.into())))
}

#[utoipa::path(
    delete,
    path = "/api/tour-reservation/{id}/",
    tag = "Tour reservations",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Reservation ID")),
    responses(
        (status = 200, description = "Reservation deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such reservation")
    )
)]
pub async fn delete_tour_reservation(
    State(state): State<TourReservationAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let deleted = state
        .repos
        .bookings()
        .delete_tour_reservation(id)
        .await
        .map_err(domain_error_response)?;
    if !deleted {
        return Err(domain_error_response(reservation_not_found(id)));
    }

    Ok(Json(ApiResponse::success(())))
}

fn reservation_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "TourReservation",
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
