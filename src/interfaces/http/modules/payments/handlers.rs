//! Payment API handlers
//!
//! Admin-only glue for back-office tooling. A payment points at
//! exactly one reservation; the store enforces one payment per
//! reservation, surfaced as a conflict.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreatePaymentRequest, PaymentResponse, UpdatePaymentRequest};
use crate::domain::access::{require_admin, Principal};
use crate::domain::payment::{NewPayment, PaymentMethod, PaymentPatch};
use crate::domain::reservation::{PaymentStatus, ReservationKind};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, ListingParams, PaginatedResponse, ValidatedJson,
};

/// Payment handler state
#[derive(Clone)]
pub struct PaymentAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/payment/",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(ListingParams),
    responses(
        (status = 200, description = "Payment page", body = ApiResponse<PaginatedResponse<PaymentResponse>>),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn list_payments(
    State(state): State<PaymentAppState>,
    Extension(principal): Extension<Principal>,
    Query(params): Query<ListingParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<PaymentResponse>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<PaymentResponse>>>),
> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let page = state
        .repos
        .payments()
        .list(params.page(), params.limit())
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page.map(PaymentResponse::from),
    ))))
}

#[utoipa::path(
    get,
    path = "/api/payment/{id}/",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment details", body = ApiResponse<PaymentResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such payment")
    )
)]
pub async fn get_payment(
    State(state): State<PaymentAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<PaymentResponse>>, (StatusCode, Json<ApiResponse<PaymentResponse>>)> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let payment = state
        .repos
        .payments()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(payment_not_found(id)))?;

    Ok(Json(ApiResponse::success(payment.into())))
}

#[utoipa::path(
    post,
    path = "/api/payment/",
    tag = "Payments",
    security(("bearer_auth" = [])),
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment created", body = ApiResponse<PaymentResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not an admin"),
        (status = 409, description = "Reservation already has a payment")
    )
)]
pub async fn create_payment(
    State(state): State<PaymentAppState>,
    Extension(principal): Extension<Principal>,
    ValidatedJson(request): ValidatedJson<CreatePaymentRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<PaymentResponse>>),
    (StatusCode, Json<ApiResponse<PaymentResponse>>),
> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let kind = ReservationKind::parse(&request.reservation_type).ok_or_else(|| {
        domain_error_response(DomainError::Validation(format!(
            "Invalid reservation type: {}",
            request.reservation_type
        )))
    })?;
    check_reservation(&state, kind, request.reservation_id).await?;

    let payment_method = match request.payment_method.as_deref() {
        None => PaymentMethod::default(),
        Some(raw) => PaymentMethod::parse(raw)
            .ok_or_else(|| invalid_method(raw))
            .map_err(domain_error_response)?,
    };
    let status = match request.status.as_deref() {
        None => PaymentStatus::default(),
        Some(raw) => PaymentStatus::parse(raw)
            .ok_or_else(|| invalid_status(raw))
            .map_err(domain_error_response)?,
    };

    let payment = state
        .repos
        .payments()
        .create(NewPayment {
            kind,
            reservation_id: request.reservation_id,
            amount: request.amount,
            payment_method,
            status,
        })
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(payment.into())),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/payment/{id}/",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Payment ID")),
    request_body = UpdatePaymentRequest,
    responses(
        (status = 200, description = "Updated payment", body = ApiResponse<PaymentResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such payment")
    )
)]
pub async fn update_payment(
    State(state): State<PaymentAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdatePaymentRequest>,
) -> Result<Json<ApiResponse<PaymentResponse>>, (StatusCode, Json<ApiResponse<PaymentResponse>>)> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let payment_method = match request.payment_method.as_deref() {
        None => None,
        Some(raw) => Some(
            PaymentMethod::parse(raw)
                .ok_or_else(|| invalid_method(raw))
                .map_err(domain_error_response)?,
        ),
    };
    let status = match request.status.as_deref() {
        None => None,
        Some(raw) => Some(
            PaymentStatus::parse(raw)
                .ok_or_else(|| invalid_status(raw))
                .map_err(domain_error_response)?,
        ),
    };

    let payment = state
        .repos
        .payments()
        .update(
            id,
            PaymentPatch {
                amount: request.amount,
                payment_method,
                status,
            },
        )
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(payment_not_found(id)))?;

    Ok(Json(ApiResponse::success(payment.into())))
}

#[utoipa::path(
    delete,
    path = "/api/payment/{id}/",
    tag = "Payments",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Payment ID")),
    responses(
        (status = 200, description = "Payment deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such payment")
    )
)]
pub async fn delete_payment(
    State(state): State<PaymentAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let deleted = state
        .repos
        .payments()
        .delete(id)
        .await
        .map_err(domain_error_response)?;
    if !deleted {
        return Err(domain_error_response(payment_not_found(id)));
    }

    Ok(Json(ApiResponse::success(())))
}

fn payment_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Payment",
        field: "id",
        value: id.to_string(),
    }
}

fn invalid_method(raw: &str) -> DomainError {
    DomainError::Validation(format!("Invalid payment method: {}", raw))
}

fn invalid_status(raw: &str) -> DomainError {
    DomainError::Validation(format!("Invalid payment status: {}", raw))
}

/// Rejects payments that point at a reservation that does not exist.
async fn check_reservation<T>(
    state: &PaymentAppState,
    kind: ReservationKind,
    reservation_id: i32,
) -> Result<(), (StatusCode, Json<ApiResponse<T>>)> {
    let exists = match kind {
        ReservationKind::Hotel => state
            .repos
            .bookings()
            .find_hotel_reservation(reservation_id)
            .await
            .map_err(domain_error_response)?
            .is_some(),
        ReservationKind::Flight => state
            .repos
            .bookings()
            .find_flight_reservation(reservation_id)
            .await
            .map_err(domain_error_response)?
            .is_some(),
        ReservationKind::Tour => state
            .repos
            .bookings()
            .find_tour_reservation(reservation_id)
            .await
            .map_err(domain_error_response)?
            .is_some(),
    };

    if !exists {
        return Err(domain_error_response(DomainError::Validation(format!(
            "{} reservation {} does not exist",
            kind.as_str(),
            reservation_id
        ))));
    }
    Ok(())
}
