//! Flight catalog API handlers
//!
//! Search and detail are public; writes require an admin and check the
//! referenced airline first.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateFlightRequest, FlightListParams, FlightResponse, UpdateFlightRequest};
use crate::domain::access::{require_admin_or_read_only, Principal};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, PaginatedResponse, ValidatedJson, DEFAULT_PAGE_SIZE,
};

/// Flight handler state
#[derive(Clone)]
pub struct FlightAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/flight/",
    tag = "Flights",
    params(FlightListParams),
    responses(
        (status = 200, description = "Flight page", body = ApiResponse<PaginatedResponse<FlightResponse>>)
    )
)]
pub async fn list_flights(
    State(state): State<FlightAppState>,
    Query(params): Query<FlightListParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<FlightResponse>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<FlightResponse>>>),
> {
    let page = state
        .repos
        .flights()
        .list(
            &params.filter(),
            params.sort(),
            params.page(),
            params.limit(DEFAULT_PAGE_SIZE),
        )
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page.map(FlightResponse::from),
    ))))
}

#[utoipa::path(
    get,
    path = "/api/flight/{id}/",
    tag = "Flights",
    params(("id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight details", body = ApiResponse<FlightResponse>),
        (status = 404, description = "No such flight")
    )
)]
pub async fn get_flight(
    State(state): State<FlightAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<FlightResponse>>, (StatusCode, Json<ApiResponse<FlightResponse>>)> {
    let flight = state
        .repos
        .flights()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(flight_not_found(id)))?;

    Ok(Json(ApiResponse::success(flight.into())))
}

#[utoipa::path(
    post,
    path = "/api/flight/",
    tag = "Flights",
    security(("bearer_auth" = [])),
    request_body = CreateFlightRequest,
    responses(
        (status = 201, description = "Flight created", body = ApiResponse<FlightResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_flight(
    State(state): State<FlightAppState>,
    principal: Option<Extension<Principal>>,
    ValidatedJson(request): ValidatedJson<CreateFlightRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<FlightResponse>>),
    (StatusCode, Json<ApiResponse<FlightResponse>>),
> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    check_airline(&state, request.airline_id).await?;

    let flight = state
        .repos
        .flights()
        .create(request.into())
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(flight.into())),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/flight/{id}/",
    tag = "Flights",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Flight ID")),
    request_body = UpdateFlightRequest,
    responses(
        (status = 200, description = "Updated flight", body = ApiResponse<FlightResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such flight")
    )
)]
pub async fn update_flight(
    State(state): State<FlightAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateFlightRequest>,
) -> Result<Json<ApiResponse<FlightResponse>>, (StatusCode, Json<ApiResponse<FlightResponse>>)> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    if let Some(airline_id) = request.airline_id {
        check_airline(&state, airline_id).await?;
    }

    let flight = state
        .repos
        .flights()
        .update(id, request.into())
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(flight_not_found(id)))?;

    Ok(Json(ApiResponse::success(flight.into())))
}

#[utoipa::path(
    delete,
    path = "/api/flight/{id}/",
    tag = "Flights",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Flight ID")),
    responses(
        (status = 200, description = "Flight deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such flight")
    )
)]
pub async fn delete_flight(
    State(state): State<FlightAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let deleted = state
        .repos
        .flights()
        .delete(id)
        .await
        .map_err(domain_error_response)?;
    if !deleted {
        return Err(domain_error_response(flight_not_found(id)));
    }

    Ok(Json(ApiResponse::success(())))
}

fn flight_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Flight",
        field: "id",
        value: id.to_string(),
    }
}

async fn check_airline<T>(
    state: &FlightAppState,
    airline_id: i32,
) -> Result<(), (StatusCode, Json<ApiResponse<T>>)> {
    if state
        .repos
        .airlines()
        .find_by_id(airline_id)
        .await
        .map_err(domain_error_response)?
        .is_none()
    {
        return Err(domain_error_response(DomainError::Validation(format!(
            "Airline {} does not exist",
            airline_id
        ))));
    }
    Ok(())
}
