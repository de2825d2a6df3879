//! Airline catalog API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{AirlineResponse, CreateAirlineRequest, UpdateAirlineRequest};
use crate::domain::access::{require_admin_or_read_only, Principal};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, ListingParams, PaginatedResponse, ValidatedJson,
};

/// Airline handler state
#[derive(Clone)]
pub struct AirlineAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/airline/",
    tag = "Airlines",
    params(ListingParams),
    responses(
        (status = 200, description = "Airline page", body = ApiResponse<PaginatedResponse<AirlineResponse>>)
    )
)]
pub async fn list_airlines(
    State(state): State<AirlineAppState>,
    Query(params): Query<ListingParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<AirlineResponse>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<AirlineResponse>>>),
> {
    let page = state
        .repos
        .airlines()
        .list(params.page(), params.limit())
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page.map(AirlineResponse::from),
    ))))
}

#[utoipa::path(
    get,
    path = "/api/airline/{id}/",
    tag = "Airlines",
    params(("id" = i32, Path, description = "Airline ID")),
    responses(
        (status = 200, description = "Airline details", body = ApiResponse<AirlineResponse>),
        (status = 404, description = "No such airline")
    )
)]
pub async fn get_airline(
    State(state): State<AirlineAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<AirlineResponse>>, (StatusCode, Json<ApiResponse<AirlineResponse>>)> {
    let airline = state
        .repos
        .airlines()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(airline_not_found(id)))?;

    Ok(Json(ApiResponse::success(airline.into())))
}

#[utoipa::path(
    post,
    path = "/api/airline/",
    tag = "Airlines",
    security(("bearer_auth" = [])),
    request_body = CreateAirlineRequest,
    responses(
        (status = 201, description = "Airline created", body = ApiResponse<AirlineResponse>),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_airline(
    State(state): State<AirlineAppState>,
    principal: Option<Extension<Principal>>,
    ValidatedJson(request): ValidatedJson<CreateAirlineRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<AirlineResponse>>),
    (StatusCode, Json<ApiResponse<AirlineResponse>>),
> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let airline = state
        .repos
        .airlines()
        .create(request.into())
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(airline.into())),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/airline/{id}/",
    tag = "Airlines",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Airline ID")),
    request_body = UpdateAirlineRequest,
    responses(
        (status = 200, description = "Updated airline", body = ApiResponse<AirlineResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such airline")
    )
)]
pub async fn update_airline(
    State(state): State<AirlineAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateAirlineRequest>,
) -> Result<Json<ApiResponse<AirlineResponse>>, (StatusCode, Json<ApiResponse<AirlineResponse>>)> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let airline = state
        .repos
        .airlines()
        .update(id, request.into())
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(airline_not_found(id)))?;

    Ok(Json(ApiResponse::success(airline.into())))
}

#[utoipa::path(
    delete,
    path = "/api/airline/{id}/",
    tag = "Airlines",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Airline ID")),
    responses(
        (status = 200, description = "Airline deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such airline")
    )
)]
pub async fn delete_airline(
    State(state): State<AirlineAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let deleted = state
        .repos
        .airlines()
        .delete(id)
        .await
        .map_err(domain_error_response)?;
    if !deleted {
        return Err(domain_error_response(airline_not_found(id)));
    }

    Ok(Json(ApiResponse::success(())))
}

fn airline_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Airline",
        field: "id",
        value: id.to_string(),
    }
}
