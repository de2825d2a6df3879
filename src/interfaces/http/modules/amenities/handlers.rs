//! Amenity catalog API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{AmenityResponse, CreateAmenityRequest, UpdateAmenityRequest};
use crate::domain::access::{require_admin_or_read_only, Principal};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, ListingParams, PaginatedResponse, ValidatedJson,
};

/// Amenity handler state
#[derive(Clone)]
pub struct AmenityAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/amenity/",
    tag = "Amenities",
    params(ListingParams),
    responses(
        (status = 200, description = "Amenity page", body = ApiResponse<PaginatedResponse<AmenityResponse>>)
    )
)]
pub async fn list_amenities(
    State(state): State<AmenityAppState>,
    Query(params): Query<ListingParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<AmenityResponse>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<AmenityResponse>>>),
> {
    let page = state
        .repos
        .amenities()
        .list(params.page(), params.limit())
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page.map(AmenityResponse::from),
    ))))
}

#[utoipa::path(
    get,
    path = "/api/amenity/{id}/",
    tag = "Amenities",
    params(("id" = i32, Path, description = "Amenity ID")),
    responses(
        (status = 200, description = "Amenity details", body = ApiResponse<AmenityResponse>),
        (status = 404, description = "No such amenity")
    )
)]
pub async fn get_amenity(
    State(state): State<AmenityAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<AmenityResponse>>, (StatusCode, Json<ApiResponse<AmenityResponse>>)> {
    let amenity = state
        .repos
        .amenities()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(amenity_not_found(id)))?;

    Ok(Json(ApiResponse::success(amenity.into())))
}

#[utoipa::path(
    post,
    path = "/api/amenity/",
    tag = "Amenities",
    security(("bearer_auth" = [])),
    request_body = CreateAmenityRequest,
    responses(
        (status = 201, description = "Amenity created", body = ApiResponse<AmenityResponse>),
        (status = 403, description = "Not an admin"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn create_amenity(
    State(state): State<AmenityAppState>,
    principal: Option<Extension<Principal>>,
    ValidatedJson(request): ValidatedJson<CreateAmenityRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<AmenityResponse>>),
    (StatusCode, Json<ApiResponse<AmenityResponse>>),
> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let amenity = state
        .repos
        .amenities()
        .create(request.into())
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(amenity.into())),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/amenity/{id}/",
    tag = "Amenities",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Amenity ID")),
    request_body = UpdateAmenityRequest,
    responses(
        (status = 200, description = "Updated amenity", body = ApiResponse<AmenityResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such amenity"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn update_amenity(
    State(state): State<AmenityAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateAmenityRequest>,
) -> Result<Json<ApiResponse<AmenityResponse>>, (StatusCode, Json<ApiResponse<AmenityResponse>>)> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let amenity = state
        .repos
        .amenities()
        .update(id, request.into())
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(amenity_not_found(id)))?;

    Ok(Json(ApiResponse::success(amenity.into())))
}

#[utoipa::path(
    delete,
    path = "/api/amenity/{id}/",
    tag = "Amenities",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Amenity ID")),
    responses(
        (status = 200, description = "Amenity deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such amenity")
    )
)]
pub async fn delete_amenity(
    State(state): State<AmenityAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let deleted = state
        .repos
        .amenities()
        .delete(id)
        .await
        .map_err(domain_error_response)?;
    if !deleted {
        return Err(domain_error_response(amenity_not_found(id)));
    }

    Ok(Json(ApiResponse::success(())))
}

fn amenity_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Amenity",
        field: "id",
        value: id.to_string(),
    }
}
