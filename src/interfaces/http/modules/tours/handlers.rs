//! Tour catalog API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateTourRequest, TourListParams, TourResponse, UpdateTourRequest};
use crate::domain::access::{require_admin_or_read_only, Principal};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, PaginatedResponse, ValidatedJson, DEFAULT_PAGE_SIZE,
};

/// Tour handler state
#[derive(Clone)]
pub struct TourAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/tour/",
    tag = "Tours",
    params(TourListParams),
    responses(
        (status = 200, description = "Tour page", body = ApiResponse<PaginatedResponse<TourResponse>>)
    )
)]
pub async fn list_tours(
    State(state): State<TourAppState>,
    Query(params): Query<TourListParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<TourResponse>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<TourResponse>>>),
> {
    let page = state
        .repos
        .tours()
        .list(
            &params.filter(),
            params.sort(),
            params.page(),
            params.limit(DEFAULT_PAGE_SIZE),
        )
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page.map(TourResponse::from),
    ))))
}

#[utoipa::path(
    get,
    path = "/api/tour/{id}/",
    tag = "Tours",
    params(("id" = i32, Path, description = "Tour ID")),
    responses(
        (status = 200, description = "Tour details", body = ApiResponse<TourResponse>),
        (status = 404, description = "No such tour")
    )
)]
pub async fn get_tour(
    State(state): State<TourAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<TourResponse>>, (StatusCode, Json<ApiResponse<TourResponse>>)> {
    let tour = state
        .repos
        .tours()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(tour_not_found(id)))?;

    Ok(Json(ApiResponse::success(tour.into())))
}

#[utoipa::path(
    post,
    path = "/api/tour/",
    tag = "Tours",
    security(("bearer_auth" = [])),
    request_body = CreateTourRequest,
    responses(
        (status = 201, description = "Tour created", body = ApiResponse<TourResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_tour(
    State(state): State<TourAppState>,
    principal: Option<Extension<Principal>>,
    ValidatedJson(request): ValidatedJson<CreateTourRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TourResponse>>), (StatusCode, Json<ApiResponse<TourResponse>>)>
{
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let tour = state
        .repos
        .tours()
        .create(request.into())
        .await
        .map_err(domain_error_response)?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(tour.into()))))
}

#[utoipa::path(
    patch,
    path = "/api/tour/{id}/",
    tag = "Tours",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tour ID")),
    request_body = UpdateTourRequest,
    responses(
        (status = 200, description = "Updated tour", body = ApiResponse<TourResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such tour")
    )
)]
pub async fn update_tour(
    State(state): State<TourAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateTourRequest>,
) -> Result<Json<ApiResponse<TourResponse>>, (StatusCode, Json<ApiResponse<TourResponse>>)> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let tour = state
        .repos
        .tours()
        .update(id, request.into())
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(tour_not_found(id)))?;

    Ok(Json(ApiResponse::success(tour.into())))
}

#[utoipa::path(
    delete,
    path = "/api/tour/{id}/",
    tag = "Tours",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Tour ID")),
    responses(
        (status = 200, description = "Tour deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such tour")
    )
)]
pub async fn delete_tour(
    State(state): State<TourAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let deleted = state
        .repos
        .tours()
        .delete(id)
        .await
        .map_err(domain_error_response)?;
    if !deleted {
        return Err(domain_error_response(tour_not_found(id)));
    }

    Ok(Json(ApiResponse::success(())))
}

fn tour_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Tour",
        field: "id",
        value: id.to_string(),
    }
}
