//! Room type catalog API handlers

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateRoomTypeRequest, RoomTypeResponse, UpdateRoomTypeRequest};
use crate::domain::access::{require_admin_or_read_only, Principal};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, ListingParams, PaginatedResponse, ValidatedJson,
};

/// Room type handler state
#[derive(Clone)]
pub struct RoomTypeAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/room-type/",
    tag = "Room types",
    params(ListingParams),
    responses(
        (status = 200, description = "Room type page", body = ApiResponse<PaginatedResponse<RoomTypeResponse>>)
    )
)]
pub async fn list_room_types(
    State(state): State<RoomTypeAppState>,
    Query(params): Query<ListingParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<RoomTypeResponse>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<RoomTypeResponse>>>),
> {
    let page = state
        .repos
        .room_types()
        .list(params.page(), params.limit())
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page.map(RoomTypeResponse::from),
    ))))
}

#[utoipa::path(
    get,
    path = "/api/room-type/{id}/",
    tag = "Room types",
    params(("id" = i32, Path, description = "Room type ID")),
    responses(
        (status = 200, description = "Room type details", body = ApiResponse<RoomTypeResponse>),
        (status = 404, description = "No such room type")
    )
)]
pub async fn get_room_type(
    State(state): State<RoomTypeAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RoomTypeResponse>>, (StatusCode, Json<ApiResponse<RoomTypeResponse>>)>
{
    let room_type = state
        .repos
        .room_types()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(room_type_not_found(id)))?;

    Ok(Json(ApiResponse::success(room_type.into())))
}

#[utoipa::path(
    post,
    path = "/api/room-type/",
    tag = "Room types",
    security(("bearer_auth" = [])),
    request_body = CreateRoomTypeRequest,
    responses(
        (status = 201, description = "Room type created", body = ApiResponse<RoomTypeResponse>),
        (status = 403, description = "Not an admin"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn create_room_type(
    State(state): State<RoomTypeAppState>,
    principal: Option<Extension<Principal>>,
    ValidatedJson(request): ValidatedJson<CreateRoomTypeRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<RoomTypeResponse>>),
    (StatusCode, Json<ApiResponse<RoomTypeResponse>>),
> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let room_type = state
        .repos
        .room_types()
        .create(request.into())
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(room_type.into())),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/room-type/{id}/",
    tag = "Room types",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room type ID")),
    request_body = UpdateRoomTypeRequest,
    responses(
        (status = 200, description = "Updated room type", body = ApiResponse<RoomTypeResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such room type"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn update_room_type(
    State(state): State<RoomTypeAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRoomTypeRequest>,
) -> Result<Json<ApiResponse<RoomTypeResponse>>, (StatusCode, Json<ApiResponse<RoomTypeResponse>>)>
{
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let room_type = state
        .repos
        .room_types()
        .update(id, request.into())
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(room_type_not_found(id)))?;

    Ok(Json(ApiResponse::success(room_type.into())))
}

#[utoipa::path(
    delete,
    path = "/api/room-type/{id}/",
    tag = "Room types",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room type ID")),
    responses(
        (status = 200, description = "Room type deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such room type")
    )
)]
pub async fn delete_room_type(
    State(state): State<RoomTypeAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let deleted = state
        .repos
        .room_types()
        .delete(id)
        .await
        .map_err(domain_error_response)?;
    if !deleted {
        return Err(domain_error_response(room_type_not_found(id)));
    }

    Ok(Json(ApiResponse::success(())))
}

fn room_type_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "RoomType",
        field: "id",
        value: id.to_string(),
    }
}
