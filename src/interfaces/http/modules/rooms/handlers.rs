//! Room catalog API handlers
//!
//! Room detail is public; create/update/delete require an admin.
//! Referenced hotels, room types and amenities are checked up front so
//! a bad ID reads as a validation error instead of a store failure.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateRoomRequest, RoomResponse, UpdateRoomRequest};
use crate::domain::access::{require_admin_or_read_only, Principal};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

/// Room handler state
#[derive(Clone)]
pub struct RoomAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/room/{id}/",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = ApiResponse<RoomResponse>),
        (status = 404, description = "No such room")
    )
)]
pub async fn get_room(
    State(state): State<RoomAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<RoomResponse>>, (StatusCode, Json<ApiResponse<RoomResponse>>)> {
    let room = state
        .repos
        .rooms()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(room_not_found(id)))?;

    let amenities = state
        .repos
        .rooms()
        .amenities_of(room.id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(RoomResponse::from_parts(
        room, amenities,
    ))))
}

#[utoipa::path(
    post,
    path = "/api/room/",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created", body = ApiResponse<RoomResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not an admin"),
        (status = 409, description = "Room number already taken in the hotel")
    )
)]
pub async fn create_room(
    State(state): State<RoomAppState>,
    principal: Option<Extension<Principal>>,
    ValidatedJson(request): ValidatedJson<CreateRoomRequest>,
) -> Result<(StatusCode, Json<ApiResponse<RoomResponse>>), (StatusCode, Json<ApiResponse<RoomResponse>>)>
{
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    if state
        .repos
        .hotels()
        .find_by_id(request.hotel_id)
        .await
        .map_err(domain_error_response)?
        .is_none()
    {
        return Err(domain_error_response(DomainError::Validation(format!(
            "Hotel {} does not exist",
            request.hotel_id
        ))));
    }
    if let Some(room_type_id) = request.room_type_id {
        check_room_type(&state, room_type_id).await?;
    }

    let (room, amenity_ids) = request.into_parts();
    check_amenities(&state, &amenity_ids).await?;

    let room = state
        .repos
        .rooms()
        .create(room, &amenity_ids)
        .await
        .map_err(domain_error_response)?;
    let amenities = state
        .repos
        .rooms()
        .amenities_of(room.id)
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(RoomResponse::from_parts(
            room, amenities,
        ))),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/room/{id}/",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Updated room", body = ApiResponse<RoomResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such room"),
        (status = 409, description = "Room number already taken in the hotel")
    )
)]
pub async fn update_room(
    State(state): State<RoomAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateRoomRequest>,
) -> Result<Json<ApiResponse<RoomResponse>>, (StatusCode, Json<ApiResponse<RoomResponse>>)> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    if let Some(Some(room_type_id)) = request.room_type_id {
        check_room_type(&state, room_type_id).await?;
    }

    let (patch, amenity_ids) = request.into_parts();
    if let Some(ids) = &amenity_ids {
        check_amenities(&state, ids).await?;
    }

    let room = state
        .repos
        .rooms()
        .update(id, patch, amenity_ids.as_deref())
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(room_not_found(id)))?;

    let amenities = state
        .repos
        .rooms()
        .amenities_of(room.id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(RoomResponse::from_parts(
        room, amenities,
    ))))
}

#[utoipa::path(
    delete,
    path = "/api/room/{id}/",
    tag = "Rooms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such room")
    )
)]
pub async fn delete_room(
    State(state): State<RoomAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let deleted = state
        .repos
        .rooms()
        .delete(id)
        .await
        .map_err(domain_error_response)?;
    if !deleted {
        return Err(domain_error_response(room_not_found(id)));
    }

    Ok(Json(ApiResponse::success(())))
}

fn room_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Room",
        field: "id",
        value: id.to_string(),
    }
}

async fn check_room_type<T>(
    state: &RoomAppState,
    room_type_id: i32,
) -> Result<(), (StatusCode, Json<ApiResponse<T>>)> {
    if state
        .repos
        .room_types()
        .find_by_id(room_type_id)
        .await
        .map_err(domain_error_response)?
        .is_none()
    {
        return Err(domain_error_response(DomainError::Validation(format!(
            "Room type {} does not exist",
            room_type_id
        ))));
    }
    Ok(())
}

async fn check_amenities<T>(
    state: &RoomAppState,
    amenity_ids: &[i32],
) -> Result<(), (StatusCode, Json<ApiResponse<T>>)> {
    for &amenity_id in amenity_ids {
        if state
            .repos
            .amenities()
            .find_by_id(amenity_id)
            .await
            .map_err(domain_error_response)?
            .is_none()
        {
            return Err(domain_error_response(DomainError::Validation(format!(
                "Amenity {} does not exist",
                amenity_id
            ))));
        }
    }
    Ok(())
}
