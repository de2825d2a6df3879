//! Hotel catalog API handlers
//!
//! Reads are public; writes go through `require_admin_or_read_only`.
//! The router layers `attach_principal` over this group, so the
//! extension is present whenever the caller sent a valid token.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{
    CreateHotelRequest, HotelListItem, HotelListParams, HotelResponse, UpdateHotelRequest,
};
use crate::domain::access::{require_admin_or_read_only, Principal};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, PaginatedResponse, ValidatedJson, DEFAULT_PAGE_SIZE,
};
use crate::interfaces::http::modules::rooms::RoomResponse;

/// Hotel handler state
#[derive(Clone)]
pub struct HotelAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/hotel/",
    tag = "Hotels",
    params(HotelListParams),
    responses(
        (status = 200, description = "Hotel page", body = ApiResponse<PaginatedResponse<HotelListItem>>)
    )
)]
pub async fn list_hotels(
    State(state): State<HotelAppState>,
    Query(params): Query<HotelListParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<HotelListItem>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<HotelListItem>>>),
> {
    let page = state
        .repos
        .hotels()
        .list(
            &params.filter(),
            params.sort(),
            params.page(),
            params.limit(DEFAULT_PAGE_SIZE),
        )
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page.map(HotelListItem::from),
    ))))
}

#[utoipa::path(
    get,
    path = "/api/hotel/{id}/",
    tag = "Hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel details", body = ApiResponse<HotelResponse>),
        (status = 404, description = "No such hotel")
    )
)]
pub async fn get_hotel(
    State(state): State<HotelAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<HotelResponse>>, (StatusCode, Json<ApiResponse<HotelResponse>>)> {
    let hotel = state
        .repos
        .hotels()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(hotel_not_found(id)))?;

    Ok(Json(ApiResponse::success(hotel.into())))
}

#[utoipa::path(
    get,
    path = "/api/hotel/{id}/room/",
    tag = "Hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Rooms of the hotel", body = ApiResponse<Vec<RoomResponse>>),
        (status = 404, description = "No such hotel")
    )
)]
pub async fn hotel_rooms(
    State(state): State<HotelAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Vec<RoomResponse>>>, (StatusCode, Json<ApiResponse<Vec<RoomResponse>>>)>
{
    if state
        .repos
        .hotels()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .is_none()
    {
        return Err(domain_error_response(hotel_not_found(id)));
    }

    let rooms = state
        .repos
        .rooms()
        .find_by_hotel(id)
        .await
        .map_err(domain_error_response)?;

    let mut items = Vec::with_capacity(rooms.len());
    for room in rooms {
        let amenities = state
            .repos
            .rooms()
            .amenities_of(room.id)
            .await
            .map_err(domain_error_response)?;
        items.push(RoomResponse::from_parts(room, amenities));
    }

    Ok(Json(ApiResponse::success(items)))
}

#[utoipa::path(
    post,
    path = "/api/hotel/",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    request_body = CreateHotelRequest,
    responses(
        (status = 201, description = "Hotel created", body = ApiResponse<HotelResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn create_hotel(
    State(state): State<HotelAppState>,
    principal: Option<Extension<Principal>>,
    ValidatedJson(request): ValidatedJson<CreateHotelRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<HotelResponse>>),
    (StatusCode, Json<ApiResponse<HotelResponse>>),
> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    if state
        .repos
        .users()
        .find_by_id(&request.manager_id)
        .await
        .map_err(domain_error_response)?
        .is_none()
    {
        return Err(domain_error_response(DomainError::Validation(format!(
            "Manager {} does not exist",
            request.manager_id
        ))));
    }

    let hotel = state
        .repos
        .hotels()
        .create(request.into())
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(hotel.into())),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/hotel/{id}/",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = UpdateHotelRequest,
    responses(
        (status = 200, description = "Updated hotel", body = ApiResponse<HotelResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such hotel")
    )
)]
pub async fn update_hotel(
    State(state): State<HotelAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateHotelRequest>,
) -> Result<Json<ApiResponse<HotelResponse>>, (StatusCode, Json<ApiResponse<HotelResponse>>)> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    if let Some(manager_id) = &request.manager_id {
        if state
            .repos
            .users()
            .find_by_id(manager_id)
            .await
            .map_err(domain_error_response)?
            .is_none()
        {
            return Err(domain_error_response(DomainError::Validation(format!(
                "Manager {} does not exist",
                manager_id
            ))));
        }
    }

    let hotel = state
        .repos
        .hotels()
        .update(id, request.into())
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(hotel_not_found(id)))?;

    Ok(Json(ApiResponse::success(hotel.into())))
}

#[utoipa::path(
    delete,
    path = "/api/hotel/{id}/",
    tag = "Hotels",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such hotel")
    )
)]
pub async fn delete_hotel(
    State(state): State<HotelAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin_or_read_only(principal.as_deref(), false).map_err(domain_error_response)?;

    let deleted = state
        .repos
        .hotels()
        .delete(id)
        .await
        .map_err(domain_error_response)?;
    if !deleted {
        return Err(domain_error_response(hotel_not_found(id)));
    }

    Ok(Json(ApiResponse::success(())))
}

fn hotel_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Hotel",
        field: "id",
        value: id.to_string(),
    }
}
