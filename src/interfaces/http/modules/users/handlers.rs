//! User account API handlers
//!
//! Listing, detail and delete are admin-only; PATCH is open to the
//! account owner as well. The router guards this group with
//! `require_auth`, so a `Principal` extension is always present.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{UpdateUserRequest, UserResponse};
use crate::application::IdentityService;
use crate::domain::access::{require_admin, require_owner_or_admin, Principal};
use crate::domain::DomainError;
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, ListingParams, PaginatedResponse, ValidatedJson,
};

/// User handler state
#[derive(Clone)]
pub struct UserAppState {
    pub identity: Arc<IdentityService>,
}

#[utoipa::path(
    get,
    path = "/api/user/",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(ListingParams),
    responses(
        (status = 200, description = "User page", body = ApiResponse<PaginatedResponse<UserResponse>>),
        (status = 401, description = "Unauthenticated"),
        (status = 403, description = "Not an admin")
    )
)]
pub async fn list_users(
    State(state): State<UserAppState>,
    Extension(principal): Extension<Principal>,
    Query(params): Query<ListingParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<UserResponse>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<UserResponse>>>),
> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let page = state
        .identity
        .list_users(params.page(), params.limit())
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page.map(UserResponse::from),
    ))))
}

#[utoipa::path(
    get,
    path = "/api/user/{id}/",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserResponse>),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such user")
    )
)]
pub async fn get_user(
    State(state): State<UserAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<UserResponse>>, (StatusCode, Json<ApiResponse<UserResponse>>)> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let user = state
        .identity
        .get_user(&id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.clone(),
            })
        })?;

    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    patch,
    path = "/api/user/{id}/",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated account", body = ApiResponse<UserResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Neither the owner nor an admin"),
        (status = 404, description = "No such user"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn update_user(
    State(state): State<UserAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, (StatusCode, Json<ApiResponse<UserResponse>>)> {
    require_owner_or_admin(Some(&principal), &id).map_err(domain_error_response)?;

    let user = state
        .identity
        .update_profile(&id, request.into())
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| {
            domain_error_response(DomainError::NotFound {
                entity: "User",
                field: "id",
                value: id.clone(),
            })
        })?;

    Ok(Json(ApiResponse::success(user.into())))
}

#[utoipa::path(
    delete,
    path = "/api/user/{id}/delete/",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = String, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 403, description = "Not an admin"),
        (status = 404, description = "No such user")
    )
)]
pub async fn delete_user(
    State(state): State<UserAppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    require_admin(Some(&principal)).map_err(domain_error_response)?;

    let deleted = state
        .identity
        .delete_user(&id)
        .await
        .map_err(domain_error_response)?;
    if !deleted {
        return Err(domain_error_response(DomainError::NotFound {
            entity: "User",
            field: "id",
            value: id,
        }));
    }

    Ok(Json(ApiResponse::success(())))
}
