//! Review API handlers
//!
//! Anyone can read reviews; creating one requires authentication and
//! editing or deleting is restricted to the author or an admin.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};

use super::dto::{CreateReviewRequest, ReviewListParams, ReviewResponse, UpdateReviewRequest};
use crate::domain::access::{require_owner_or_admin, Principal};
use crate::domain::review::{NewReview, ReviewTarget};
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::{
    domain_error_response, ApiResponse, PaginatedResponse, ValidatedJson, DEFAULT_PAGE_SIZE,
};

/// Review handler state
#[derive(Clone)]
pub struct ReviewAppState {
    pub repos: Arc<dyn RepositoryProvider>,
}

#[utoipa::path(
    get,
    path = "/api/review/",
    tag = "Reviews",
    params(ReviewListParams),
    responses(
        (status = 200, description = "Review page", body = ApiResponse<PaginatedResponse<ReviewResponse>>)
    )
)]
pub async fn list_reviews(
    State(state): State<ReviewAppState>,
    Query(params): Query<ReviewListParams>,
) -> Result<
    Json<ApiResponse<PaginatedResponse<ReviewResponse>>>,
    (StatusCode, Json<ApiResponse<PaginatedResponse<ReviewResponse>>>),
> {
    let page = state
        .repos
        .reviews()
        .list(
            params.target(),
            params.page(),
            params.limit(DEFAULT_PAGE_SIZE),
        )
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(PaginatedResponse::from_result(
        page.map(ReviewResponse::from),
    ))))
}

#[utoipa::path(
    get,
    path = "/api/review/{id}/",
    tag = "Reviews",
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review details", body = ApiResponse<ReviewResponse>),
        (status = 404, description = "No such review")
    )
)]
pub async fn get_review(
    State(state): State<ReviewAppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReviewResponse>>, (StatusCode, Json<ApiResponse<ReviewResponse>>)> {
    let review = state
        .repos
        .reviews()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(review_not_found(id)))?;

    Ok(Json(ApiResponse::success(review.into())))
}

#[utoipa::path(
    post,
    path = "/api/review/",
    tag = "Reviews",
    security(("bearer_auth" = [])),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ApiResponse<ReviewResponse>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthenticated")
    )
)]
pub async fn create_review(
    State(state): State<ReviewAppState>,
    principal: Option<Extension<Principal>>,
    ValidatedJson(request): ValidatedJson<CreateReviewRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<ReviewResponse>>),
    (StatusCode, Json<ApiResponse<ReviewResponse>>),
> {
    let Some(Extension(principal)) = principal else {
        return Err(domain_error_response(DomainError::Unauthorized(
            "Authentication required".to_string(),
        )));
    };

    let target =
        ReviewTarget::from_parts(&request.review_type, request.target_id).ok_or_else(|| {
            domain_error_response(DomainError::Validation(format!(
                "Invalid review type: {}",
                request.review_type
            )))
        })?;
    check_target(&state, target).await?;

    let review = state
        .repos
        .reviews()
        .create(NewReview {
            user_id: principal.user_id.clone(),
            target,
            rating: request.rating,
            comment: request.comment,
        })
        .await
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(review.into())),
    ))
}

#[utoipa::path(
    patch,
    path = "/api/review/{id}/",
    tag = "Reviews",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Review ID")),
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Updated review", body = ApiResponse<ReviewResponse>),
        (status = 403, description = "Neither the author nor an admin"),
        (status = 404, description = "No such review")
    )
)]
pub async fn update_review(
    State(state): State<ReviewAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    ValidatedJson(request): ValidatedJson<UpdateReviewRequest>,
) -> Result<Json<ApiResponse<ReviewResponse>>, (StatusCode, Json<ApiResponse<ReviewResponse>>)> {
    let review = state
        .repos
        .reviews()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(review_not_found(id)))?;

    require_owner_or_admin(principal.as_deref(), &review.user_id)
        .map_err(domain_error_response)?;

    let review = state
        .repos
        .reviews()
        .update(id, request.into())
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(review_not_found(id)))?;

    Ok(Json(ApiResponse::success(review.into())))
}

#[utoipa::path(
    delete,
    path = "/api/review/{id}/",
    tag = "Reviews",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Review ID")),
    responses(
        (status = 200, description = "Review deleted"),
        (status = 403, description = "Neither the author nor an admin"),
        (status = 404, description = "No such review")
    )
)]
pub async fn delete_review(
    State(state): State<ReviewAppState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, (StatusCode, Json<ApiResponse<()>>)> {
    let review = state
        .repos
        .reviews()
        .find_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or_else(|| domain_error_response(review_not_found(id)))?;

    require_owner_or_admin(principal.as_deref(), &review.user_id)
        .map_err(domain_error_response)?;

    state
        .repos
        .reviews()
        .delete(id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(())))
}

fn review_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Review",
        field: "id",
        value: id.to_string(),
    }
}

/// Rejects reviews that point at a room, flight or tour that is not
/// actually in the catalog.
async fn check_target<T>(
    state: &ReviewAppState,
    target: ReviewTarget,
) -> Result<(), (StatusCode, Json<ApiResponse<T>>)> {
    let exists = match target {
        ReviewTarget::Room(id) => state
            .repos
            .rooms()
            .find_by_id(id)
            .await
            .map_err(domain_error_response)?
            .is_some(),
        ReviewTarget::Flight(id) => state
            .repos
            .flights()
            .find_by_id(id)
            .await
            .map_err(domain_error_response)?
            .is_some(),
        ReviewTarget::Tour(id) => state
            .repos
            .tours()
            .find_by_id(id)
            .await
            .map_err(domain_error_response)?
            .is_some(),
    };

    if !exists {
        return Err(domain_error_response(DomainError::Validation(format!(
            "{} {} does not exist",
            match target {
                ReviewTarget::Room(_) => "Room",
                ReviewTarget::Flight(_) => "Flight",
                ReviewTarget::Tour(_) => "Tour",
            },
            target.target_id()
        ))));
    }
    Ok(())
}
