//! Authentication API handlers
//!
//! Signup and login are the only public write endpoints. Both answer
//! with a refresh/access JWT pair; credential and uniqueness checks
//! live in `IdentityService`.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{LoginRequest, SignupRequest, TokenPairResponse};
use crate::application::IdentityService;
use crate::interfaces::http::common::{domain_error_response, ApiResponse, ValidatedJson};

/// Auth state
#[derive(Clone)]
pub struct AuthAppState {
    pub identity: Arc<IdentityService>,
}

#[utoipa::path(
    post,
    path = "/api/auth/signup/",
    tag = "Auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<TokenPairResponse>),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Username or email already taken")
    )
)]
pub async fn signup(
    State(state): State<AuthAppState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<
    (StatusCode, Json<ApiResponse<TokenPairResponse>>),
    (StatusCode, Json<ApiResponse<TokenPairResponse>>),
> {
    let user = state
        .identity
        .signup(
            &request.username,
            &request.email,
            &request.password,
            request.phone_number,
        )
        .await
        .map_err(domain_error_response)?;

    let tokens = state
        .identity
        .issue_tokens(&user)
        .map_err(domain_error_response)?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(tokens.into())),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login/",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<TokenPairResponse>),
        (status = 401, description = "Invalid credentials or disabled account")
    )
)]
pub async fn login(
    State(state): State<AuthAppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Json<ApiResponse<TokenPairResponse>>, (StatusCode, Json<ApiResponse<TokenPairResponse>>)>
{
    let user = state
        .identity
        .login(&request.username, &request.password)
        .await
        .map_err(domain_error_response)?;

    let tokens = state
        .identity
        .issue_tokens(&user)
        .map_err(domain_error_response)?;

    Ok(Json(ApiResponse::success(tokens.into())))
}
