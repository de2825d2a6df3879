//! Profile page handler
//!
//! Read-only; account edits go through `PATCH /api/user/{id}/`. The
//! session middleware already resolved the full user, so this page
//! has no state of its own.

use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::Serialize;

use crate::domain::user::User;
use crate::interfaces::http::modules::users::UserResponse;
use crate::interfaces::web::common::{login_required, PageResponse};

#[derive(Debug, Serialize)]
pub struct ProfilePage {
    pub user: UserResponse,
}

/// GET /profile/
pub async fn profile_page(
    user: Option<Extension<User>>,
) -> Result<Json<PageResponse<ProfilePage>>, (StatusCode, Json<PageResponse<ProfilePage>>)> {
    let Some(Extension(user)) = user else {
        return Err(login_required("Please login to view your profile."));
    };

    Ok(Json(PageResponse::page(ProfilePage { user: user.into() })))
}
