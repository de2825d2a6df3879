//! Web auth handlers
//!
//! `POST /auth/` performs a login, or a signup when `?action=signup`
//! is set, and answers with the session cookie. An already
//! authenticated caller is pointed back at the profile page either
//! way.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use axum_extra::extract::cookie::CookieJar;
use tracing::warn;

use super::dto::{AuthForm, AuthQuery, AuthStatePage};
use crate::application::IdentityService;
use crate::domain::access::Principal;
use crate::interfaces::http::middleware::SESSION_COOKIE;
use crate::interfaces::web::common::{
    blank_to_none, session_cookie, session_cookie_removal, web_error_response, PageForm,
    PageResponse,
};

/// Web auth handler state
#[derive(Clone)]
pub struct WebAuthState {
    pub identity: Arc<IdentityService>,
}

/// GET /auth/
pub async fn auth_page(
    Query(query): Query<AuthQuery>,
    principal: Option<Extension<Principal>>,
) -> Json<PageResponse<AuthStatePage>> {
    if principal.is_some() {
        return Json(PageResponse::redirect("/profile/"));
    }

    Json(PageResponse::page(AuthStatePage {
        authenticated: false,
        is_signup: query.is_signup(),
    }))
}

/// POST /auth/
pub async fn auth_submit(
    State(state): State<WebAuthState>,
    Query(query): Query<AuthQuery>,
    principal: Option<Extension<Principal>>,
    jar: CookieJar,
    PageForm(form): PageForm<AuthForm>,
) -> Result<(CookieJar, Json<PageResponse<()>>), (StatusCode, Json<PageResponse<()>>)> {
    if principal.is_some() {
        return Ok((jar, Json(PageResponse::redirect("/profile/"))));
    }

    let username = form.username.unwrap_or_default();
    let password = form.password.unwrap_or_default();

    let (user, message) = if query.is_signup() {
        let email = form.email.unwrap_or_default();
        let phone_number = form.phone_number.and_then(blank_to_none);
        let user = state
            .identity
            .signup(&username, &email, &password, phone_number)
            .await
            .map_err(web_error_response)?;
        (user, "Registration successful.")
    } else {
        let user = state
            .identity
            .login(&username, &password)
            .await
            .map_err(web_error_response)?;
        (user, "Login successful.")
    };

    let token = state
        .identity
        .open_session(&user)
        .await
        .map_err(web_error_response)?;

    let jar = jar.add(session_cookie(token));
    Ok((
        jar,
        Json(PageResponse::notice(message).redirect_to("/profile/")),
    ))
}

/// POST /logout/
///
/// Deletes the session row and expires the cookie. Always succeeds
/// from the client's point of view; a store failure is logged and the
/// cookie is dropped regardless.
pub async fn logout(
    State(state): State<WebAuthState>,
    jar: CookieJar,
) -> (CookieJar, Json<PageResponse<()>>) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        if let Err(e) = state.identity.close_session(cookie.value()).await {
            warn!("Failed to close session: {}", e);
        }
    }

    let jar = jar.remove(session_cookie_removal());
    (
        jar,
        Json(PageResponse::notice("Logged out successfully.").redirect_to("/auth/")),
    )
}
