//! Shared web-surface plumbing
//!
//! The web surface speaks JSON out and HTML-form bodies in. What the
//! server-rendered original expressed as flash messages and redirects
//! becomes a `message` field and a `redirect` hint; a missing session
//! is a 401 that points the client at `/auth/`.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, FromRequest};
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, SameSite};
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::error;

use crate::domain::DomainError;
use crate::interfaces::http::middleware::SESSION_COOKIE;

/// Response envelope for the web pages.
///
/// `data` carries the page context, `message` the flash text,
/// `redirect` the path the client should navigate to next. All three
/// are optional; `success` is always present.
#[derive(Debug, Serialize)]
pub struct PageResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> PageResponse<T> {
    /// Page context without a flash message.
    pub fn page(data: T) -> Self {
        Self {
            success: true,
            message: None,
            redirect: None,
            data: Some(data),
        }
    }

    /// Page context plus a flash message.
    pub fn flash(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            redirect: None,
            data: Some(data),
        }
    }

    /// Flash message with no page context.
    pub fn notice(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            redirect: None,
            data: None,
        }
    }

    /// Bare navigation hint, nothing to show.
    pub fn redirect(to: &'static str) -> Self {
        Self {
            success: true,
            message: None,
            redirect: Some(to),
            data: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            redirect: None,
            data: None,
        }
    }

    pub fn redirect_to(mut self, to: &'static str) -> Self {
        self.redirect = Some(to);
        self
    }
}

/// 401 that tells the client to go log in first.
pub fn login_required<T>(message: &str) -> (StatusCode, Json<PageResponse<T>>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(PageResponse::failure(message).redirect_to("/auth/")),
    )
}

/// Maps a [`DomainError`] onto the web envelope.
///
/// Same status mapping as the REST surface, but the body is a flash
/// message rather than a machine error. Store failures log the detail
/// and show a generic apology.
pub fn web_error_response<T>(err: DomainError) -> (StatusCode, Json<PageResponse<T>>) {
    let status = match &err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let message = match err {
        DomainError::NotFound { entity, .. } => format!("{} not found.", entity),
        DomainError::Validation(m)
        | DomainError::Conflict(m)
        | DomainError::Unauthorized(m)
        | DomainError::Forbidden(m) => m,
        DomainError::Database(detail) => {
            error!("Web request failed on the store: {}", detail);
            "Something went wrong. Please try again.".to_string()
        }
    };

    (status, Json(PageResponse::failure(message)))
}

/// Session cookie as the browser should store it.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Expired-cookie twin of [`session_cookie`], for logout.
pub fn session_cookie_removal() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

/// Form extractor whose rejection wears the web envelope.
///
/// `axum::Form` answers malformed bodies with plain text; the web
/// surface promises `{success: false, message}` everywhere, so this
/// wrapper reshapes the rejection and leaves the rest to `Form`.
pub struct PageForm<T>(pub T);

impl<S, T> FromRequest<S> for PageForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<PageResponse<()>>);

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection: FormRejection| {
                (
                    StatusCode::BAD_REQUEST,
                    Json(PageResponse::failure(format!(
                        "Invalid form submission: {}",
                        rejection
                    ))),
                )
            })?;

        Ok(PageForm(value))
    }
}

/// HTML forms post empty strings for untouched optional inputs.
pub fn blank_to_none(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parses the timestamp formats HTML datetime inputs actually send.
///
/// `datetime-local` omits the zone (and often the seconds); values are
/// taken as UTC. Full RFC 3339 is accepted too.
pub fn parse_form_datetime(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn page_omits_empty_fields() {
        let body = serde_json::to_value(PageResponse::page(42)).unwrap();
        assert_eq!(body, serde_json::json!({"success": true, "data": 42}));
    }

    #[test]
    fn flash_carries_message_and_data() {
        let body =
            serde_json::to_value(PageResponse::flash("x", "Saved.").redirect_to("/hotels/"))
                .unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Saved.");
        assert_eq!(body["redirect"], "/hotels/");
        assert_eq!(body["data"], "x");
    }

    #[test]
    fn notice_has_no_data_key() {
        let body = serde_json::to_value(PageResponse::<()>::notice("Done.")).unwrap();
        assert!(body.get("data").is_none());
        assert_eq!(body["message"], "Done.");
    }

    #[test]
    fn login_required_points_at_auth() {
        let (status, Json(body)) = login_required::<()>("Please login.");
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(!body.success);
        assert_eq!(body.redirect, Some("/auth/"));
    }

    #[test]
    fn store_failures_do_not_leak_detail() {
        let (status, Json(body)) =
            web_error_response::<()>(DomainError::Database("UNIQUE constraint".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body.message.as_deref(),
            Some("Something went wrong. Please try again.")
        );
    }

    #[test]
    fn not_found_flash_names_the_entity() {
        let (status, Json(body)) = web_error_response::<()>(DomainError::NotFound {
            entity: "Hotel",
            field: "id",
            value: "9".into(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.message.as_deref(), Some("Hotel not found."));
    }

    #[test]
    fn datetime_local_values_parse_as_utc() {
        let dt = parse_form_datetime("2025-07-01T09:30").unwrap();
        assert_eq!(dt.hour(), 9);
        assert_eq!(dt.minute(), 30);

        assert!(parse_form_datetime("2025-07-01T09:30:15").is_some());
        assert!(parse_form_datetime("2025-07-01T09:30:15Z").is_some());
        assert!(parse_form_datetime("July 1st").is_none());
    }

    #[test]
    fn blank_strings_become_none() {
        assert_eq!(blank_to_none("  ".to_string()), None);
        assert_eq!(blank_to_none("Aziz".to_string()), Some("Aziz".to_string()));
    }
}
