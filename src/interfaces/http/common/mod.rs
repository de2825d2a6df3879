//! Shared REST API plumbing
//!
//! Every endpoint answers in the same envelope: `{"success": true,
//! "data": ...}` on success, `{"success": false, "error": ...}` on
//! failure, plus a field-keyed `errors` map when a request body fails
//! validation.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::types::{page_or_first, page_size_or, DomainError};

pub mod validated_json;

pub use validated_json::ValidatedJson;

/// Items per page when the request does not say otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// Hard cap on the `count` override.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Standard response envelope.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// `true` when the request succeeded
    pub success: bool,
    /// Payload, `null` on failure
    pub data: Option<T>,
    /// Error description, absent on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Field-keyed validation messages, only on validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            errors: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            errors: None,
        }
    }

    pub fn validation_error(
        message: impl Into<String>,
        errors: BTreeMap<String, Vec<String>>,
    ) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            errors: Some(errors),
        }
    }
}

/// Empty payload for operations without return data.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmptyData {}

/// Page of items plus the metadata to render a pager.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// Total matching items across all pages
    pub total: u64,
    /// Current page, 1-based
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
    /// Whether a further page exists
    pub has_next: bool,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = ((total as f64) / (limit as f64)).ceil() as u32;
        Self {
            items,
            total,
            page,
            limit,
            total_pages,
            has_next: page < total_pages,
        }
    }

    pub fn from_result(result: crate::shared::PaginatedResult<T>) -> Self {
        let has_next = result.has_next();
        Self {
            items: result.items,
            total: result.total,
            page: result.page,
            limit: result.limit,
            total_pages: result.total_pages,
            has_next,
        }
    }
}

/// Pagination query parameters shared by every listing endpoint.
///
/// Values arrive as raw strings and parse leniently: garbage or
/// out-of-range input falls back to the defaults instead of a 400,
/// because the listing pages put these straight into URLs.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ListingParams {
    /// Page number, 1-based. Defaults to 1.
    pub page: Option<String>,
    /// Items per page, capped at 100.
    pub count: Option<String>,
}

impl ListingParams {
    pub fn page(&self) -> u32 {
        page_or_first(self.page.as_deref())
    }

    pub fn limit(&self) -> u32 {
        self.limit_or(DEFAULT_PAGE_SIZE)
    }

    pub fn limit_or(&self, default: u32) -> u32 {
        page_size_or(self.count.as_deref(), default, MAX_PAGE_SIZE)
    }
}

/// Maps a domain error onto the HTTP status + envelope every handler
/// returns on failure.
pub fn domain_error_response<T>(err: DomainError) -> (StatusCode, Json<ApiResponse<T>>) {
    let status = match &err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::BAD_REQUEST,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(ApiResponse::error(err.to_string())))
}

/// Field deserializer that keeps "absent" and "null" apart for
/// `Option<Option<T>>` PATCH fields: an absent field stays `None`
/// (via `#[serde(default)]`), an explicit `null` becomes `Some(None)`.
pub fn double_option<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_has_no_error_fields() {
        let json = serde_json::to_value(ApiResponse::success(42)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], 42);
        assert!(json.get("error").is_none());
        assert!(json.get("errors").is_none());
    }

    #[test]
    fn error_envelope_nulls_the_data() {
        let json = serde_json::to_value(ApiResponse::<i32>::error("boom")).unwrap();
        assert_eq!(json["success"], false);
        assert!(json["data"].is_null());
        assert_eq!(json["error"], "boom");
    }

    #[test]
    fn validation_envelope_keys_messages_by_field() {
        let mut errors = BTreeMap::new();
        errors.insert("email".to_string(), vec!["Invalid email address".to_string()]);
        let json =
            serde_json::to_value(ApiResponse::<i32>::validation_error("Validation failed", errors))
                .unwrap();
        assert_eq!(json["errors"]["email"][0], "Invalid email address");
    }

    #[test]
    fn pager_metadata_counts_pages() {
        let page = PaginatedResponse::new(vec![1, 2, 3], 7, 1, 3);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_next);

        let last = PaginatedResponse::new(vec![7], 7, 3, 3);
        assert!(!last.has_next);
    }

    #[test]
    fn double_option_tells_null_from_absent() {
        #[derive(Deserialize)]
        struct Patch {
            #[serde(default, deserialize_with = "double_option")]
            phone_number: Option<Option<String>>,
        }

        let absent: Patch = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(absent.phone_number, None);

        let null: Patch = serde_json::from_str(r#"{"phone_number": null}"#).unwrap();
        assert_eq!(null.phone_number, Some(None));

        let set: Patch = serde_json::from_str(r#"{"phone_number": "+998901112233"}"#).unwrap();
        assert_eq!(set.phone_number, Some(Some("+998901112233".to_string())));
    }

    #[test]
    fn listing_params_parse_leniently() {
        let params = ListingParams {
            page: Some("abc".into()),
            count: Some("500".into()),
        };
        assert_eq!(params.page(), 1);
        assert_eq!(params.limit(), MAX_PAGE_SIZE);

        let params = ListingParams {
            page: Some("3".into()),
            count: None,
        };
        assert_eq!(params.page(), 3);
        assert_eq!(params.limit(), DEFAULT_PAGE_SIZE);
        assert_eq!(params.limit_or(4), 4);
    }

    #[test]
    fn statuses_follow_the_error_variant() {
        let (status, _) = domain_error_response::<()>(DomainError::NotFound {
            entity: "Hotel",
            field: "id",
            value: "9".into(),
        });
        assert_eq!(status, StatusCode::NOT_FOUND);

        let (status, _) =
            domain_error_response::<()>(DomainError::Conflict("Room is not available".into()));
        assert_eq!(status, StatusCode::CONFLICT);

        let (status, _) =
            domain_error_response::<()>(DomainError::Unauthorized("Authentication required".into()));
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = domain_error_response::<()>(DomainError::Forbidden(
            "Admin access required".into(),
        ));
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = domain_error_response::<()>(DomainError::Database("oops".into()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
