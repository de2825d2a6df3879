//! Authentication middleware for Axum
//!
//! Both schemes resolve to the same [`Principal`]: bearer access tokens
//! on the REST API, the `sessionid` cookie on the web surface. Routes
//! whose permissions differ per method use the lenient variants and
//! enforce inside the handler.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;

use crate::application::IdentityService;
use crate::domain::access::{AuthScheme, Principal};
use crate::domain::user::User;
use crate::infrastructure::crypto::jwt::{verify_access_token, JwtConfig, TokenClaims};

/// Cookie that carries the web session token.
pub const SESSION_COOKIE: &str = "sessionid";

/// State for the bearer-token middleware.
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// State for the session-cookie middleware.
#[derive(Clone)]
pub struct SessionAuthState {
    pub identity: Arc<IdentityService>,
}

fn principal_from_claims(claims: TokenClaims) -> Principal {
    Principal {
        user_id: claims.sub,
        username: claims.username,
        is_staff: claims.is_staff,
        is_superuser: claims.is_superuser,
        scheme: AuthScheme::Token,
    }
}

fn principal_from_user(user: &User) -> Principal {
    Principal {
        user_id: user.id.clone(),
        username: user.username.clone(),
        is_staff: user.is_staff,
        is_superuser: user.is_superuser,
        scheme: AuthScheme::Session,
    }
}

fn bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}

/// Strict bearer middleware. No valid access token, no entry.
pub async fn require_auth(
    State(state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(&request) else {
        return unauthorized_response("Authentication required");
    };

    match verify_access_token(token, &state.jwt_config) {
        Ok(claims) if claims.is_expired() => unauthorized_response("Token has expired"),
        Ok(claims) => {
            request.extensions_mut().insert(principal_from_claims(claims));
            next.run(request).await
        }
        Err(_) => unauthorized_response("Invalid authentication token"),
    }
}

/// Lenient bearer middleware for routes that are partly public.
///
/// Attaches the principal when a valid token is present and lets the
/// request through either way; the handler applies the capability check.
pub async fn attach_principal(
    State(state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(&request) {
        if let Ok(claims) = verify_access_token(token, &state.jwt_config) {
            if !claims.is_expired() {
                request.extensions_mut().insert(principal_from_claims(claims));
            }
        }
    }

    next.run(request).await
}

/// Session-cookie middleware for the web surface.
///
/// Resolves the `sessionid` cookie to its user and attaches both the
/// [`Principal`] and the full [`User`]. Anonymous requests pass through;
/// each page decides whether it needs a login. A store failure during
/// resolution also passes through anonymous rather than failing the
/// whole request.
pub async fn attach_session_principal(
    State(state): State<SessionAuthState>,
    jar: CookieJar,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        match state.identity.resolve_session(cookie.value()).await {
            Ok(Some(user)) => {
                request.extensions_mut().insert(principal_from_user(&user));
                request.extensions_mut().insert(user);
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!("Session resolution failed: {}", e);
            }
        }
    }

    next.run(request).await
}

fn unauthorized_response(message: &str) -> Response {
    let body = Json(json!({
        "success": false,
        "error": message
    }));

    (StatusCode::UNAUTHORIZED, body).into_response()
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use axum::{Extension, Router};
    use tower::Service;

    use crate::infrastructure::crypto::jwt::create_token_pair;

    fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_expiration_minutes: 60,
            refresh_expiration_days: 7,
            issuer: "tripnest".to_string(),
        }
    }

    async fn whoami(principal: Option<Extension<Principal>>) -> String {
        match principal {
            Some(Extension(p)) => p.username,
            None => "anonymous".to_string(),
        }
    }

    fn protected_app() -> Router {
        let state = AuthState {
            jwt_config: test_jwt_config(),
        };
        Router::new()
            .route("/whoami", get(whoami))
            .layer(from_fn_with_state(state, require_auth))
    }

    fn lenient_app() -> Router {
        let state = AuthState {
            jwt_config: test_jwt_config(),
        };
        Router::new()
            .route("/whoami", get(whoami))
            .layer(from_fn_with_state(state, attach_principal))
    }

    fn get_request(token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method("GET").uri("/whoami");
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {}", token));
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn send(app: Router, req: Request<Body>) -> axum::http::Response<Body> {
        let mut svc = app.into_service();
        svc.call(req).await.unwrap()
    }

    #[tokio::test]
    async fn missing_token_is_rejected() {
        let resp = send(protected_app(), get_request(None)).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let resp = send(protected_app(), get_request(Some("not-a-jwt"))).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn refresh_token_is_not_accepted_as_access() {
        let pair = create_token_pair("u1", "alice", false, false, &test_jwt_config()).unwrap();
        let resp = send(protected_app(), get_request(Some(&pair.refresh))).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn valid_token_attaches_the_principal() {
        let pair = create_token_pair("u1", "alice", false, false, &test_jwt_config()).unwrap();
        let resp = send(protected_app(), get_request(Some(&pair.access))).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"alice");
    }

    #[tokio::test]
    async fn lenient_middleware_passes_anonymous_through() {
        let resp = send(lenient_app(), get_request(None)).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"anonymous");
    }

    #[tokio::test]
    async fn lenient_middleware_still_resolves_valid_tokens() {
        let pair = create_token_pair("u1", "alice", true, false, &test_jwt_config()).unwrap();
        let resp = send(lenient_app(), get_request(Some(&pair.access))).await;

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"alice");
    }
}
