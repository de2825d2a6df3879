//! Identity service, application-layer orchestration
//!
//! All account business logic lives here: credential checks, signup
//! validation, JWT issuance for the REST surface and the DB-backed
//! session lifecycle for the web surface. HTTP handlers stay thin
//! wrappers that delegate to this service.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use crate::domain::repositories::RepositoryProvider;
use crate::domain::session::NewSession;
use crate::domain::user::{NewUser, User, UserPatch};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::crypto::jwt::{create_token_pair, JwtConfig, TokenPair};
use crate::infrastructure::crypto::password::{hash_password, verify_password};
use crate::infrastructure::crypto::session_token::{generate_session_token, hash_session_token};
use crate::shared::PaginatedResult;

/// Incoming profile change.
///
/// `phone_number` distinguishes "leave as is" (`None`) from "clear"
/// (`Some(None)`), mirroring [`UserPatch`]. The password arrives in
/// plain text and gets hashed here.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub password: Option<String>,
    pub is_customer: Option<bool>,
    pub is_hotel_manager: Option<bool>,
    pub is_airline_manager: Option<bool>,
    pub is_active: Option<bool>,
}

/// Identity service, shared by the REST and web surfaces.
///
/// Login and signup are surface-agnostic; the caller then picks the
/// credential to hand out ([`Self::issue_tokens`] for bearer clients,
/// [`Self::open_session`] for cookie clients).
pub struct IdentityService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
    session_ttl: Duration,
}

impl IdentityService {
    pub fn new(
        repos: Arc<dyn RepositoryProvider>,
        jwt_config: JwtConfig,
        session_ttl_days: i64,
    ) -> Self {
        Self {
            repos,
            jwt_config,
            session_ttl: Duration::days(session_ttl_days),
        }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by username or email plus password.
    pub async fn login(&self, username_or_email: &str, password: &str) -> DomainResult<User> {
        // Try username first, then email
        let user = match self.repos.users().find_by_username(username_or_email).await? {
            Some(user) => Some(user),
            None => self.repos.users().find_by_email(username_or_email).await?,
        };

        let Some(user) = user else {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        if !user.is_active {
            return Err(DomainError::Unauthorized("Account is disabled".into()));
        }

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        self.repos.users().touch_last_login(&user.id).await?;

        info!(user_id = %user.id, username = %user.username, "User logged in");
        Ok(user)
    }

    /// Register a customer account.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
        phone_number: Option<String>,
    ) -> DomainResult<User> {
        validate_username(username)?;
        validate_password(password)?;
        validate_email(email)?;

        if self.repos.users().find_by_username(username).await?.is_some() {
            return Err(DomainError::Conflict("Username already exists".into()));
        }
        if self.repos.users().find_by_email(email).await?.is_some() {
            return Err(DomainError::Conflict("Email already exists".into()));
        }

        let password_hash = hash_password(password)
            .map_err(|e| DomainError::Validation(format!("Failed to hash password: {}", e)))?;

        let user = self
            .repos
            .users()
            .create(NewUser::customer(
                username.to_string(),
                email.to_string(),
                password_hash,
                phone_number,
            ))
            .await?;

        info!(user_id = %user.id, username = %user.username, "New user signed up");
        Ok(user)
    }

    /// Refresh/access pair for the REST surface.
    pub fn issue_tokens(&self, user: &User) -> DomainResult<TokenPair> {
        create_token_pair(
            &user.id,
            &user.username,
            user.is_staff,
            user.is_superuser,
            &self.jwt_config,
        )
        .map_err(|e| DomainError::Validation(format!("Failed to create token: {}", e)))
    }

    // ── Sessions (web surface) ──────────────────────────────────

    /// Opens a session for the user and returns the raw cookie token.
    ///
    /// Only the token's hash is stored. Expired rows are swept here so
    /// the table does not grow without a background job.
    pub async fn open_session(&self, user: &User) -> DomainResult<String> {
        self.repos.sessions().delete_expired(Utc::now()).await?;

        let token = generate_session_token();
        self.repos
            .sessions()
            .create(NewSession {
                token_hash: hash_session_token(&token),
                user_id: user.id.clone(),
                expires_at: Utc::now() + self.session_ttl,
            })
            .await?;

        Ok(token)
    }

    /// Resolves a cookie token to its user.
    ///
    /// Expired or orphaned sessions are deleted on sight and resolve to
    /// `None`, as does a disabled account.
    pub async fn resolve_session(&self, token: &str) -> DomainResult<Option<User>> {
        let token_hash = hash_session_token(token);

        let Some(session) = self.repos.sessions().find_by_token_hash(&token_hash).await? else {
            return Ok(None);
        };

        if session.is_expired(Utc::now()) {
            self.repos.sessions().delete_by_token_hash(&token_hash).await?;
            return Ok(None);
        }

        let Some(user) = self.repos.users().find_by_id(&session.user_id).await? else {
            self.repos.sessions().delete_by_token_hash(&token_hash).await?;
            return Ok(None);
        };

        if !user.is_active {
            return Ok(None);
        }

        Ok(Some(user))
    }

    /// Logout. Returns whether a session row existed.
    pub async fn close_session(&self, token: &str) -> DomainResult<bool> {
        self.repos
            .sessions()
            .delete_by_token_hash(&hash_session_token(token))
            .await
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn get_user(&self, id: &str) -> DomainResult<Option<User>> {
        self.repos.users().find_by_id(id).await
    }

    pub async fn list_users(&self, page: u32, limit: u32) -> DomainResult<PaginatedResult<User>> {
        self.repos.users().list(page, limit).await
    }

    // ── Commands (mutations) ────────────────────────────────────

    /// Partial profile update with the same field rules as signup.
    ///
    /// Returns `None` when the user does not exist.
    pub async fn update_profile(
        &self,
        id: &str,
        update: ProfileUpdate,
    ) -> DomainResult<Option<User>> {
        if let Some(username) = &update.username {
            validate_username(username)?;
            if let Some(other) = self.repos.users().find_by_username(username).await? {
                if other.id != id {
                    return Err(DomainError::Conflict("Username already exists".into()));
                }
            }
        }
        if let Some(email) = &update.email {
            validate_email(email)?;
            if let Some(other) = self.repos.users().find_by_email(email).await? {
                if other.id != id {
                    return Err(DomainError::Conflict("Email already exists".into()));
                }
            }
        }

        let password_hash = match &update.password {
            Some(password) => {
                validate_password(password)?;
                let hash = hash_password(password).map_err(|e| {
                    DomainError::Validation(format!("Failed to hash password: {}", e))
                })?;
                Some(hash)
            }
            None => None,
        };

        let patch = UserPatch {
            username: update.username,
            email: update.email,
            phone_number: update.phone_number,
            password_hash,
            is_customer: update.is_customer,
            is_hotel_manager: update.is_hotel_manager,
            is_airline_manager: update.is_airline_manager,
            is_active: update.is_active,
        };

        let updated = self.repos.users().update(id, patch).await?;
        if updated.is_some() {
            info!(user_id = id, "Profile updated");
        }
        Ok(updated)
    }

    pub async fn delete_user(&self, id: &str) -> DomainResult<bool> {
        let deleted = self.repos.users().delete(id).await?;
        if deleted {
            info!(user_id = id, "User deleted");
        }
        Ok(deleted)
    }
}

// ── Field rules ─────────────────────────────────────────────────

fn validate_username(username: &str) -> DomainResult<()> {
    if username.len() < 3 || username.len() > 50 {
        return Err(DomainError::Validation(
            "Username must be 3-50 characters".into(),
        ));
    }
    Ok(())
}

fn validate_password(password: &str) -> DomainResult<()> {
    if password.len() < 8 {
        return Err(DomainError::Validation(
            "Password must be at least 8 characters".into(),
        ));
    }
    Ok(())
}

fn validate_email(email: &str) -> DomainResult<()> {
    if !email.contains('@') {
        return Err(DomainError::Validation("Invalid email address".into()));
    }
    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::jwt::verify_access_token;
    use crate::infrastructure::database::repositories::test_support::setup_db;
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;

    async fn service() -> IdentityService {
        service_with_ttl(14).await
    }

    async fn service_with_ttl(ttl_days: i64) -> IdentityService {
        let db = setup_db().await;
        let repos = Arc::new(SeaOrmRepositoryProvider::new(db));
        IdentityService::new(repos, JwtConfig::default(), ttl_days)
    }

    #[tokio::test]
    async fn signup_rejects_bad_fields() {
        let svc = service().await;

        let err = svc.signup("ab", "a@b.com", "password1", None).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = svc.signup("alice", "a@b.com", "short", None).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));

        let err = svc
            .signup("alice", "not-an-email", "password1", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn signup_rejects_taken_username_and_email() {
        let svc = service().await;
        svc.signup("alice", "alice@example.com", "password1", None)
            .await
            .unwrap();

        let err = svc
            .signup("alice", "other@example.com", "password1", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        let err = svc
            .signup("bob", "alice@example.com", "password1", None)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[tokio::test]
    async fn login_accepts_username_or_email() {
        let svc = service().await;
        svc.signup("alice", "alice@example.com", "password1", None)
            .await
            .unwrap();

        let by_name = svc.login("alice", "password1").await.unwrap();
        assert_eq!(by_name.username, "alice");

        let by_email = svc.login("alice@example.com", "password1").await.unwrap();
        assert_eq!(by_email.id, by_name.id);

        let err = svc.login("alice", "wrong-password").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));

        let err = svc.login("nobody", "password1").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn login_records_the_timestamp() {
        let svc = service().await;
        let created = svc
            .signup("alice", "alice@example.com", "password1", None)
            .await
            .unwrap();
        assert!(created.last_login_at.is_none());

        svc.login("alice", "password1").await.unwrap();
        let after = svc.get_user(&created.id).await.unwrap().unwrap();
        assert!(after.last_login_at.is_some());
    }

    #[tokio::test]
    async fn disabled_account_cannot_login() {
        let svc = service().await;
        let user = svc
            .signup("alice", "alice@example.com", "password1", None)
            .await
            .unwrap();

        svc.update_profile(
            &user.id,
            ProfileUpdate {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

        let err = svc.login("alice", "password1").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn tokens_verify_and_carry_the_user() {
        let svc = service().await;
        let user = svc
            .signup("alice", "alice@example.com", "password1", None)
            .await
            .unwrap();

        let pair = svc.issue_tokens(&user).unwrap();
        let claims = verify_access_token(&pair.access, &JwtConfig::default()).unwrap();
        assert_eq!(claims.sub, user.id);
        assert!(!claims.is_admin());
    }

    #[tokio::test]
    async fn session_round_trip() {
        let svc = service().await;
        let user = svc
            .signup("alice", "alice@example.com", "password1", None)
            .await
            .unwrap();

        let token = svc.open_session(&user).await.unwrap();
        let resolved = svc.resolve_session(&token).await.unwrap().unwrap();
        assert_eq!(resolved.id, user.id);

        assert!(svc.close_session(&token).await.unwrap());
        assert!(svc.resolve_session(&token).await.unwrap().is_none());
        assert!(!svc.close_session(&token).await.unwrap());
    }

    #[tokio::test]
    async fn expired_session_resolves_to_none() {
        // Zero TTL expires the session at its own creation instant.
        let svc = service_with_ttl(0).await;
        let user = svc
            .signup("alice", "alice@example.com", "password1", None)
            .await
            .unwrap();

        let token = svc.open_session(&user).await.unwrap();
        assert!(svc.resolve_session(&token).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_profile_rejects_taken_username_but_allows_own() {
        let svc = service().await;
        let alice = svc
            .signup("alice", "alice@example.com", "password1", None)
            .await
            .unwrap();
        svc.signup("bob", "bob@example.com", "password1", None)
            .await
            .unwrap();

        let err = svc
            .update_profile(
                &alice.id,
                ProfileUpdate {
                    username: Some("bob".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));

        // Re-submitting the current username is not a conflict.
        let updated = svc
            .update_profile(
                &alice.id,
                ProfileUpdate {
                    username: Some("alice".into()),
                    phone_number: Some(Some("+998901112233".into())),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.phone_number.as_deref(), Some("+998901112233"));
    }

    #[tokio::test]
    async fn update_profile_changes_password() {
        let svc = service().await;
        let user = svc
            .signup("alice", "alice@example.com", "password1", None)
            .await
            .unwrap();

        svc.update_profile(
            &user.id,
            ProfileUpdate {
                password: Some("password2".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap()
        .unwrap();

        assert!(svc.login("alice", "password2").await.is_ok());
        assert!(svc.login("alice", "password1").await.is_err());
    }

    #[tokio::test]
    async fn update_of_missing_user_is_none() {
        let svc = service().await;
        let result = svc
            .update_profile("no-such-id", ProfileUpdate::default())
            .await
            .unwrap();
        assert!(result.is_none());
    }
}
