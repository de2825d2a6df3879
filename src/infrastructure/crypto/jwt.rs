//! JWT token handling
//!
//! The API issues a refresh/access pair at signup and login. Only
//! access tokens are accepted by the request middleware; the `token_use`
//! claim keeps the two from being interchangeable.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens
    pub secret: String,
    /// Access token lifetime in minutes
    pub access_expiration_minutes: i64,
    /// Refresh token lifetime in days
    pub refresh_expiration_days: i64,
    /// Issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "super-secret-key-change-in-production".to_string()),
            access_expiration_minutes: std::env::var("JWT_ACCESS_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            refresh_expiration_days: std::env::var("JWT_REFRESH_DAYS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(7),
            issuer: "tripnest".to_string(),
        }
    }
}

impl JwtConfig {
    /// Create JwtConfig from environment variables
    pub fn from_env() -> Self {
        Self::default()
    }
}

/// JWT TokenClaims
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    /// Username
    pub username: String,
    /// Token use: "access" or "refresh"
    pub token_use: String,
    /// Staff flag at issue time
    pub is_staff: bool,
    /// Superuser flag at issue time
    pub is_superuser: bool,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

impl TokenClaims {
    fn new(
        user_id: &str,
        username: &str,
        is_staff: bool,
        is_superuser: bool,
        token_use: &str,
        lifetime: Duration,
        config: &JwtConfig,
    ) -> Self {
        let now = Utc::now();
        let exp = now + lifetime;

        Self {
            sub: user_id.to_string(),
            username: username.to_string(),
            token_use: token_use.to_string(),
            is_staff,
            is_superuser,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: config.issuer.clone(),
        }
    }

    /// Check if the token is expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Check if the bearer has admin privileges
    pub fn is_admin(&self) -> bool {
        self.is_staff || self.is_superuser
    }
}

/// Refresh/access token pair returned by signup and login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub refresh: String,
    pub access: String,
}

/// Create a refresh/access token pair for a user
pub fn create_token_pair(
    user_id: &str,
    username: &str,
    is_staff: bool,
    is_superuser: bool,
    config: &JwtConfig,
) -> Result<TokenPair, jsonwebtoken::errors::Error> {
    let key = EncodingKey::from_secret(config.secret.as_bytes());

    let access_claims = TokenClaims::new(
        user_id,
        username,
        is_staff,
        is_superuser,
        "access",
        Duration::minutes(config.access_expiration_minutes),
        config,
    );
    let refresh_claims = TokenClaims::new(
        user_id,
        username,
        is_staff,
        is_superuser,
        "refresh",
        Duration::days(config.refresh_expiration_days),
        config,
    );

    Ok(TokenPair {
        refresh: encode(&Header::default(), &refresh_claims, &key)?,
        access: encode(&Header::default(), &access_claims, &key)?,
    })
}

/// Verify and decode an access token
pub fn verify_access_token(
    token: &str,
    config: &JwtConfig,
) -> Result<TokenClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::default();
    validation.set_issuer(&[&config.issuer]);

    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    if token_data.claims.token_use != "access" {
        return Err(jsonwebtoken::errors::ErrorKind::InvalidToken.into());
    }

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            access_expiration_minutes: 60,
            refresh_expiration_days: 7,
            issuer: "tripnest".to_string(),
        }
    }

    #[test]
    fn test_create_and_verify_token_pair() {
        let config = test_config();
        let pair = create_token_pair("user-1", "alice", false, false, &config).unwrap();

        let claims = verify_access_token(&pair.access, &config).unwrap();
        assert_eq!(claims.sub, "user-1");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.token_use, "access");
        assert!(!claims.is_admin());
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_refresh_token_is_not_an_access_token() {
        let config = test_config();
        let pair = create_token_pair("user-1", "alice", true, false, &config).unwrap();
        assert!(verify_access_token(&pair.refresh, &config).is_err());
    }

    #[test]
    fn test_invalid_token() {
        let config = test_config();
        assert!(verify_access_token("not.a.token", &config).is_err());

        let other = JwtConfig {
            secret: "different-secret".to_string(),
            ..test_config()
        };
        let pair = create_token_pair("user-1", "alice", false, true, &other).unwrap();
        assert!(verify_access_token(&pair.access, &config).is_err());
    }

    #[test]
    fn test_admin_claims_carry_through() {
        let config = test_config();
        let pair = create_token_pair("user-2", "root", true, true, &config).unwrap();
        let claims = verify_access_token(&pair.access, &config).unwrap();
        assert!(claims.is_admin());
    }
}
