//! Request principal and capability checks
//!
//! Both authentication schemes (bearer token and session cookie) resolve
//! to the same [`Principal`], so authorization rules live here once and
//! the HTTP layer only decides *where* to apply them.

use crate::shared::types::errors::DomainError;

/// How the principal was resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthScheme {
    /// Bearer access token (REST API)
    Token,
    /// Session cookie (web surface)
    Session,
}

/// The authenticated caller attached to a request.
#[derive(Clone, Debug)]
pub struct Principal {
    pub user_id: String,
    pub username: String,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub scheme: AuthScheme,
}

impl Principal {
    pub fn is_admin(&self) -> bool {
        self.is_staff || self.is_superuser
    }
}

/// Admin-only capability. Anonymous callers get `Unauthorized`,
/// authenticated non-admins get `Forbidden`.
pub fn require_admin<'a>(principal: Option<&'a Principal>) -> Result<&'a Principal, DomainError> {
    match principal {
        None => Err(DomainError::Unauthorized(
            "Authentication required".to_string(),
        )),
        Some(p) if p.is_admin() => Ok(p),
        Some(_) => Err(DomainError::Forbidden("Admin access required".to_string())),
    }
}

/// Reads are open to everyone; writes require an admin.
/// `safe_method` is true for GET/HEAD/OPTIONS.
pub fn require_admin_or_read_only(
    principal: Option<&Principal>,
    safe_method: bool,
) -> Result<(), DomainError> {
    if safe_method {
        return Ok(());
    }
    require_admin(principal).map(|_| ())
}

/// Object-level capability: the owner of the resource or an admin.
pub fn require_owner_or_admin<'a>(
    principal: Option<&'a Principal>,
    owner_id: &str,
) -> Result<&'a Principal, DomainError> {
    match principal {
        None => Err(DomainError::Unauthorized(
            "Authentication required".to_string(),
        )),
        Some(p) if p.is_admin() || p.user_id == owner_id => Ok(p),
        Some(_) => Err(DomainError::Forbidden(
            "You do not have permission to access this resource".to_string(),
        )),
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(id: &str) -> Principal {
        Principal {
            user_id: id.to_string(),
            username: "alice".to_string(),
            is_staff: false,
            is_superuser: false,
            scheme: AuthScheme::Token,
        }
    }

    fn staff() -> Principal {
        Principal {
            user_id: "staff-1".to_string(),
            username: "admin".to_string(),
            is_staff: true,
            is_superuser: false,
            scheme: AuthScheme::Session,
        }
    }

    fn superuser() -> Principal {
        Principal {
            is_staff: false,
            is_superuser: true,
            ..staff()
        }
    }

    #[test]
    fn staff_and_superuser_are_admin() {
        assert!(staff().is_admin());
        assert!(superuser().is_admin());
        assert!(!customer("u1").is_admin());
    }

    #[test]
    fn require_admin_rejects_anonymous_with_unauthorized() {
        let err = require_admin(None).unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }

    #[test]
    fn require_admin_rejects_customer_with_forbidden() {
        let p = customer("u1");
        let err = require_admin(Some(&p)).unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[test]
    fn require_admin_accepts_staff() {
        let p = staff();
        assert!(require_admin(Some(&p)).is_ok());
    }

    #[test]
    fn read_only_is_open_to_everyone() {
        assert!(require_admin_or_read_only(None, true).is_ok());
        let p = customer("u1");
        assert!(require_admin_or_read_only(Some(&p), true).is_ok());
    }

    #[test]
    fn writes_need_admin() {
        assert!(matches!(
            require_admin_or_read_only(None, false),
            Err(DomainError::Unauthorized(_))
        ));
        let p = customer("u1");
        assert!(matches!(
            require_admin_or_read_only(Some(&p), false),
            Err(DomainError::Forbidden(_))
        ));
        let admin = staff();
        assert!(require_admin_or_read_only(Some(&admin), false).is_ok());
    }

    #[test]
    fn owner_can_access_own_resource() {
        let p = customer("u1");
        assert!(require_owner_or_admin(Some(&p), "u1").is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        let p = customer("u1");
        let err = require_owner_or_admin(Some(&p), "u2").unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)));
    }

    #[test]
    fn admin_can_access_any_resource() {
        let p = staff();
        assert!(require_owner_or_admin(Some(&p), "someone-else").is_ok());
    }

    #[test]
    fn anonymous_owner_check_is_unauthorized() {
        let err = require_owner_or_admin(None, "u1").unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(_)));
    }
}
