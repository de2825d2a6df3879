//! User domain entity

use chrono::{DateTime, Utc};

/// User account.
///
/// Role flags describe what the account is for; `is_staff` and
/// `is_superuser` drive the admin authorization predicates.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub is_customer: bool,
    pub is_hotel_manager: bool,
    pub is_airline_manager: bool,
    pub is_staff: bool,
    pub is_superuser: bool,
    pub is_active: bool,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Elevated privileges for the admin-gated endpoints.
    pub fn is_admin(&self) -> bool {
        self.is_staff || self.is_superuser
    }
}

/// Data for creating an account. The password arrives already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub phone_number: Option<String>,
    pub is_customer: bool,
    pub is_hotel_manager: bool,
    pub is_airline_manager: bool,
}

impl NewUser {
    /// Self-service signup: a plain customer account.
    pub fn customer(
        username: String,
        email: String,
        password_hash: String,
        phone_number: Option<String>,
    ) -> Self {
        Self {
            username,
            email,
            password_hash,
            phone_number,
            is_customer: true,
            is_hotel_manager: false,
            is_airline_manager: false,
        }
    }
}

/// Partial account update. `phone_number` distinguishes "leave as is"
/// (`None`) from "clear" (`Some(None)`). A new password arrives already
/// hashed, like in [`NewUser`].
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<Option<String>>,
    pub password_hash: Option<String>,
    pub is_customer: Option<bool>,
    pub is_hotel_manager: Option<bool>,
    pub is_airline_manager: Option<bool>,
    pub is_active: Option<bool>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        let now = Utc::now();
        User {
            id: "u-1".into(),
            username: "alice".into(),
            email: "alice@example.com".into(),
            phone_number: None,
            is_customer: true,
            is_hotel_manager: false,
            is_airline_manager: false,
            is_staff: false,
            is_superuser: false,
            is_active: true,
            password_hash: "hash".into(),
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    #[test]
    fn plain_customer_is_not_admin() {
        assert!(!sample_user().is_admin());
    }

    #[test]
    fn staff_flag_grants_admin() {
        let mut u = sample_user();
        u.is_staff = true;
        assert!(u.is_admin());
    }

    #[test]
    fn superuser_flag_grants_admin() {
        let mut u = sample_user();
        u.is_superuser = true;
        assert!(u.is_admin());
    }

    #[test]
    fn signup_creates_a_customer_account() {
        let new = NewUser::customer(
            "bob".into(),
            "bob@example.com".into(),
            "hash".into(),
            Some("+99890".into()),
        );
        assert!(new.is_customer);
        assert!(!new.is_hotel_manager);
        assert!(!new.is_airline_manager);
    }
}
