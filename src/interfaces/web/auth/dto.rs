//! Web auth page DTOs

use serde::{Deserialize, Serialize};

/// `?action=signup` flips the page into registration mode.
#[derive(Debug, Default, Deserialize)]
pub struct AuthQuery {
    pub action: Option<String>,
}

impl AuthQuery {
    pub fn is_signup(&self) -> bool {
        self.action.as_deref() == Some("signup")
    }
}

/// One form serves both modes; login ignores the extra fields.
#[derive(Debug, Default, Deserialize)]
pub struct AuthForm {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AuthStatePage {
    pub authenticated: bool,
    pub is_signup: bool,
}
