//! User account DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::application::ProfileUpdate;
use crate::domain::user::User;
use crate::interfaces::http::common::double_option;

/// Account as exposed over the API. The password hash never leaves
/// the server.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserResponse {
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
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            phone_number: user.phone_number,
            is_customer: user.is_customer,
            is_hotel_manager: user.is_hotel_manager,
            is_airline_manager: user.is_airline_manager,
            is_staff: user.is_staff,
            is_superuser: user.is_superuser,
            is_active: user.is_active,
            created_at: user.created_at,
            updated_at: user.updated_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Partial profile update. Absent fields stay untouched; an explicit
/// `null` for `phone_number` clears it.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: Option<String>,
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub phone_number: Option<Option<String>>,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
    pub is_customer: Option<bool>,
    pub is_hotel_manager: Option<bool>,
    pub is_airline_manager: Option<bool>,
    pub is_active: Option<bool>,
}

impl From<UpdateUserRequest> for ProfileUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            username: request.username,
            email: request.email,
            phone_number: request.phone_number,
            password: request.password,
            is_customer: request.is_customer,
            is_hotel_manager: request.is_hotel_manager,
            is_airline_manager: request.is_airline_manager,
            is_active: request.is_active,
        }
    }
}
