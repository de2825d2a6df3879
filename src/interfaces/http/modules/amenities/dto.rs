//! Amenity DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::room::{Amenity, AmenityPatch, NewAmenity};
use crate::interfaces::http::common::double_option;

#[derive(Debug, Serialize, ToSchema)]
pub struct AmenityResponse {
    pub id: i32,
    pub name: String,
    /// CSS class hint for clients, e.g. "fas fa-wifi"
    pub icon_class: Option<String>,
}

impl From<Amenity> for AmenityResponse {
    fn from(amenity: Amenity) -> Self {
        Self {
            id: amenity.id,
            name: amenity.name,
            icon_class: amenity.icon_class,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAmenityRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    pub icon_class: Option<String>,
}

impl From<CreateAmenityRequest> for NewAmenity {
    fn from(request: CreateAmenityRequest) -> Self {
        Self {
            name: request.name,
            icon_class: request.icon_class,
        }
    }
}

/// Partial amenity update; `null` for `icon_class` clears it.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAmenityRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub icon_class: Option<Option<String>>,
}

impl From<UpdateAmenityRequest> for AmenityPatch {
    fn from(request: UpdateAmenityRequest) -> Self {
        Self {
            name: request.name,
            icon_class: request.icon_class,
        }
    }
}
