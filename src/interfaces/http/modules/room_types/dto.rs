//! Room type DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::room::{NewRoomType, RoomType, RoomTypePatch};

#[derive(Debug, Serialize, ToSchema)]
pub struct RoomTypeResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<RoomType> for RoomTypeResponse {
    fn from(room_type: RoomType) -> Self {
        Self {
            id: room_type.id,
            name: room_type.name,
            description: room_type.description,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomTypeRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    pub description: String,
}

impl From<CreateRoomTypeRequest> for NewRoomType {
    fn from(request: CreateRoomTypeRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomTypeRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
}

impl From<UpdateRoomTypeRequest> for RoomTypePatch {
    fn from(request: UpdateRoomTypeRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
        }
    }
}
