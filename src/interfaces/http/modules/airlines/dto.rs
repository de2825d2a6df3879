//! Airline DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::airline::{Airline, AirlinePatch, NewAirline};
use crate::interfaces::http::common::double_option;

#[derive(Debug, Serialize, ToSchema)]
pub struct AirlineResponse {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub contact_number: Option<String>,
    pub established_year: Option<i32>,
    pub fleet_size: Option<i32>,
}

impl From<Airline> for AirlineResponse {
    fn from(airline: Airline) -> Self {
        Self {
            id: airline.id,
            name: airline.name,
            country: airline.country,
            contact_number: airline.contact_number,
            established_year: airline.established_year,
            fleet_size: airline.fleet_size,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAirlineRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "Country must be 1-100 characters"))]
    pub country: String,
    pub contact_number: Option<String>,
    pub established_year: Option<i32>,
    pub fleet_size: Option<i32>,
}

impl From<CreateAirlineRequest> for NewAirline {
    fn from(request: CreateAirlineRequest) -> Self {
        Self {
            name: request.name,
            country: request.country,
            contact_number: request.contact_number,
            established_year: request.established_year,
            fleet_size: request.fleet_size,
        }
    }
}

/// Partial airline update; `null` clears the nullable fields.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateAirlineRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Country must be 1-100 characters"))]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub contact_number: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub established_year: Option<Option<i32>>,
    #[serde(default, deserialize_with = "double_option")]
    pub fleet_size: Option<Option<i32>>,
}

impl From<UpdateAirlineRequest> for AirlinePatch {
    fn from(request: UpdateAirlineRequest) -> Self {
        Self {
            name: request.name,
            country: request.country,
            contact_number: request.contact_number,
            established_year: request.established_year,
            fleet_size: request.fleet_size,
        }
    }
}
