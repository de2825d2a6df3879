//! Tour catalog DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::tour::{NewTour, Tour, TourFilter, TourPatch, TourSort};
use crate::interfaces::http::common::{double_option, MAX_PAGE_SIZE};
use crate::shared::types::{page_or_first, page_size_or};

#[derive(Debug, Serialize, ToSchema)]
pub struct TourResponse {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: Decimal,
    pub max_participants: i32,
    pub available_slots: i32,
    pub guide_name: Option<String>,
    pub image: Option<String>,
}

impl From<Tour> for TourResponse {
    fn from(tour: Tour) -> Self {
        Self {
            id: tour.id,
            name: tour.name,
            description: tour.description,
            destination: tour.destination,
            start_date: tour.start_date,
            end_date: tour.end_date,
            price: tour.price,
            max_participants: tour.max_participants,
            available_slots: tour.available_slots,
            guide_name: tour.guide_name,
            image: tour.image,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTourRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    pub description: String,
    #[validate(length(min = 1, max = 100, message = "Destination must be 1-100 characters"))]
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: Decimal,
    pub max_participants: i32,
    /// Defaults to `max_participants`
    pub available_slots: Option<i32>,
    pub guide_name: Option<String>,
    pub image: Option<String>,
}

impl From<CreateTourRequest> for NewTour {
    fn from(request: CreateTourRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            destination: request.destination,
            start_date: request.start_date,
            end_date: request.end_date,
            price: request.price,
            max_participants: request.max_participants,
            available_slots: request.available_slots.unwrap_or(request.max_participants),
            guide_name: request.guide_name,
            image: request.image,
        }
    }
}

/// Partial tour update; `null` clears `guide_name` or `image`.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTourRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Destination must be 1-100 characters"))]
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub price: Option<Decimal>,
    pub max_participants: Option<i32>,
    pub available_slots: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub guide_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub image: Option<Option<String>>,
}

impl From<UpdateTourRequest> for TourPatch {
    fn from(request: UpdateTourRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            destination: request.destination,
            start_date: request.start_date,
            end_date: request.end_date,
            price: request.price,
            max_participants: request.max_participants,
            available_slots: request.available_slots,
            guide_name: request.guide_name,
            image: request.image,
        }
    }
}

/// Tour search query.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct TourListParams {
    /// Case-insensitive destination substring
    pub destination: Option<String>,
    /// default | price_asc | price_desc | rating_desc
    pub sort: Option<String>,
    /// Page number, 1-based
    pub page: Option<String>,
    /// Items per page, capped at 100
    pub count: Option<String>,
}

impl TourListParams {
    pub fn filter(&self) -> TourFilter {
        TourFilter {
            destination: self.destination.clone(),
        }
    }

    pub fn sort(&self) -> TourSort {
        TourSort::from_param(self.sort.as_deref())
    }

    pub fn page(&self) -> u32 {
        page_or_first(self.page.as_deref())
    }

    pub fn limit(&self, default: u32) -> u32 {
        page_size_or(self.count.as_deref(), default, MAX_PAGE_SIZE)
    }
}
