//! Hotel catalog DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::hotel::{Hotel, HotelFilter, HotelPatch, HotelSort, HotelWithPrice, NewHotel};
use crate::interfaces::http::common::{double_option, MAX_PAGE_SIZE};
use crate::shared::types::{page_or_first, page_size_or};

#[derive(Debug, Serialize, ToSchema)]
pub struct HotelResponse {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub address: String,
    pub description: String,
    pub star_rating: i16,
    pub contact_email: String,
    pub main_image: Option<String>,
    pub manager_id: String,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        Self {
            id: hotel.id,
            name: hotel.name,
            city: hotel.city,
            address: hotel.address,
            description: hotel.description,
            star_rating: hotel.star_rating,
            contact_email: hotel.contact_email,
            main_image: hotel.main_image,
            manager_id: hotel.manager_id,
        }
    }
}

/// Listing row: the hotel plus its cheapest room price, which the
/// price sorts key on. `null` when the hotel has no rooms yet.
#[derive(Debug, Serialize, ToSchema)]
pub struct HotelListItem {
    #[serde(flatten)]
    pub hotel: HotelResponse,
    pub min_room_price: Option<Decimal>,
}

impl From<HotelWithPrice> for HotelListItem {
    fn from(row: HotelWithPrice) -> Self {
        Self {
            hotel: row.hotel.into(),
            min_room_price: row.min_room_price,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateHotelRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "City must be 1-100 characters"))]
    pub city: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    pub description: String,
    pub star_rating: i16,
    #[validate(email(message = "Invalid email address"))]
    pub contact_email: String,
    pub main_image: Option<String>,
    pub manager_id: String,
}

impl From<CreateHotelRequest> for NewHotel {
    fn from(request: CreateHotelRequest) -> Self {
        Self {
            name: request.name,
            city: request.city,
            address: request.address,
            description: request.description,
            star_rating: request.star_rating,
            contact_email: request.contact_email,
            main_image: request.main_image,
            manager_id: request.manager_id,
        }
    }
}

/// Partial hotel update; `null` for `main_image` clears it.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateHotelRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "City must be 1-100 characters"))]
    pub city: Option<String>,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: Option<String>,
    pub description: Option<String>,
    pub star_rating: Option<i16>,
    #[validate(email(message = "Invalid email address"))]
    pub contact_email: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub main_image: Option<Option<String>>,
    pub manager_id: Option<String>,
}

impl From<UpdateHotelRequest> for HotelPatch {
    fn from(request: UpdateHotelRequest) -> Self {
        Self {
            name: request.name,
            city: request.city,
            address: request.address,
            description: request.description,
            star_rating: request.star_rating,
            contact_email: request.contact_email,
            main_image: request.main_image,
            manager_id: request.manager_id,
        }
    }
}

/// Hotel listing query. All values parse leniently; a `city` of
/// `"all"` disables the filter.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct HotelListParams {
    /// Case-insensitive city substring, "all" for no filter
    pub city: Option<String>,
    /// default | price_asc | price_desc | rating_desc
    pub sort: Option<String>,
    /// Page number, 1-based
    pub page: Option<String>,
    /// Items per page, capped at 100
    pub count: Option<String>,
}

impl HotelListParams {
    pub fn filter(&self) -> HotelFilter {
        HotelFilter {
            city: self.city.clone(),
        }
    }

    pub fn sort(&self) -> HotelSort {
        HotelSort::from_param(self.sort.as_deref())
    }

    pub fn page(&self) -> u32 {
        page_or_first(self.page.as_deref())
    }

    pub fn limit(&self, default: u32) -> u32 {
        page_size_or(self.count.as_deref(), default, MAX_PAGE_SIZE)
    }
}
