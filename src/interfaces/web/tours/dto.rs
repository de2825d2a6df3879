//! Tour page DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::tour::{NewTour, TourPatch};
use crate::interfaces::http::common::PaginatedResponse;
use crate::interfaces::http::modules::tours::TourResponse;
use crate::interfaces::web::common::blank_to_none;

#[derive(Debug, Serialize)]
pub struct TourSearchEcho {
    pub destination: Option<String>,
    pub sort: String,
}

#[derive(Debug, Serialize)]
pub struct TourListPage {
    pub tours: PaginatedResponse<TourResponse>,
    pub search_params: TourSearchEcho,
}

#[derive(Debug, Serialize)]
pub struct TourFormPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tour: Option<TourResponse>,
}

/// The tour form. Dates come from `date` inputs; the image is not
/// part of the form body and stays untouched on edit.
#[derive(Debug, Deserialize)]
pub struct TourForm {
    pub name: String,
    pub description: Option<String>,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub price: Decimal,
    pub max_participants: i32,
    pub available_slots: i32,
    pub guide_name: Option<String>,
}

impl From<TourForm> for NewTour {
    fn from(form: TourForm) -> Self {
        Self {
            name: form.name,
            description: form.description.unwrap_or_default(),
            destination: form.destination,
            start_date: form.start_date,
            end_date: form.end_date,
            price: form.price,
            max_participants: form.max_participants,
            available_slots: form.available_slots,
            guide_name: form.guide_name.and_then(blank_to_none),
            image: None,
        }
    }
}

impl From<TourForm> for TourPatch {
    /// Full-row overwrite; a blank guide clears the field, the image
    /// stays as it is.
    fn from(form: TourForm) -> Self {
        Self {
            name: Some(form.name),
            description: Some(form.description.unwrap_or_default()),
            destination: Some(form.destination),
            start_date: Some(form.start_date),
            end_date: Some(form.end_date),
            price: Some(form.price),
            max_participants: Some(form.max_participants),
            available_slots: Some(form.available_slots),
            guide_name: Some(form.guide_name.and_then(blank_to_none)),
            image: None,
        }
    }
}
