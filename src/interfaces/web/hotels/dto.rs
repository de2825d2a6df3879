//! Hotel page DTOs

use serde::{Deserialize, Serialize};

use crate::domain::hotel::{HotelPatch, NewHotel};
use crate::interfaces::http::common::PaginatedResponse;
use crate::interfaces::http::modules::hotels::{HotelListItem, HotelResponse};

/// Search inputs echoed back so the page can re-render its form.
#[derive(Debug, Serialize)]
pub struct HotelSearchEcho {
    pub city: Option<String>,
    pub sort: String,
}

#[derive(Debug, Serialize)]
pub struct HotelListPage {
    pub hotels: PaginatedResponse<HotelListItem>,
    pub search_params: HotelSearchEcho,
}

/// Context for the create/edit form; `hotel` is set when editing.
#[derive(Debug, Serialize)]
pub struct HotelFormPage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotel: Option<HotelResponse>,
}

/// The hotel form posts every field; edits overwrite the whole row.
#[derive(Debug, Deserialize)]
pub struct HotelForm {
    pub name: String,
    pub city: String,
    pub address: String,
    pub description: Option<String>,
    pub star_rating: i16,
    pub contact_email: String,
}

impl HotelForm {
    /// The logged-in submitter becomes the hotel's manager.
    pub fn into_new(self, manager_id: String) -> NewHotel {
        NewHotel {
            name: self.name,
            city: self.city,
            address: self.address,
            description: self.description.unwrap_or_default(),
            star_rating: self.star_rating,
            contact_email: self.contact_email,
            main_image: None,
            manager_id,
        }
    }

    /// Full-row overwrite; the image and manager stay as they are.
    pub fn into_patch(self) -> HotelPatch {
        HotelPatch {
            name: Some(self.name),
            city: Some(self.city),
            address: Some(self.address),
            description: Some(self.description.unwrap_or_default()),
            star_rating: Some(self.star_rating),
            contact_email: Some(self.contact_email),
            main_image: None,
            manager_id: None,
        }
    }
}
