//! Hotel page handlers
//!
//! The listing is public; create, edit and delete only ask for a
//! session, no role beyond that. The submitter of a new hotel becomes
//! its manager.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{HotelForm, HotelFormPage, HotelListPage, HotelSearchEcho};
use crate::domain::access::Principal;
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::PaginatedResponse;
use crate::interfaces::http::modules::hotels::{HotelListItem, HotelListParams, HotelResponse};
use crate::interfaces::web::common::{
    login_required, web_error_response, PageForm, PageResponse,
};

/// Hotels per page on the web listing.
const HOTEL_PAGE_SIZE: u32 = 3;

/// Hotel page handler state
#[derive(Clone)]
pub struct HotelPagesState {
    pub repos: Arc<dyn RepositoryProvider>,
}

/// GET /hotels/
pub async fn hotel_list_page(
    State(state): State<HotelPagesState>,
    Query(params): Query<HotelListParams>,
) -> Result<Json<PageResponse<HotelListPage>>, (StatusCode, Json<PageResponse<HotelListPage>>)> {
    let page = state
        .repos
        .hotels()
        .list(&params.filter(), params.sort(), params.page(), HOTEL_PAGE_SIZE)
        .await
        .map_err(web_error_response)?;

    Ok(Json(PageResponse::page(HotelListPage {
        hotels: PaginatedResponse::from_result(page.map(HotelListItem::from)),
        search_params: HotelSearchEcho {
            city: params.city.clone(),
            sort: params.sort.clone().unwrap_or_else(|| "default".to_string()),
        },
    })))
}

/// GET /hotels/create/
pub async fn hotel_form_page() -> Json<PageResponse<HotelFormPage>> {
    Json(PageResponse::page(HotelFormPage { hotel: None }))
}

/// GET /hotels/{id}/edit/
pub async fn hotel_edit_page(
    State(state): State<HotelPagesState>,
    Path(id): Path<i32>,
) -> Result<Json<PageResponse<HotelFormPage>>, (StatusCode, Json<PageResponse<HotelFormPage>>)> {
    let hotel = state
        .repos
        .hotels()
        .find_by_id(id)
        .await
        .map_err(web_error_response)?
        .ok_or_else(|| web_error_response(hotel_not_found(id)))?;

    Ok(Json(PageResponse::page(HotelFormPage {
        hotel: Some(hotel.into()),
    })))
}

/// POST /hotels/create/
pub async fn create_hotel(
    State(state): State<HotelPagesState>,
    principal: Option<Extension<Principal>>,
    PageForm(form): PageForm<HotelForm>,
) -> Result<Json<PageResponse<HotelResponse>>, (StatusCode, Json<PageResponse<HotelResponse>>)> {
    let Some(Extension(principal)) = principal else {
        return Err(login_required("You must be logged in to add a hotel."));
    };

    let hotel = state
        .repos
        .hotels()
        .create(form.into_new(principal.user_id.clone()))
        .await
        .map_err(web_error_response)?;

    Ok(Json(
        PageResponse::flash(hotel.into(), "Hotel created successfully.").redirect_to("/hotels/"),
    ))
}

/// POST /hotels/{id}/edit/
pub async fn update_hotel(
    State(state): State<HotelPagesState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    PageForm(form): PageForm<HotelForm>,
) -> Result<Json<PageResponse<HotelResponse>>, (StatusCode, Json<PageResponse<HotelResponse>>)> {
    if principal.is_none() {
        return Err(login_required("Please login to continue."));
    }

    let hotel = state
        .repos
        .hotels()
        .update(id, form.into_patch())
        .await
        .map_err(web_error_response)?
        .ok_or_else(|| web_error_response(hotel_not_found(id)))?;

    Ok(Json(
        PageResponse::flash(hotel.into(), "Hotel updated successfully.").redirect_to("/hotels/"),
    ))
}

/// POST /hotels/{id}/delete/
pub async fn delete_hotel(
    State(state): State<HotelPagesState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<Json<PageResponse<()>>, (StatusCode, Json<PageResponse<()>>)> {
    if principal.is_none() {
        return Err(login_required("Please login to continue."));
    }

    let deleted = state
        .repos
        .hotels()
        .delete(id)
        .await
        .map_err(web_error_response)?;
    if !deleted {
        return Err(web_error_response(hotel_not_found(id)));
    }

    Ok(Json(
        PageResponse::notice("Hotel deleted successfully.").redirect_to("/hotels/"),
    ))
}

fn hotel_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Hotel",
        field: "id",
        value: id.to_string(),
    }
}
