//! Tour page handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{TourForm, TourFormPage, TourListPage, TourSearchEcho};
use crate::domain::access::Principal;
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::PaginatedResponse;
use crate::interfaces::http::modules::tours::{TourListParams, TourResponse};
use crate::interfaces::web::common::{
    login_required, web_error_response, PageForm, PageResponse,
};

/// Tours per page on the web listing.
const TOUR_PAGE_SIZE: u32 = 4;

/// Tour page handler state
#[derive(Clone)]
pub struct TourPagesState {
    pub repos: Arc<dyn RepositoryProvider>,
}

/// GET /tours/
pub async fn tour_list_page(
    State(state): State<TourPagesState>,
    Query(params): Query<TourListParams>,
) -> Result<Json<PageResponse<TourListPage>>, (StatusCode, Json<PageResponse<TourListPage>>)> {
    let page = state
        .repos
        .tours()
        .list(&params.filter(), params.sort(), params.page(), TOUR_PAGE_SIZE)
        .await
        .map_err(web_error_response)?;

    Ok(Json(PageResponse::page(TourListPage {
        tours: PaginatedResponse::from_result(page.map(TourResponse::from)),
        search_params: TourSearchEcho {
            destination: params.destination.clone(),
            sort: params.sort.clone().unwrap_or_else(|| "default".to_string()),
        },
    })))
}

/// GET /tours/create/
pub async fn tour_form_page() -> Json<PageResponse<TourFormPage>> {
    Json(PageResponse::page(TourFormPage { tour: None }))
}

/// GET /tours/{id}/edit/
pub async fn tour_edit_page(
    State(state): State<TourPagesState>,
    Path(id): Path<i32>,
) -> Result<Json<PageResponse<TourFormPage>>, (StatusCode, Json<PageResponse<TourFormPage>>)> {
    let tour = state
        .repos
        .tours()
        .find_by_id(id)
        .await
        .map_err(web_error_response)?
        .ok_or_else(|| web_error_response(tour_not_found(id)))?;

    Ok(Json(PageResponse::page(TourFormPage {
        tour: Some(tour.into()),
    })))
}

/// POST /tours/create/
pub async fn create_tour(
    State(state): State<TourPagesState>,
    principal: Option<Extension<Principal>>,
    PageForm(form): PageForm<TourForm>,
) -> Result<Json<PageResponse<TourResponse>>, (StatusCode, Json<PageResponse<TourResponse>>)> {
    if principal.is_none() {
        return Err(login_required("Please login to continue."));
    }

    let tour = state
        .repos
        .tours()
        .create(form.into())
        .await
        .map_err(web_error_response)?;

    Ok(Json(
        PageResponse::flash(tour.into(), "Tour created successfully.").redirect_to("/tours/"),
    ))
}

/// POST /tours/{id}/edit/
pub async fn update_tour(
    State(state): State<TourPagesState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    PageForm(form): PageForm<TourForm>,
) -> Result<Json<PageResponse<TourResponse>>, (StatusCode, Json<PageResponse<TourResponse>>)> {
    if principal.is_none() {
        return Err(login_required("Please login to continue."));
    }

    let tour = state
        .repos
        .tours()
        .update(id, form.into())
        .await
        .map_err(web_error_response)?
        .ok_or_else(|| web_error_response(tour_not_found(id)))?;

    Ok(Json(
        PageResponse::flash(tour.into(), "Tour updated successfully.").redirect_to("/tours/"),
    ))
}

/// POST /tours/{id}/delete/
pub async fn delete_tour(
    State(state): State<TourPagesState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<Json<PageResponse<()>>, (StatusCode, Json<PageResponse<()>>)> {
    if principal.is_none() {
        return Err(login_required("Please login to continue."));
    }

    let deleted = state
        .repos
        .tours()
        .delete(id)
        .await
        .map_err(web_error_response)?;
    if !deleted {
        return Err(web_error_response(tour_not_found(id)));
    }

    Ok(Json(
        PageResponse::notice("Tour deleted successfully.").redirect_to("/tours/"),
    ))
}

fn tour_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Tour",
        field: "id",
        value: id.to_string(),
    }
}
