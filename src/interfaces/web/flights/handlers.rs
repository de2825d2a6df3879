//! Flight page handlers

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use chrono::{DateTime, Utc};

use super::dto::{FlightForm, FlightFormPage, FlightListPage, FlightSearchEcho};
use crate::domain::access::Principal;
use crate::domain::{DomainError, RepositoryProvider};
use crate::interfaces::http::common::PaginatedResponse;
use crate::interfaces::http::modules::flights::{FlightListParams, FlightResponse};
use crate::interfaces::web::common::{
    login_required, parse_form_datetime, web_error_response, PageForm, PageResponse,
};

/// Flights per page on the web listing.
const FLIGHT_PAGE_SIZE: u32 = 5;

/// Flight page handler state
#[derive(Clone)]
pub struct FlightPagesState {
    pub repos: Arc<dyn RepositoryProvider>,
}

/// GET /flights/
pub async fn flight_list_page(
    State(state): State<FlightPagesState>,
    Query(params): Query<FlightListParams>,
) -> Result<Json<PageResponse<FlightListPage>>, (StatusCode, Json<PageResponse<FlightListPage>>)> {
    let page = state
        .repos
        .flights()
        .list(
            &params.filter(),
            params.sort(),
            params.page(),
            FLIGHT_PAGE_SIZE,
        )
        .await
        .map_err(web_error_response)?;

    Ok(Json(PageResponse::page(FlightListPage {
        flights: PaginatedResponse::from_result(page.map(FlightResponse::from)),
        search_params: FlightSearchEcho {
            origin: params.origin.clone(),
            destination: params.destination.clone(),
            passengers: params.passengers.clone(),
            sort: params.sort.clone().unwrap_or_else(|| "date".to_string()),
        },
    })))
}

/// GET /flights/create/
pub async fn flight_form_page(
    State(state): State<FlightPagesState>,
) -> Result<Json<PageResponse<FlightFormPage>>, (StatusCode, Json<PageResponse<FlightFormPage>>)> {
    let airlines = state
        .repos
        .airlines()
        .find_all()
        .await
        .map_err(web_error_response)?;

    Ok(Json(PageResponse::page(FlightFormPage {
        flight: None,
        airlines: airlines.into_iter().map(Into::into).collect(),
    })))
}

/// GET /flights/{id}/edit/
pub async fn flight_edit_page(
    State(state): State<FlightPagesState>,
    Path(id): Path<i32>,
) -> Result<Json<PageResponse<FlightFormPage>>, (StatusCode, Json<PageResponse<FlightFormPage>>)> {
    let flight = state
        .repos
        .flights()
        .find_by_id(id)
        .await
        .map_err(web_error_response)?
        .ok_or_else(|| web_error_response(flight_not_found(id)))?;

    let airlines = state
        .repos
        .airlines()
        .find_all()
        .await
        .map_err(web_error_response)?;

    Ok(Json(PageResponse::page(FlightFormPage {
        flight: Some(flight.into()),
        airlines: airlines.into_iter().map(Into::into).collect(),
    })))
}

/// POST /flights/create/
pub async fn create_flight(
    State(state): State<FlightPagesState>,
    principal: Option<Extension<Principal>>,
    PageForm(form): PageForm<FlightForm>,
) -> Result<Json<PageResponse<FlightResponse>>, (StatusCode, Json<PageResponse<FlightResponse>>)> {
    if principal.is_none() {
        return Err(login_required("Please login to continue."));
    }

    let (departure, arrival) = parse_times(&form)?;
    check_airline(&state, form.airline).await?;

    let flight = state
        .repos
        .flights()
        .create(form.into_new(departure, arrival))
        .await
        .map_err(web_error_response)?;

    Ok(Json(
        PageResponse::flash(flight.into(), "Flight created successfully.").redirect_to("/flights/"),
    ))
}

/// POST /flights/{id}/edit/
pub async fn update_flight(
    State(state): State<FlightPagesState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
    PageForm(form): PageForm<FlightForm>,
) -> Result<Json<PageResponse<FlightResponse>>, (StatusCode, Json<PageResponse<FlightResponse>>)> {
    if principal.is_none() {
        return Err(login_required("Please login to continue."));
    }

    let (departure, arrival) = parse_times(&form)?;
    check_airline(&state, form.airline).await?;

    let flight = state
        .repos
        .flights()
        .update(id, form.into_patch(departure, arrival))
        .await
        .map_err(web_error_response)?
        .ok_or_else(|| web_error_response(flight_not_found(id)))?;

    Ok(Json(
        PageResponse::flash(flight.into(), "Flight updated successfully.").redirect_to("/flights/"),
    ))
}

/// POST /flights/{id}/delete/
pub async fn delete_flight(
    State(state): State<FlightPagesState>,
    principal: Option<Extension<Principal>>,
    Path(id): Path<i32>,
) -> Result<Json<PageResponse<()>>, (StatusCode, Json<PageResponse<()>>)> {
    if principal.is_none() {
        return Err(login_required("Please login to continue."));
    }

    let deleted = state
        .repos
        .flights()
        .delete(id)
        .await
        .map_err(web_error_response)?;
    if !deleted {
        return Err(web_error_response(flight_not_found(id)));
    }

    Ok(Json(
        PageResponse::notice("Flight deleted successfully.").redirect_to("/flights/"),
    ))
}

fn flight_not_found(id: i32) -> DomainError {
    DomainError::NotFound {
        entity: "Flight",
        field: "id",
        value: id.to_string(),
    }
}

fn parse_times<T>(
    form: &FlightForm,
) -> Result<(DateTime<Utc>, DateTime<Utc>), (StatusCode, Json<PageResponse<T>>)> {
    let departure = parse_form_datetime(&form.departure_time).ok_or_else(|| {
        web_error_response(DomainError::Validation("Invalid departure time.".into()))
    })?;
    let arrival = parse_form_datetime(&form.arrival_time).ok_or_else(|| {
        web_error_response(DomainError::Validation("Invalid arrival time.".into()))
    })?;
    Ok((departure, arrival))
}

/// The form's dropdown can go stale; a missing airline is a 404 like
/// any other missing row.
async fn check_airline<T>(
    state: &FlightPagesState,
    airline_id: i32,
) -> Result<(), (StatusCode, Json<PageResponse<T>>)> {
    let exists = state
        .repos
        .airlines()
        .find_by_id(airline_id)
        .await
        .map_err(web_error_response)?
        .is_some();

    if !exists {
        return Err(web_error_response(DomainError::NotFound {
            entity: "Airline",
            field: "id",
            value: airline_id.to_string(),
        }));
    }
    Ok(())
}
