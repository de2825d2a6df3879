//! Bookings page handlers

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Extension, Json};

use super::dto::{BookingDetailPage, BookingsPage};
use crate::application::BookingService;
use crate::domain::access::Principal;
use crate::domain::reservation::ReservationKind;
use crate::interfaces::web::common::{login_required, web_error_response, PageResponse};

/// Bookings page handler state
#[derive(Clone)]
pub struct WebBookingState {
    pub bookings: Arc<BookingService>,
}

/// GET /bookings/
pub async fn bookings_page(
    State(state): State<WebBookingState>,
    principal: Option<Extension<Principal>>,
) -> Result<Json<PageResponse<BookingsPage>>, (StatusCode, Json<PageResponse<BookingsPage>>)> {
    let Some(Extension(principal)) = principal else {
        return Err(login_required("Please login to view your bookings."));
    };

    let overview = state
        .bookings
        .bookings_overview(&principal.user_id)
        .await
        .map_err(web_error_response)?;

    Ok(Json(PageResponse::page(overview.into())))
}

/// GET /booking/{kind}/{id}/
pub async fn booking_detail_page(
    State(state): State<WebBookingState>,
    principal: Option<Extension<Principal>>,
    Path((kind, id)): Path<(String, i32)>,
) -> Result<Json<PageResponse<BookingDetailPage>>, (StatusCode, Json<PageResponse<BookingDetailPage>>)>
{
    let Some(Extension(principal)) = principal else {
        return Err(login_required("Please login to view booking details."));
    };

    let Some(kind) = ReservationKind::from_path_segment(&kind) else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(PageResponse::failure("Invalid booking type.")),
        ));
    };

    let detail = state
        .bookings
        .booking_detail(Some(&principal), kind, id)
        .await
        .map_err(web_error_response)?;

    Ok(Json(PageResponse::page(detail.into())))
}
