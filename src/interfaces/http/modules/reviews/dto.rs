//! Review DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::review::{Review, ReviewPatch, ReviewTarget};
use crate::interfaces::http::common::MAX_PAGE_SIZE;
use crate::shared::types::{page_or_first, page_size_or};

#[derive(Debug, Serialize, ToSchema)]
pub struct ReviewResponse {
    pub id: i32,
    pub user_id: String,
    /// "HOTEL", "FLIGHT" or "TOUR"
    pub review_type: String,
    /// Room, flight or tour ID, per `review_type`
    pub target_id: i32,
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id,
            user_id: review.user_id,
            review_type: review.target.type_str().to_string(),
            target_id: review.target.target_id(),
            rating: review.rating,
            comment: review.comment,
            created_at: review.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateReviewRequest {
    /// "HOTEL" (reviews a room), "FLIGHT" or "TOUR"
    pub review_type: String,
    pub target_id: i32,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i16,
    #[validate(length(min = 1, message = "Comment is required"))]
    pub comment: String,
}

/// Partial review update; author and target are immutable.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateReviewRequest {
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i16>,
    #[validate(length(min = 1, message = "Comment is required"))]
    pub comment: Option<String>,
}

impl From<UpdateReviewRequest> for ReviewPatch {
    fn from(request: UpdateReviewRequest) -> Self {
        Self {
            rating: request.rating,
            comment: request.comment,
        }
    }
}

/// Review listing query; `review_type` + `target_id` together narrow
/// the list to one reviewed item.
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ReviewListParams {
    /// "HOTEL", "FLIGHT" or "TOUR"
    pub review_type: Option<String>,
    pub target_id: Option<i32>,
    /// Page number, 1-based
    pub page: Option<String>,
    /// Items per page, capped at 100
    pub count: Option<String>,
}

impl ReviewListParams {
    /// The target filter, when both halves are present and valid.
    pub fn target(&self) -> Option<ReviewTarget> {
        match (self.review_type.as_deref(), self.target_id) {
            (Some(type_str), Some(target_id)) => ReviewTarget::from_parts(type_str, target_id),
            _ => None,
        }
    }

    pub fn page(&self) -> u32 {
        page_or_first(self.page.as_deref())
    }

    pub fn limit(&self, default: u32) -> u32 {
        page_size_or(self.count.as_deref(), default, MAX_PAGE_SIZE)
    }
}
