//! Review domain entity

use chrono::{DateTime, Utc};

/// What a review is about. Hotel reviews attach to a specific room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewTarget {
    Room(i32),
    Flight(i32),
    Tour(i32),
}

impl ReviewTarget {
    /// Stored discriminator value.
    pub fn type_str(&self) -> &'static str {
        match self {
            Self::Room(_) => "HOTEL",
            Self::Flight(_) => "FLIGHT",
            Self::Tour(_) => "TOUR",
        }
    }

    pub fn target_id(&self) -> i32 {
        match self {
            Self::Room(id) | Self::Flight(id) | Self::Tour(id) => *id,
        }
    }

    pub fn from_parts(type_str: &str, target_id: i32) -> Option<Self> {
        match type_str {
            "HOTEL" => Some(Self::Room(target_id)),
            "FLIGHT" => Some(Self::Flight(target_id)),
            "TOUR" => Some(Self::Tour(target_id)),
            _ => None,
        }
    }
}

/// User rating (1..=5) with a comment.
#[derive(Debug, Clone)]
pub struct Review {
    pub id: i32,
    pub user_id: String,
    pub target: ReviewTarget,
    pub rating: i16,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReview {
    pub user_id: String,
    pub target: ReviewTarget,
    pub rating: i16,
    pub comment: String,
}

/// Partial review update; author and target are immutable.
#[derive(Debug, Clone, Default)]
pub struct ReviewPatch {
    pub rating: Option<i16>,
    pub comment: Option<String>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_round_trips_through_parts() {
        let t = ReviewTarget::Room(7);
        assert_eq!(t.type_str(), "HOTEL");
        assert_eq!(t.target_id(), 7);
        assert_eq!(ReviewTarget::from_parts("HOTEL", 7), Some(t));
        assert_eq!(ReviewTarget::from_parts("TOUR", 3), Some(ReviewTarget::Tour(3)));
        assert_eq!(ReviewTarget::from_parts("CRUISE", 1), None);
    }
}
