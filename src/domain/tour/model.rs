//! Tour domain entity

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Guided tour package.
///
/// `available_slots` is a plain counter maintained by catalog edits;
/// tour bookings do not decrement it.
#[derive(Debug, Clone)]
pub struct Tour {
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

#[derive(Debug, Clone)]
pub struct NewTour {
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

#[derive(Debug, Clone, Default)]
pub struct TourPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub price: Option<Decimal>,
    pub max_participants: Option<i32>,
    pub available_slots: Option<i32>,
    pub guide_name: Option<Option<String>>,
    pub image: Option<Option<String>>,
}

/// Sort order for tour listings. Rating is the average of review
/// ratings; tours without reviews sort last under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TourSort {
    Default,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl TourSort {
    pub fn from_param(s: Option<&str>) -> Self {
        match s {
            Some("price_asc") => Self::PriceAsc,
            Some("price_desc") => Self::PriceDesc,
            Some("rating_desc") => Self::RatingDesc,
            _ => Self::Default,
        }
    }
}

/// Search criteria for tour listings.
#[derive(Debug, Clone, Default)]
pub struct TourFilter {
    pub destination: Option<String>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_parses_known_values() {
        assert_eq!(TourSort::from_param(Some("price_asc")), TourSort::PriceAsc);
        assert_eq!(TourSort::from_param(Some("price_desc")), TourSort::PriceDesc);
        assert_eq!(TourSort::from_param(Some("rating_desc")), TourSort::RatingDesc);
    }

    #[test]
    fn unknown_sort_falls_back_to_default() {
        assert_eq!(TourSort::from_param(Some("popularity")), TourSort::Default);
        assert_eq!(TourSort::from_param(None), TourSort::Default);
    }
}
