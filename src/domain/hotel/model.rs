//! Hotel domain entity

use rust_decimal::Decimal;

/// Hotel property managed by a user account.
///
/// `main_image` is an opaque image reference (path or URL); the service
/// stores and serves it verbatim.
#[derive(Debug, Clone)]
pub struct Hotel {
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

#[derive(Debug, Clone)]
pub struct NewHotel {
    pub name: String,
    pub city: String,
    pub address: String,
    pub description: String,
    pub star_rating: i16,
    pub contact_email: String,
    pub main_image: Option<String>,
    pub manager_id: String,
}

#[derive(Debug, Clone, Default)]
pub struct HotelPatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub description: Option<String>,
    pub star_rating: Option<i16>,
    pub contact_email: Option<String>,
    pub main_image: Option<Option<String>>,
    pub manager_id: Option<String>,
}

/// Sort order for hotel listings. Price sorts key on the hotel's
/// cheapest room; hotels without rooms always sort last. `Default`
/// keeps insertion (id) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HotelSort {
    Default,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl HotelSort {
    pub fn from_param(s: Option<&str>) -> Self {
        match s {
            Some("price_asc") => Self::PriceAsc,
            Some("price_desc") => Self::PriceDesc,
            Some("rating_desc") => Self::RatingDesc,
            _ => Self::Default,
        }
    }
}

/// Search criteria for hotel listings. A `city` of `"all"`
/// (case-insensitive) matches every city.
#[derive(Debug, Clone, Default)]
pub struct HotelFilter {
    pub city: Option<String>,
}

impl HotelFilter {
    /// City substring to match against, or `None` when the filter is
    /// absent or the wildcard `"all"`.
    pub fn city_query(&self) -> Option<&str> {
        match self.city.as_deref() {
            None => None,
            Some(c) if c.eq_ignore_ascii_case("all") => None,
            Some(c) => Some(c),
        }
    }
}

/// Hotel together with its cheapest room price, used by listings.
#[derive(Debug, Clone)]
pub struct HotelWithPrice {
    pub hotel: Hotel,
    pub min_room_price: Option<Decimal>,
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_parses_known_values() {
        assert_eq!(HotelSort::from_param(Some("price_asc")), HotelSort::PriceAsc);
        assert_eq!(HotelSort::from_param(Some("price_desc")), HotelSort::PriceDesc);
        assert_eq!(HotelSort::from_param(Some("rating_desc")), HotelSort::RatingDesc);
        assert_eq!(HotelSort::from_param(Some("default")), HotelSort::Default);
        assert_eq!(HotelSort::from_param(None), HotelSort::Default);
    }

    #[test]
    fn city_all_is_a_wildcard() {
        let f = HotelFilter { city: Some("all".into()) };
        assert_eq!(f.city_query(), None);
        let f = HotelFilter { city: Some("ALL".into()) };
        assert_eq!(f.city_query(), None);
    }

    #[test]
    fn city_filter_passes_through() {
        let f = HotelFilter { city: Some("Istanbul".into()) };
        assert_eq!(f.city_query(), Some("Istanbul"));
        assert_eq!(HotelFilter::default().city_query(), None);
    }
}
