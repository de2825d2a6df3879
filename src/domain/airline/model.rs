//! Airline domain entity

/// Carrier operating flights.
#[derive(Debug, Clone)]
pub struct Airline {
    pub id: i32,
    pub name: String,
    pub country: String,
    pub contact_number: Option<String>,
    pub established_year: Option<i32>,
    pub fleet_size: Option<i32>,
}

/// Data for creating an airline. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewAirline {
    pub name: String,
    pub country: String,
    pub contact_number: Option<String>,
    pub established_year: Option<i32>,
    pub fleet_size: Option<i32>,
}

/// Partial update for an airline.
#[derive(Debug, Clone, Default)]
pub struct AirlinePatch {
    pub name: Option<String>,
    pub country: Option<String>,
    pub contact_number: Option<Option<String>>,
    pub established_year: Option<Option<i32>>,
    pub fleet_size: Option<Option<i32>>,
}
