//! Application router
//!
//! Wires both surfaces onto one `Router`: the REST API under `/api`
//! (bearer tokens, Swagger UI at `/docs`) and the web pages at the
//! root (session cookie). Each resource keeps its own sub-router and
//! state; the auth middlewares are layered per group, strict where
//! every route needs a caller, lenient where permissions differ per
//! method.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{delete, get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::{BookingService, IdentityService};
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::{ApiResponse, EmptyData, PaginatedResponse};
use crate::interfaces::http::middleware::{
    attach_principal, attach_session_principal, require_auth, AuthState, SessionAuthState,
};
use crate::interfaces::web;

use super::modules::{
    airlines, amenities, auth, flight_reservations, flights, health, hotels, payments,
    reservations, reviews, room_types, rooms, tour_reservations, tours, users,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT access token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation for the REST surface.
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::signup,
        auth::login,
        // Users
        users::list_users,
        users::get_user,
        users::update_user,
        users::delete_user,
        // Hotels
        hotels::list_hotels,
        hotels::get_hotel,
        hotels::hotel_rooms,
        hotels::create_hotel,
        hotels::update_hotel,
        hotels::delete_hotel,
        // Rooms
        rooms::get_room,
        rooms::create_room,
        rooms::update_room,
        rooms::delete_room,
        // Room types
        room_types::list_room_types,
        room_types::get_room_type,
        room_types::create_room_type,
        room_types::update_room_type,
        room_types::delete_room_type,
        // Amenities
        amenities::list_amenities,
        amenities::get_amenity,
        amenities::create_amenity,
        amenities::update_amenity,
        amenities::delete_amenity,
        // Airlines
        airlines::list_airlines,
        airlines::get_airline,
        airlines::create_airline,
        airlines::update_airline,
        airlines::delete_airline,
        // Flights
        flights::list_flights,
        flights::get_flight,
        flights::create_flight,
        flights::update_flight,
        flights::delete_flight,
        // Tours
        tours::list_tours,
        tours::get_tour,
        tours::create_tour,
        tours::update_tour,
        tours::delete_tour,
        // Reservations
        reservations::list_reservations,
        reservations::create_reservation,
        reservations::cancel_reservation,
        reservations::get_reservation,
        // Reviews
        reviews::list_reviews,
        reviews::get_review,
        reviews::create_review,
        reviews::update_review,
        reviews::delete_review,
        // Flight reservations (admin)
        flight_reservations::list_flight_reservations,
        flight_reservations::get_flight_reservation,
        flight_reservations::create_flight_reservation,
        flight_reservations::update_flight_reservation,
        flight_reservations::delete_flight_reservation,
        // Tour reservations (admin)
        tour_reservations::list_tour_reservations,
        tour_reservations::get_tour_reservation,
        tour_reservations::create_tour_reservation,
        tour_reservations::update_tour_reservation,
        tour_reservations::delete_tour_reservation,
        // Payments (admin)
        payments::list_payments,
        payments::get_payment,
        payments::create_payment,
        payments::update_payment,
        payments::delete_payment,
    ),
    components(
        schemas(
            // Common
            ApiResponse<EmptyData>,
            // Health
            health::HealthResponse,
            health::ComponentHealth,
            // Auth
            auth::SignupRequest,
            auth::LoginRequest,
            auth::TokenPairResponse,
            // Users
            users::UserResponse,
            users::UpdateUserRequest,
            PaginatedResponse<users::UserResponse>,
            // Hotels
            hotels::HotelResponse,
            hotels::HotelListItem,
            hotels::CreateHotelRequest,
            hotels::UpdateHotelRequest,
            PaginatedResponse<hotels::HotelListItem>,
            // Rooms
            rooms::RoomResponse,
            rooms::CreateRoomRequest,
            rooms::UpdateRoomRequest,
            // Room types
            room_types::RoomTypeResponse,
            room_types::CreateRoomTypeRequest,
            room_types::UpdateRoomTypeRequest,
            PaginatedResponse<room_types::RoomTypeResponse>,
            // Amenities
            amenities::AmenityResponse,
            amenities::CreateAmenityRequest,
            amenities::UpdateAmenityRequest,
            PaginatedResponse<amenities::AmenityResponse>,
            // Airlines
            airlines::AirlineResponse,
            airlines::CreateAirlineRequest,
            airlines::UpdateAirlineRequest,
            PaginatedResponse<airlines::AirlineResponse>,
            // Flights
            flights::FlightResponse,
            flights::CreateFlightRequest,
            flights::UpdateFlightRequest,
            PaginatedResponse<flights::FlightResponse>,
            // Tours
            tours::TourResponse,
            tours::CreateTourRequest,
            tours::UpdateTourRequest,
            PaginatedResponse<tours::TourResponse>,
            // Reservations
            reservations::HotelReservationResponse,
            reservations::CreateReservationRequest,
            PaginatedResponse<reservations::HotelReservationResponse>,
            // Reviews
            reviews::ReviewResponse,
            reviews::CreateReviewRequest,
            reviews::UpdateReviewRequest,
            PaginatedResponse<reviews::ReviewResponse>,
            // Flight reservations
            flight_reservations::FlightReservationResponse,
            flight_reservations::CreateFlightReservationRequest,
            flight_reservations::UpdateFlightReservationRequest,
            PaginatedResponse<flight_reservations::FlightReservationResponse>,
            // Tour reservations
            tour_reservations::TourReservationResponse,
            tour_reservations::CreateTourReservationRequest,
            tour_reservations::UpdateTourReservationRequest,
            PaginatedResponse<tour_reservations::TourReservationResponse>,
            // Payments
            payments::PaymentResponse,
            payments::CreatePaymentRequest,
            payments::UpdatePaymentRequest,
            PaginatedResponse<payments::PaymentResponse>,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health probe"),
        (name = "Auth", description = "Signup and login issuing JWT token pairs"),
        (name = "Users", description = "Account management"),
        (name = "Hotels", description = "Hotel catalog with search, sort and rooms"),
        (name = "Rooms", description = "Hotel room management"),
        (name = "Room types", description = "Room type catalog"),
        (name = "Amenities", description = "Room amenity catalog"),
        (name = "Airlines", description = "Airline catalog"),
        (name = "Flights", description = "Flight catalog with search and sort"),
        (name = "Tours", description = "Tour catalog with search and sort"),
        (name = "Reservations", description = "Hotel room booking and cancellation"),
        (name = "Reviews", description = "User reviews of rooms, flights and tours"),
        (name = "Flight reservations", description = "Admin access to flight reservations"),
        (name = "Tour reservations", description = "Admin access to tour reservations"),
        (name = "Payments", description = "Admin access to reservation payments"),
    ),
    info(
        title = "Tripnest API",
        version = "1.0.0",
        description = "REST API for the Tripnest travel booking service",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Builds the complete router over the shared services.
pub fn create_router(
    db: DatabaseConnection,
    repos: Arc<dyn RepositoryProvider>,
    identity: Arc<IdentityService>,
    bookings: Arc<BookingService>,
    jwt_config: JwtConfig,
) -> Router {
    let auth_state = AuthState { jwt_config };
    let session_state = SessionAuthState {
        identity: identity.clone(),
    };

    // ── REST: public ────────────────────────────────────────────

    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db,
            started_at: Arc::new(Instant::now()),
        });

    let auth_routes = Router::new()
        .route("/signup/", post(auth::signup))
        .route("/login/", post(auth::login))
        .with_state(auth::AuthAppState {
            identity: identity.clone(),
        });

    // ── REST: strict bearer auth ────────────────────────────────

    let user_routes = Router::new()
        .route("/", get(users::list_users))
        .route("/{id}/", get(users::get_user).patch(users::update_user))
        .route("/{id}/delete/", delete(users::delete_user))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            require_auth,
        ))
        .with_state(users::UserAppState {
            identity: identity.clone(),
        });

    let reservation_routes = Router::new()
        .route("/", get(reservations::list_reservations))
        .route("/create/", post(reservations::create_reservation))
        .route("/{id}/", get(reservations::get_reservation))
        .route("/{id}/cancel/", post(reservations::cancel_reservation))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            require_auth,
        ))
        .with_state(reservations::ReservationAppState {
            bookings: bookings.clone(),
        });

    let flight_reservation_routes = Router::new()
        .route(
            "/",
            get(flight_reservations::list_flight_reservations)
                .post(flight_reservations::create_flight_reservation),
        )
        .route(
            "/{id}/",
            get(flight_reservations::get_flight_reservation)
                .patch(flight_reservations::update_flight_reservation)
                .delete(flight_reservations::delete_flight_reservation),
        )
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            require_auth,
        ))
        .with_state(flight_reservations::FlightReservationAppState {
            repos: repos.clone(),
        });

    let tour_reservation_routes = Router::new()
        .route(
            "/",
            get(tour_reservations::list_tour_reservations)
                .post(tour_reservations::create_tour_reservation),
        )
        .route(
            "/{id}/",
            get(tour_reservations::get_tour_reservation)
                .patch(tour_reservations::update_tour_reservation)
                .delete(tour_reservations::delete_tour_reservation),
        )
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            require_auth,
        ))
        .with_state(tour_reservations::TourReservationAppState {
            repos: repos.clone(),
        });

    let payment_routes = Router::new()
        .route(
            "/",
            get(payments::list_payments).post(payments::create_payment),
        )
        .route(
            "/{id}/",
            get(payments::get_payment)
                .patch(payments::update_payment)
                .delete(payments::delete_payment),
        )
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            require_auth,
        ))
        .with_state(payments::PaymentAppState {
            repos: repos.clone(),
        });

    // ── REST: public reads, admin writes ────────────────────────

    let hotel_routes = Router::new()
        .route("/", get(hotels::list_hotels).post(hotels::create_hotel))
        .route(
            "/{id}/",
            get(hotels::get_hotel)
                .patch(hotels::update_hotel)
                .delete(hotels::delete_hotel),
        )
        .route("/{id}/room/", get(hotels::hotel_rooms))
        .with_state(hotels::HotelAppState {
            repos: repos.clone(),
        });

    let room_routes = Router::new()
        .route("/", post(rooms::create_room))
        .route(
            "/{id}/",
            get(rooms::get_room)
                .patch(rooms::update_room)
                .delete(rooms::delete_room),
        )
        .with_state(rooms::RoomAppState {
            repos: repos.clone(),
        });

    let room_type_routes = Router::new()
        .route(
            "/",
            get(room_types::list_room_types).post(room_types::create_room_type),
        )
        .route(
            "/{id}/",
            get(room_types::get_room_type)
                .patch(room_types::update_room_type)
                .delete(room_types::delete_room_type),
        )
        .with_state(room_types::RoomTypeAppState {
            repos: repos.clone(),
        });

    let amenity_routes = Router::new()
        .route(
            "/",
            get(amenities::list_amenities).post(amenities::create_amenity),
        )
        .route(
            "/{id}/",
            get(amenities::get_amenity)
                .patch(amenities::update_amenity)
                .delete(amenities::delete_amenity),
        )
        .with_state(amenities::AmenityAppState {
            repos: repos.clone(),
        });

    let airline_routes = Router::new()
        .route(
            "/",
            get(airlines::list_airlines).post(airlines::create_airline),
        )
        .route(
            "/{id}/",
            get(airlines::get_airline)
                .patch(airlines::update_airline)
                .delete(airlines::delete_airline),
        )
        .with_state(airlines::AirlineAppState {
            repos: repos.clone(),
        });

    let flight_routes = Router::new()
        .route("/", get(flights::list_flights).post(flights::create_flight))
        .route(
            "/{id}/",
            get(flights::get_flight)
                .patch(flights::update_flight)
                .delete(flights::delete_flight),
        )
        .with_state(flights::FlightAppState {
            repos: repos.clone(),
        });

    let tour_routes = Router::new()
        .route("/", get(tours::list_tours).post(tours::create_tour))
        .route(
            "/{id}/",
            get(tours::get_tour)
                .patch(tours::update_tour)
                .delete(tours::delete_tour),
        )
        .with_state(tours::TourAppState {
            repos: repos.clone(),
        });

    let review_routes = Router::new()
        .route(
            "/",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/{id}/",
            get(reviews::get_review)
                .patch(reviews::update_review)
                .delete(reviews::delete_review),
        )
        .with_state(reviews::ReviewAppState {
            repos: repos.clone(),
        });

    // One lenient layer over every catalog group: the principal is
    // attached when a token is present, handlers gate the writes.
    // Nest prefixes keep their trailing slash so the collection routes
    // stay at "/api/hotel/" and friends.
    let catalog_routes = Router::new()
        .nest("/api/hotel/", hotel_routes)
        .nest("/api/room/", room_routes)
        .nest("/api/room-type/", room_type_routes)
        .nest("/api/amenity/", amenity_routes)
        .nest("/api/airline/", airline_routes)
        .nest("/api/flight/", flight_routes)
        .nest("/api/tour/", tour_routes)
        .nest("/api/review/", review_routes)
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            attach_principal,
        ));

    // ── Web pages: session cookie ───────────────────────────────

    let web_auth_routes = Router::new()
        .route(
            "/auth/",
            get(web::auth::auth_page).post(web::auth::auth_submit),
        )
        .route("/logout/", post(web::auth::logout))
        .with_state(web::auth::WebAuthState {
            identity: identity.clone(),
        });

    let web_booking_routes = Router::new()
        .route("/bookings/", get(web::bookings::bookings_page))
        .route(
            "/booking/{kind}/{id}/",
            get(web::bookings::booking_detail_page),
        )
        .with_state(web::bookings::WebBookingState { bookings });

    let web_hotel_routes = Router::new()
        .route("/hotels/", get(web::hotels::hotel_list_page))
        .route(
            "/hotels/create/",
            get(web::hotels::hotel_form_page).post(web::hotels::create_hotel),
        )
        .route(
            "/hotels/{id}/edit/",
            get(web::hotels::hotel_edit_page).post(web::hotels::update_hotel),
        )
        .route("/hotels/{id}/delete/", post(web::hotels::delete_hotel))
        .with_state(web::hotels::HotelPagesState {
            repos: repos.clone(),
        });

    let web_flight_routes = Router::new()
        .route("/flights/", get(web::flights::flight_list_page))
        .route(
            "/flights/create/",
            get(web::flights::flight_form_page).post(web::flights::create_flight),
        )
        .route(
            "/flights/{id}/edit/",
            get(web::flights::flight_edit_page).post(web::flights::update_flight),
        )
        .route("/flights/{id}/delete/", post(web::flights::delete_flight))
        .with_state(web::flights::FlightPagesState {
            repos: repos.clone(),
        });

    let web_tour_routes = Router::new()
        .route("/tours/", get(web::tours::tour_list_page))
        .route(
            "/tours/create/",
            get(web::tours::tour_form_page).post(web::tours::create_tour),
        )
        .route(
            "/tours/{id}/edit/",
            get(web::tours::tour_edit_page).post(web::tours::update_tour),
        )
        .route("/tours/{id}/delete/", post(web::tours::delete_tour))
        .with_state(web::tours::TourPagesState { repos });

    let web_routes = Router::new()
        .merge(web_auth_routes)
        .merge(web_booking_routes)
        .merge(web_hotel_routes)
        .merge(web_flight_routes)
        .merge(web_tour_routes)
        .route("/profile/", get(web::profile::profile_page))
        .layer(middleware::from_fn_with_state(
            session_state,
            attach_session_principal,
        ));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        .merge(swagger_routes)
        .merge(health_routes)
        .nest("/api/auth/", auth_routes)
        .nest("/api/user/", user_routes)
        .nest("/api/reservation/", reservation_routes)
        .nest("/api/flight-reservation/", flight_reservation_routes)
        .nest("/api/tour-reservation/", tour_reservation_routes)
        .nest("/api/payment/", payment_routes)
        .merge(catalog_routes)
        .merge(web_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
