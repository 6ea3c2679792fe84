//! Route definitions for the Car Doctor HTTP API.
//!
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor. Only `GET /bookings` sits behind the session middleware.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(health_routes())
        .merge(session_routes())
        .merge(service_routes())
        .merge(booking_routes(&state))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Liveness endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
}

/// Login and logout
fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(handlers::auth::issue_token))
        .route("/logout", post(handlers::auth::logout))
}

/// Service catalog
fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/services", get(handlers::service::list_services))
        .route("/services/{id}", get(handlers::service::get_service))
}

/// Bookings; the session layer covers the listing only.
fn booking_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/bookings",
            get(handlers::booking::list_bookings)
                .route_layer(axum_middleware::from_fn_with_state(
                    state.clone(),
                    middleware::session::require_session,
                ))
                .post(handlers::booking::create_booking),
        )
        .route(
            "/bookings/{id}",
            axum::routing::patch(handlers::booking::update_booking)
                .delete(handlers::booking::delete_booking),
        )
}
