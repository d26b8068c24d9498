use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Site Router Module
///
/// Pages of the consumer site that carry no access restriction at this
/// layer. They still pass through the guard middleware, which classifies
/// them as unmatched and lets them through untouched.
pub fn site_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Unauthenticated endpoint for monitoring and load balancer checks.
        .route("/health", get(|| async { "ok" }))
        // GET /
        // The consumer landing page and default redirect target.
        .route("/", get(handlers::home))
        // GET /profile
        // The visitor's profile page shell.
        .route("/profile", get(handlers::profile))
        // GET /bookings
        // The visitor's booking history page shell.
        .route("/bookings", get(handlers::bookings))
        // GET /session
        // Reports the cookie-derived identity for the current request.
        .route("/session", get(handlers::session))
}
