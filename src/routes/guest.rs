use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Guest Router Module
///
/// The unauthenticated-only pages: login, registration, and the password
/// recovery flow. Every path registered here must be covered by a prefix in
/// `PolicyConfig::guest_routes`, otherwise the guard will neither bounce
/// authenticated visitors away nor attach the no-cache headers.
pub fn guest_routes() -> Router<AppState> {
    Router::new()
        // GET /login
        // The consumer login page. Served with no-cache headers so the
        // browser back button cannot resurrect it after login.
        .route("/login", get(handlers::login_page))
        // GET /register
        // Account creation page.
        .route("/register", get(handlers::register_page))
        // GET /forgot-password
        // Starts the password recovery flow.
        .route("/forgot-password", get(handlers::forgot_password_page))
        // GET /reset-password
        // Completes the password recovery flow from the emailed link.
        .route("/reset-password", get(handlers::reset_password_page))
}
