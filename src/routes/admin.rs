use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Admin Router Module
///
/// The admin dashboard tree, nested under `/admin` in `create_router`. The
/// guard gates all of it through `PolicyConfig::admin_routes`, with the
/// login page carved out via `admin_guest_routes` so unauthenticated admins
/// can still reach it.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        // GET /admin
        // The admin landing page and the redirect target for authenticated
        // admins bounced off guest routes.
        .route("/", get(handlers::admin_dashboard))
        // GET /admin/login
        // The admin-guest exception: reachable while unauthenticated,
        // served with no-cache headers.
        .route("/login", get(handlers::admin_login_page))
        // GET /admin/bookings
        // Booking moderation and oversight.
        .route("/bookings", get(handlers::admin_bookings))
        // GET /admin/customers
        // Customer account management.
        .route("/customers", get(handlers::admin_customers))
}
