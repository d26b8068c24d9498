use axum::Json;

use crate::{
    models::{PageView, SessionInfo},
    policy::IdentityContext,
};

// --- Site Pages ---

/// home
///
/// [Open Route] The consumer landing page. Also the redirect target for
/// authenticated non-admin visitors bounced off guest routes.
pub async fn home() -> Json<PageView> {
    Json(PageView::new("/", "Home"))
}

/// profile
///
/// [Open Route] The visitor's profile page. Deliberately not gated by this
/// layer: the page shell renders for everyone and the backend API rejects
/// unauthenticated data calls, matching how the portal behaves today.
pub async fn profile() -> Json<PageView> {
    Json(PageView::new("/profile", "My Profile"))
}

/// bookings
///
/// [Open Route] The visitor's booking history page. Same gating story as
/// `profile`.
pub async fn bookings() -> Json<PageView> {
    Json(PageView::new("/bookings", "My Bookings"))
}

/// session
///
/// [Open Route] Reports the identity the guard resolved for this request,
/// via the same `IdentityContext` extractor the middleware uses. Lets the
/// frontends render login state without calling the backend API.
pub async fn session(identity: IdentityContext) -> Json<SessionInfo> {
    Json(SessionInfo {
        authenticated: identity.is_authenticated(),
        role: identity.role,
    })
}

// --- Guest Pages ---

/// login_page
///
/// [Guest Route] The consumer login page. Authenticated visitors never see
/// this handler; the guard bounces them to their landing page first.
pub async fn login_page() -> Json<PageView> {
    Json(PageView::new("/login", "Sign In"))
}

/// register_page
///
/// [Guest Route] The account registration page.
pub async fn register_page() -> Json<PageView> {
    Json(PageView::new("/register", "Create Account"))
}

/// forgot_password_page
///
/// [Guest Route] Entry point of the password recovery flow.
pub async fn forgot_password_page() -> Json<PageView> {
    Json(PageView::new("/forgot-password", "Forgot Password"))
}

/// reset_password_page
///
/// [Guest Route] Final step of the password recovery flow, reached from the
/// emailed reset link.
pub async fn reset_password_page() -> Json<PageView> {
    Json(PageView::new("/reset-password", "Reset Password"))
}

// --- Admin Pages ---

/// admin_dashboard
///
/// [Admin Route] The admin landing page. The guard only lets authenticated
/// admins through (role-aware mode) or any authenticated identity
/// (role-unaware mode).
pub async fn admin_dashboard() -> Json<PageView> {
    Json(PageView::new("/admin", "Admin Dashboard"))
}

/// admin_login_page
///
/// [Admin-Guest Route] The admin login page: the one admin-route prefix
/// unauthenticated visitors may reach.
pub async fn admin_login_page() -> Json<PageView> {
    Json(PageView::new("/admin/login", "Admin Sign In"))
}

/// admin_bookings
///
/// [Admin Route] Booking management for administrators.
pub async fn admin_bookings() -> Json<PageView> {
    Json(PageView::new("/admin/bookings", "Manage Bookings"))
}

/// admin_customers
///
/// [Admin Route] Customer management for administrators.
pub async fn admin_customers() -> Json<PageView> {
    Json(PageView::new("/admin/customers", "Manage Customers"))
}
