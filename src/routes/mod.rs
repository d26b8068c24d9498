/// Router Module Index
///
/// Organizes the page routes into the same access tiers the policy is
/// written in terms of, so the route map and the prefix lists in
/// `PolicyConfig` can be read side by side. The guard middleware is applied
/// once over the assembled tree in `create_router`; nothing in these modules
/// performs its own access checks.

/// Pages reachable by anyone, authenticated or not.
pub mod site;

/// Pages reserved for unauthenticated visitors (login, registration,
/// password recovery). Covered by `PolicyConfig::guest_routes`.
pub mod guest;

/// The admin dashboard tree, including its login page. Covered by
/// `PolicyConfig::admin_routes` and `admin_guest_routes`.
pub mod admin;
