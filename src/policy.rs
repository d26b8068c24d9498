use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::config::PolicyConfig;

// --- Redirect Targets ---

/// Landing page of the consumer site. Authenticated non-admin identities
/// bounced off a guest route are sent here.
pub const HOME: &str = "/";

/// Landing page of the admin dashboard. Authenticated admin identities
/// bounced off a guest route or the admin login page are sent here.
pub const ADMIN_HOME: &str = "/admin";

/// The admin login page. Unauthenticated identities reaching any other
/// admin route are sent here.
pub const ADMIN_LOGIN: &str = "/admin/login";

// --- Identity Model ---

/// Role
///
/// The RBAC field carried by the `user_role` cookie. The portal only
/// distinguishes regular users from administrators; any other cookie value
/// degrades to "no role known" rather than being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Maps a raw cookie value to a role. Unknown values yield `None`, which
    /// downstream checks treat as "not admin".
    pub fn parse(raw: &str) -> Option<Role> {
        match raw {
            "user" => Some(Role::User),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

/// IdentityContext
///
/// The per-request identity snapshot the evaluator works from. It is derived
/// from request cookies by the `identity` module (the evaluator itself never
/// touches HTTP) and records only token *presence*, not token validity:
/// session freshness is the backend API's problem, routing is ours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityContext {
    /// Whether an `accessToken` cookie with a non-empty value was present.
    pub access_token_present: bool,
    /// Whether a `refreshToken` cookie with a non-empty value was present.
    pub refresh_token_present: bool,
    /// The parsed `user_role` cookie, when the role-aware variant is active.
    pub role: Option<Role>,
}

impl IdentityContext {
    /// An identity with no cookies at all. Equivalent to `Default`.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Either token counts: a visitor holding only a refresh token is still
    /// treated as logged in, since the frontend will mint a new access token
    /// on its next API call.
    pub fn is_authenticated(&self) -> bool {
        self.access_token_present || self.refresh_token_present
    }

    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }
}

// --- Decision Model ---

/// Decision
///
/// What the caller must do with the request: let it through, or answer with
/// a redirect to the given path. There is no deny/error arm; the evaluator
/// is total over its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub enum Decision {
    Allow,
    Redirect(String),
}

/// Evaluation
///
/// The full result of one policy evaluation: the routing decision plus the
/// instruction to attach cache-busting headers. The header instruction is
/// independent of the decision: it fires for every guest or admin-guest
/// route, including on the allow path, so the browser back button cannot
/// replay an authenticated page under a guest route after logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct Evaluation {
    pub decision: Decision,
    pub attach_no_cache_headers: bool,
}

// --- Evaluator ---

/// AccessPolicy
///
/// The route-access-control policy evaluator. Built once at startup from the
/// configured prefix lists and shared immutably across all requests; every
/// evaluation is a pure function of `(path, identity)` with no locks, no
/// caching, and no state carried between requests.
///
/// Route classification is case-sensitive prefix matching. The configured
/// sets are expected to satisfy `admin_guest_routes ⊆ admin_routes` by
/// prefix containment (the admin login page lives under the admin tree);
/// the evaluator checks admin-guest membership separately so that exception
/// overrides the blanket admin rule.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    guest_routes: Vec<String>,
    admin_routes: Vec<String>,
    admin_guest_routes: Vec<String>,
    role_aware_redirects: bool,
}

impl AccessPolicy {
    pub fn new(config: &PolicyConfig) -> Self {
        Self {
            guest_routes: config.guest_routes.clone(),
            admin_routes: config.admin_routes.clone(),
            admin_guest_routes: config.admin_guest_routes.clone(),
            role_aware_redirects: config.role_aware_redirects,
        }
    }

    /// evaluate
    ///
    /// Decides what to do with a request for `path` made by `identity`.
    /// `path` is the URL path only, without query string; prefixes are
    /// matched against it exactly as configured (no trailing-slash
    /// normalization happens here).
    ///
    /// The rules below are evaluated in order and the first match wins:
    ///
    /// 1. Authenticated visitor on a guest route (login, register, password
    ///    recovery): bounce to their landing page.
    /// 2. Authenticated visitor on the admin login page: same bounce.
    /// 3. Any other admin route: unauthenticated visitors go to the admin
    ///    login; authenticated non-admins (role-aware mode) go to the
    ///    consumer home; admins pass.
    /// 4. Everything else passes.
    pub fn evaluate(&self, path: &str, identity: &IdentityContext) -> Evaluation {
        let is_guest_route = matches_prefix(&self.guest_routes, path);
        let is_admin_route = matches_prefix(&self.admin_routes, path);
        let is_admin_guest_route = matches_prefix(&self.admin_guest_routes, path);

        // Guest-facing pages must never be served from cache, whether the
        // request is allowed through or redirected away.
        let attach_no_cache_headers = is_guest_route || is_admin_guest_route;

        let decision = if identity.is_authenticated() && is_guest_route {
            Decision::Redirect(self.guest_bounce_target(identity).to_string())
        } else if identity.is_authenticated() && is_admin_guest_route {
            Decision::Redirect(self.admin_guest_bounce_target(identity).to_string())
        } else if is_admin_route && !is_admin_guest_route {
            if !identity.is_authenticated() {
                Decision::Redirect(ADMIN_LOGIN.to_string())
            } else if self.role_aware_redirects && !identity.is_admin() {
                // Unknown roles land here too: "not provably admin" is
                // treated the same as "not admin".
                Decision::Redirect(HOME.to_string())
            } else {
                Decision::Allow
            }
        } else {
            Decision::Allow
        };

        Evaluation {
            decision,
            attach_no_cache_headers,
        }
    }

    /// Where an authenticated visitor caught on a guest route is sent.
    /// Role-aware mode routes admins to their dashboard; otherwise everyone
    /// shares the consumer landing page.
    fn guest_bounce_target(&self, identity: &IdentityContext) -> &'static str {
        if self.role_aware_redirects && identity.is_admin() {
            ADMIN_HOME
        } else {
            HOME
        }
    }

    /// Where an authenticated visitor caught on the admin login page is
    /// sent. The role-unaware variant assumes anyone who got this far is an
    /// admin and sends them to the dashboard; see
    /// `PolicyConfig::role_aware_redirects` for the authorization gap that
    /// assumption carries.
    fn admin_guest_bounce_target(&self, identity: &IdentityContext) -> &'static str {
        if !self.role_aware_redirects || identity.is_admin() {
            ADMIN_HOME
        } else {
            HOME
        }
    }
}

fn matches_prefix(prefixes: &[String], path: &str) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix.as_str()))
}
