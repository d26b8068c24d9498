use std::env;

/// AppConfig
///
/// Holds the application's entire configuration state. Loaded once at
/// startup, immutable afterwards, and shared across all requests through the
/// application state.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Controls log formatting.
    pub env: Env,
    // The route-access-control policy options.
    pub policy: PolicyConfig,
}

/// Env
///
/// Defines the runtime context, used to switch between human-readable local
/// logging and JSON logging for production log aggregation.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

/// PolicyConfig
///
/// The recognized options of the access policy. The three route lists are
/// ordered path prefixes matched case-sensitively against the request path;
/// list entries are authored without trailing slashes, so a `/login` prefix
/// also covers `/login/` and any subpath under it. Callers that normalize
/// paths must do so consistently with how these lists are written.
#[derive(Clone, Debug)]
pub struct PolicyConfig {
    /// Paths only unauthenticated visitors may access: login, registration,
    /// password recovery.
    pub guest_routes: Vec<String>,
    /// Paths requiring an authenticated identity with the admin role.
    pub admin_routes: Vec<String>,
    /// The admin login page: an admin-route prefix carved out for
    /// unauthenticated admin-login attempts. Must be contained (by prefix)
    /// in `admin_routes`.
    pub admin_guest_routes: Vec<String>,
    /// When true, the `user_role` cookie selects redirect targets and gates
    /// admin routes. When false the role cookie is ignored entirely: every
    /// authenticated identity reaching the admin login is assumed to be an
    /// admin, and admin routes admit any authenticated identity. That weaker
    /// variant cannot tell whether a visitor rendering admin pages actually
    /// is an admin; it relies on the backend API answering 403 on the first
    /// data call. Production deployments should leave this enabled.
    pub role_aware_redirects: bool,
}

// Defaults mirroring the portal's route map.
const DEFAULT_GUEST_ROUTES: &[&str] =
    &["/login", "/register", "/forgot-password", "/reset-password"];
const DEFAULT_ADMIN_ROUTES: &[&str] = &["/admin"];
const DEFAULT_ADMIN_GUEST_ROUTES: &[&str] = &["/admin/login"];

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            guest_routes: to_owned_list(DEFAULT_GUEST_ROUTES),
            admin_routes: to_owned_list(DEFAULT_ADMIN_ROUTES),
            admin_guest_routes: to_owned_list(DEFAULT_ADMIN_GUEST_ROUTES),
            role_aware_redirects: true,
        }
    }
}

impl PolicyConfig {
    /// from_env
    ///
    /// Reads the policy options from environment variables, falling back to
    /// the portal defaults for anything unset. The route lists are JSON
    /// string arrays (`GUEST_ROUTES='["/login","/register"]'`), which keeps
    /// an ordered list of prefixes representable in a single variable.
    ///
    /// # Panics
    /// Panics if a set variable does not parse. A policy half-read from a
    /// typo is worse than refusing to start.
    pub fn from_env() -> Self {
        Self {
            guest_routes: route_list_from_env("GUEST_ROUTES", DEFAULT_GUEST_ROUTES),
            admin_routes: route_list_from_env("ADMIN_ROUTES", DEFAULT_ADMIN_ROUTES),
            admin_guest_routes: route_list_from_env(
                "ADMIN_GUEST_ROUTES",
                DEFAULT_ADMIN_GUEST_ROUTES,
            ),
            role_aware_redirects: bool_from_env("ROLE_AWARE_REDIRECTS", true),
        }
    }
}

impl Default for AppConfig {
    /// default
    ///
    /// Provides a non-panicking AppConfig instance primarily used for test
    /// setup, without reading any environment variables.
    fn default() -> Self {
        Self {
            env: Env::Local,
            policy: PolicyConfig::default(),
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// The canonical function for initializing the application configuration
    /// at startup. Reads all parameters from environment variables and fails
    /// fast on anything malformed.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        Self {
            env,
            policy: PolicyConfig::from_env(),
        }
    }
}

fn to_owned_list(defaults: &[&str]) -> Vec<String> {
    defaults.iter().map(|prefix| prefix.to_string()).collect()
}

fn route_list_from_env(var: &str, defaults: &[&str]) -> Vec<String> {
    match env::var(var) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            panic!("FATAL: {var} must be a JSON array of path prefixes: {err}")
        }),
        Err(_) => to_owned_list(defaults),
    }
}

fn bool_from_env(var: &str, default: bool) -> bool {
    match env::var(var) {
        Ok(raw) => match raw.as_str() {
            "true" | "1" => true,
            "false" | "0" => false,
            other => panic!("FATAL: {var} must be true or false, got {other:?}"),
        },
        Err(_) => default,
    }
}
