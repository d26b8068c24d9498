use axum::{Router, extract::FromRef, http::HeaderName, middleware};

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Core policy components.
pub mod config;
pub mod guard;
pub mod identity;
pub mod policy;

// Demo page surface the guard is exercised against.
pub mod handlers;
pub mod models;
pub mod routes;

use config::Env;
use policy::AccessPolicy;
use routes::{admin, guest, site};

// --- Public Re-exports ---

// Makes core state types easily accessible to the main application entry
// point (main.rs) and to the integration tests.
pub use config::{AppConfig, PolicyConfig};

/// AppState
///
/// The single, thread-safe, immutable container shared across all incoming
/// requests: the loaded configuration plus the access policy compiled from
/// it. The policy is built once here so no request pays for cloning route
/// lists out of the config.
#[derive(Clone)]
pub struct AppState {
    /// The loaded, immutable environment configuration.
    pub config: AppConfig,
    /// The route-access-control policy evaluator.
    pub policy: AccessPolicy,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> Self {
        let policy = AccessPolicy::new(&config.policy);
        Self { config, policy }
    }
}

// Allows extractors (the IdentityContext extractor in particular) to pull
// the config out of the shared state.
impl FromRef<AppState> for AppConfig {
    fn from_ref(app_state: &AppState) -> AppConfig {
        app_state.config.clone()
    }
}

/// create_router
///
/// Assembles the application's routing structure, applies the guard and the
/// observability layers, and registers the application state.
pub fn create_router(state: AppState) -> Router {
    // The role-unaware variant cannot verify that an authenticated identity
    // reaching admin pages is actually an admin; it relies on the backend
    // API rejecting the first data call with a 403. Surfacing this loudly is
    // deliberate: whether that gap is acceptable is a deployment decision,
    // not something this layer papers over.
    if state.config.env == Env::Production && !state.config.policy.role_aware_redirects {
        tracing::warn!(
            "role-aware redirects disabled in production: non-admin identities \
             can render admin pages until the backend API rejects them"
        );
    }

    // 1. CORS Configuration
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    // Header name constant for request correlation.
    let x_request_id = HeaderName::from_static("x-request-id");

    // 2. Base Router Assembly
    // The guard wraps the entire page tree: classification happens on the
    // full request path, so even routes the policy does not mention pass
    // through it (and come out untouched).
    let base_router = Router::new()
        .merge(site::site_routes())
        .merge(guest::guest_routes())
        .nest("/admin", admin::admin_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            guard::guard_middleware,
        ))
        .with_state(state);

    // 3. Observability and Correlation Layers (applied outermost)
    base_router
        .layer(
            ServiceBuilder::new()
                // 3a. Request ID Generation: a unique UUID per request.
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                // 3b. Request Tracing: wraps the request/response lifecycle
                // in a span carrying the generated request ID.
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                // 3c. Request ID Propagation: returns x-request-id to the
                // client.
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        // 4. CORS Layer
        .layer(cors)
}

/// trace_span_logger
///
/// Customizes the `TraceLayer` span so every log line for a single request
/// is correlated by the `x-request-id` header alongside method and URI.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
