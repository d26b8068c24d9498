use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{AppState, identity, policy::Decision};

// The exact header set the frontends attach to guest pages. `no-store` alone
// covers modern browsers; the rest keep proxies and legacy HTTP/1.0 caches
// from replaying authenticated pages after logout.
const NO_CACHE_CONTROL: &str = "no-store, no-cache, must-revalidate, proxy-revalidate";

/// guard_middleware
///
/// The enforcement half of the access policy: runs once per request, derives
/// the visitor's identity from cookies, asks the evaluator what to do, and
/// either forwards the request down the pipeline or answers with a 307
/// redirect to the decided target. 307 preserves the request method, which
/// is what the frontends' middleware emits as well.
///
/// When the evaluation calls for it, the cache-busting headers are attached
/// to whichever response goes out, allowed or redirected.
pub async fn guard_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    // uri.path() carries no query string, matching how the prefix lists are
    // authored.
    let path = request.uri().path().to_owned();
    let identity = identity::resolve(
        request.headers(),
        state.config.policy.role_aware_redirects,
    );
    let evaluation = state.policy.evaluate(&path, &identity);

    let mut response = match &evaluation.decision {
        Decision::Allow => next.run(request).await,
        Decision::Redirect(target) => {
            tracing::debug!(
                path = %path,
                target = %target,
                authenticated = identity.is_authenticated(),
                "access policy redirect"
            );
            Redirect::temporary(target).into_response()
        }
    };

    if evaluation.attach_no_cache_headers {
        apply_no_cache_headers(response.headers_mut());
    }

    response
}

/// Attaches the cache-busting header set to a response. `insert` overwrites
/// anything a handler already set for the same names; guest pages must not
/// be cacheable no matter what the handler thinks.
pub fn apply_no_cache_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static(NO_CACHE_CONTROL),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
}
