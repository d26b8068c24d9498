use std::convert::Infallible;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{HeaderMap, header, request::Parts},
};

use crate::{
    config::AppConfig,
    policy::{IdentityContext, Role},
};

// --- Cookie Names ---

// These match what the frontends set at login. The backend API validates the
// token contents; this layer only cares whether the cookies exist.

/// Short-lived session token cookie.
pub const ACCESS_COOKIE_NAME: &str = "accessToken";
/// Long-lived renewal token cookie.
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";
/// Role hint cookie, only consulted in role-aware mode.
pub const ROLE_COOKIE_NAME: &str = "user_role";

/// get_cookie
///
/// Looks up a single cookie value across all `Cookie` headers on the
/// request. Pairs that do not parse as `name=value` are skipped rather than
/// treated as an error; a malformed cookie header simply means the cookie is
/// absent.
pub fn get_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            (key.trim() == name).then_some(value.trim())
        })
        .next()
}

/// resolve
///
/// Derives the per-request `IdentityContext` from the request headers.
/// Tokens with empty values count as absent (a cleared cookie often survives
/// as `accessToken=` until it expires). When `role_aware` is false the role
/// cookie is not read at all, matching the variant of the policy that has no
/// role hint available.
pub fn resolve(headers: &HeaderMap, role_aware: bool) -> IdentityContext {
    let has_value =
        |name: &str| get_cookie(headers, name).is_some_and(|value| !value.is_empty());

    IdentityContext {
        access_token_present: has_value(ACCESS_COOKIE_NAME),
        refresh_token_present: has_value(REFRESH_COOKIE_NAME),
        role: if role_aware {
            get_cookie(headers, ROLE_COOKIE_NAME).and_then(Role::parse)
        } else {
            None
        },
    }
}

/// IdentityContext Extractor Implementation
///
/// Lets handlers take the resolved identity as a function argument, the same
/// way the guard middleware sees it. Unlike a token-validating extractor this
/// one never rejects: missing or malformed cookies produce an anonymous
/// identity, so the rejection type is `Infallible`.
impl<S> FromRequestParts<S> for IdentityContext
where
    S: Send + Sync,
    // Needed to know whether the role cookie should be consulted.
    AppConfig: FromRef<S>,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);
        Ok(resolve(
            &parts.headers,
            config.policy.role_aware_redirects,
        ))
    }
}
