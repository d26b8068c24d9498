use portal_guard::{
    config::PolicyConfig,
    policy::{ADMIN_HOME, ADMIN_LOGIN, AccessPolicy, Decision, HOME, IdentityContext, Role},
};

// --- Helper Functions ---

fn role_aware_policy() -> AccessPolicy {
    AccessPolicy::new(&PolicyConfig::default())
}

fn role_unaware_policy() -> AccessPolicy {
    let config = PolicyConfig {
        role_aware_redirects: false,
        ..PolicyConfig::default()
    };
    AccessPolicy::new(&config)
}

fn anonymous() -> IdentityContext {
    IdentityContext::anonymous()
}

fn authenticated(role: Option<Role>) -> IdentityContext {
    IdentityContext {
        access_token_present: true,
        refresh_token_present: false,
        role,
    }
}

fn redirect(target: &str) -> Decision {
    Decision::Redirect(target.to_string())
}

// --- Unmatched Paths ---

#[test]
fn test_unmatched_paths_always_allow_without_no_cache() {
    let policy = role_aware_policy();
    let identities = [
        anonymous(),
        authenticated(None),
        authenticated(Some(Role::User)),
        authenticated(Some(Role::Admin)),
    ];

    for path in ["/", "/profile", "/bookings", "/venues/42", "/health"] {
        for identity in &identities {
            let evaluation = policy.evaluate(path, identity);
            assert_eq!(evaluation.decision, Decision::Allow, "path {path}");
            assert!(!evaluation.attach_no_cache_headers, "path {path}");
        }
    }
}

#[test]
fn test_prefix_matching_is_case_sensitive() {
    let policy = role_aware_policy();
    // "/Login" does not match the "/login" prefix, so it is unclassified.
    let evaluation = policy.evaluate("/Login", &authenticated(Some(Role::User)));
    assert_eq!(evaluation.decision, Decision::Allow);
    assert!(!evaluation.attach_no_cache_headers);
}

// --- Guest Routes ---

#[test]
fn test_guest_route_allows_anonymous_with_no_cache() {
    let policy = role_aware_policy();
    let evaluation = policy.evaluate("/login", &anonymous());
    assert_eq!(evaluation.decision, Decision::Allow);
    assert!(evaluation.attach_no_cache_headers);
}

#[test]
fn test_guest_routes_never_allow_authenticated_identities() {
    let policy = role_aware_policy();
    let identities = [
        authenticated(None),
        authenticated(Some(Role::User)),
        authenticated(Some(Role::Admin)),
    ];

    for path in ["/login", "/register", "/forgot-password", "/reset-password"] {
        for identity in &identities {
            let evaluation = policy.evaluate(path, identity);
            assert!(
                matches!(evaluation.decision, Decision::Redirect(_)),
                "expected redirect for {path}"
            );
            assert!(evaluation.attach_no_cache_headers, "path {path}");
        }
    }
}

#[test]
fn test_guest_route_redirect_targets_depend_on_role() {
    let policy = role_aware_policy();

    let user = policy.evaluate("/login", &authenticated(Some(Role::User)));
    assert_eq!(user.decision, redirect(HOME));

    let admin = policy.evaluate("/login", &authenticated(Some(Role::Admin)));
    assert_eq!(admin.decision, redirect(ADMIN_HOME));

    // No role cookie at all still bounces, to the consumer home.
    let unknown = policy.evaluate("/login", &authenticated(None));
    assert_eq!(unknown.decision, redirect(HOME));
}

#[test]
fn test_guest_prefix_covers_subpaths() {
    let policy = role_aware_policy();
    let evaluation = policy.evaluate("/forgot-password/step-2", &authenticated(Some(Role::User)));
    assert_eq!(evaluation.decision, redirect(HOME));
    assert!(evaluation.attach_no_cache_headers);
}

// --- Admin Routes ---

#[test]
fn test_admin_route_requires_authentication() {
    let policy = role_aware_policy();
    for path in ["/admin", "/admin/bookings", "/admin/customers"] {
        let evaluation = policy.evaluate(path, &anonymous());
        assert_eq!(evaluation.decision, redirect(ADMIN_LOGIN), "path {path}");
        assert!(!evaluation.attach_no_cache_headers, "path {path}");
    }
}

#[test]
fn test_admin_route_allows_authenticated_admin() {
    let policy = role_aware_policy();
    let evaluation = policy.evaluate("/admin/bookings", &authenticated(Some(Role::Admin)));
    assert_eq!(evaluation.decision, Decision::Allow);
    assert!(!evaluation.attach_no_cache_headers);
}

#[test]
fn test_admin_route_bounces_authenticated_non_admin_to_home() {
    let policy = role_aware_policy();

    let user = policy.evaluate("/admin/bookings", &authenticated(Some(Role::User)));
    assert_eq!(user.decision, redirect(HOME));

    // An unknown role degrades to "not admin".
    let unknown = policy.evaluate("/admin/customers", &authenticated(None));
    assert_eq!(unknown.decision, redirect(HOME));
}

#[test]
fn test_admin_prefix_covers_subpaths() {
    let policy = role_aware_policy();
    let evaluation = policy.evaluate("/admin/bookings/42/details", &anonymous());
    assert_eq!(evaluation.decision, redirect(ADMIN_LOGIN));
}

// --- Admin-Guest Exception ---

#[test]
fn test_admin_login_is_reachable_while_unauthenticated() {
    // The admin-guest carve-out must override the blanket admin rule,
    // otherwise the login page would redirect to itself.
    let policy = role_aware_policy();
    let evaluation = policy.evaluate("/admin/login", &anonymous());
    assert_eq!(evaluation.decision, Decision::Allow);
    assert!(evaluation.attach_no_cache_headers);
}

#[test]
fn test_admin_login_bounces_authenticated_admin_to_dashboard() {
    let policy = role_aware_policy();
    let evaluation = policy.evaluate("/admin/login", &authenticated(Some(Role::Admin)));
    assert_eq!(evaluation.decision, redirect(ADMIN_HOME));
    assert!(evaluation.attach_no_cache_headers);
}

#[test]
fn test_admin_login_bounces_authenticated_user_to_home() {
    let policy = role_aware_policy();
    let evaluation = policy.evaluate("/admin/login", &authenticated(Some(Role::User)));
    assert_eq!(evaluation.decision, redirect(HOME));
}

// --- Role-Unaware Variant ---

#[test]
fn test_role_unaware_guest_bounce_goes_to_single_landing() {
    let policy = role_unaware_policy();
    // Even an identity that claims admin via cookie lands on the consumer
    // home: the variant reads no role at all.
    let evaluation = policy.evaluate("/login", &authenticated(Some(Role::Admin)));
    assert_eq!(evaluation.decision, redirect(HOME));
}

#[test]
fn test_role_unaware_admin_login_assumes_admin() {
    let policy = role_unaware_policy();
    let evaluation = policy.evaluate("/admin/login", &authenticated(None));
    assert_eq!(evaluation.decision, redirect(ADMIN_HOME));
}

#[test]
fn test_role_unaware_admin_routes_admit_any_authenticated_identity() {
    // The documented authorization gap of the weaker variant: no role check
    // happens, the backend API is expected to 403 the first data call.
    let policy = role_unaware_policy();
    let evaluation = policy.evaluate("/admin/bookings", &authenticated(None));
    assert_eq!(evaluation.decision, Decision::Allow);
}

#[test]
fn test_role_unaware_still_requires_authentication_for_admin_routes() {
    let policy = role_unaware_policy();
    let evaluation = policy.evaluate("/admin/bookings", &anonymous());
    assert_eq!(evaluation.decision, redirect(ADMIN_LOGIN));
}

// --- Identity Derivation Semantics ---

#[test]
fn test_refresh_token_alone_counts_as_authenticated() {
    let policy = role_aware_policy();
    let identity = IdentityContext {
        access_token_present: false,
        refresh_token_present: true,
        role: Some(Role::User),
    };
    let evaluation = policy.evaluate("/login", &identity);
    assert_eq!(evaluation.decision, redirect(HOME));
}

#[test]
fn test_evaluation_is_idempotent() {
    let policy = role_aware_policy();
    let identity = authenticated(Some(Role::Admin));

    for path in ["/login", "/admin/login", "/admin/bookings", "/profile"] {
        let first = policy.evaluate(path, &identity);
        let second = policy.evaluate(path, &identity);
        assert_eq!(first, second, "path {path}");
    }
}

// --- Custom Prefix Configuration ---

#[test]
fn test_custom_route_lists_are_honored() {
    let config = PolicyConfig {
        guest_routes: vec!["/signin".to_string()],
        admin_routes: vec!["/backoffice".to_string()],
        admin_guest_routes: vec!["/backoffice/signin".to_string()],
        role_aware_redirects: true,
    };
    let policy = AccessPolicy::new(&config);

    // The default names no longer classify.
    let old_login = policy.evaluate("/login", &authenticated(Some(Role::User)));
    assert_eq!(old_login.decision, Decision::Allow);
    assert!(!old_login.attach_no_cache_headers);

    // The custom names do.
    let signin = policy.evaluate("/signin", &authenticated(Some(Role::User)));
    assert_eq!(signin.decision, redirect(HOME));

    let backoffice = policy.evaluate("/backoffice/reports", &anonymous());
    assert_eq!(backoffice.decision, redirect(ADMIN_LOGIN));

    let backoffice_signin = policy.evaluate("/backoffice/signin", &anonymous());
    assert_eq!(backoffice_signin.decision, Decision::Allow);
    assert!(backoffice_signin.attach_no_cache_headers);
}
