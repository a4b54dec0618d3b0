#![cfg(not(target_arch = "wasm32"))]

use super::*;
use crate::routes::ROUTES;

fn auth_meta() -> RouteMeta {
    RouteMeta {
        requires_auth: true,
        role: None,
    }
}

fn role_meta(role: Role) -> RouteMeta {
    RouteMeta {
        requires_auth: false,
        role: Some(role),
    }
}

// ============================================================================
// Auth rule
// ============================================================================

#[test]
fn auth_routes_redirect_to_login_without_token() {
    for entry in ROUTES.iter().filter(|entry| entry.meta.requires_auth) {
        assert_eq!(
            evaluate(entry.meta, None, Role::None),
            GuardOutcome::Redirect(PATH_LOGIN),
            "{} must demand a token",
            entry.path
        );
    }
}

#[test]
fn empty_token_counts_as_absent() {
    assert_eq!(
        evaluate(auth_meta(), Some(""), Role::Student),
        GuardOutcome::Redirect(PATH_LOGIN)
    );
}

#[test]
fn auth_route_proceeds_with_token() {
    assert_eq!(
        evaluate(auth_meta(), Some("tok"), Role::None),
        GuardOutcome::Proceed
    );
}

#[test]
fn open_routes_proceed_without_token() {
    for entry in ROUTES.iter().filter(|entry| !entry.meta.requires_auth) {
        assert_eq!(
            evaluate(entry.meta, None, Role::None),
            GuardOutcome::Proceed,
            "{} must stay open",
            entry.path
        );
    }
}

#[test]
fn whitespace_token_counts_as_present() {
    // Only the empty string folds to "absent"; no trimming is applied.
    assert_eq!(
        evaluate(auth_meta(), Some(" "), Role::None),
        GuardOutcome::Proceed
    );
}

// ============================================================================
// Role rule
// ============================================================================

#[test]
fn matching_role_proceeds() {
    assert_eq!(
        evaluate(role_meta(Role::Admin), None, Role::Admin),
        GuardOutcome::Proceed
    );
}

#[test]
fn student_hitting_admin_route_goes_home() {
    assert_eq!(
        evaluate(role_meta(Role::Admin), None, Role::Student),
        GuardOutcome::Redirect(PATH_HOME)
    );
}

#[test]
fn admin_hitting_student_route_goes_to_admin_console() {
    assert_eq!(
        evaluate(role_meta(Role::Student), None, Role::Admin),
        GuardOutcome::Redirect(PATH_ADMIN)
    );
}

#[test]
fn roleless_session_hitting_role_route_goes_to_root() {
    assert_eq!(
        evaluate(role_meta(Role::Student), None, Role::None),
        GuardOutcome::Redirect(PATH_ROOT)
    );
}

// ============================================================================
// Rule ordering
// ============================================================================

#[test]
fn auth_rule_wins_over_role_rule() {
    let meta = RouteMeta {
        requires_auth: true,
        role: Some(Role::Admin),
    };
    // No token: the login redirect fires before the role check is reached.
    assert_eq!(
        evaluate(meta, None, Role::Student),
        GuardOutcome::Redirect(PATH_LOGIN)
    );
}

#[test]
fn role_rule_applies_once_auth_passes() {
    let meta = RouteMeta {
        requires_auth: true,
        role: Some(Role::Admin),
    };
    assert_eq!(
        evaluate(meta, Some("tok"), Role::Student),
        GuardOutcome::Redirect(PATH_HOME)
    );
}

#[test]
fn unrestricted_meta_always_proceeds() {
    assert_eq!(
        evaluate(RouteMeta::default(), None, Role::None),
        GuardOutcome::Proceed
    );
    assert_eq!(
        evaluate(RouteMeta::default(), Some("tok"), Role::Admin),
        GuardOutcome::Proceed
    );
}
