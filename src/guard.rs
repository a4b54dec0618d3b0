//! Navigation guard evaluated before every route transition.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components render whatever the router resolves; access control sits
//! here, in one place, keyed off the route table's metadata. The guard either
//! lets a navigation proceed or redirects it. It has no error case and never
//! writes storage.
//!
//! DESIGN
//! ======
//! The auth rule consults persisted storage directly while the role rule
//! consults the in-memory session. Immediately after a reload the two can
//! disagree (a persisted token with a not-yet-refreshed session); the guard
//! preserves that asymmetry rather than reconciling it.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::{PATH_ADMIN, PATH_HOME, PATH_LOGIN, PATH_ROOT, RouteMeta, route_meta};
use crate::state::session::{Role, Session};
use crate::storage;

/// Outcome of evaluating the guard for a navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardOutcome {
    /// The navigation may proceed.
    Proceed,
    /// The navigation is redirected to the given path instead.
    Redirect(&'static str),
}

/// Decide whether a navigation to a route with `meta` may proceed.
///
/// Rules, in order:
/// 1. A route that requires auth redirects to the login page unless a
///    non-empty token sits in persisted storage.
/// 2. A route that requires a role redirects on mismatch, to the target
///    for the session's own role (`Student`: home, `Admin`: admin console,
///    `None`: root).
///
/// Anything else proceeds. Missing or empty inputs count as "not
/// authenticated" / "no role"; there is no error case.
#[must_use]
pub fn evaluate(
    meta: RouteMeta,
    persisted_token: Option<&str>,
    session_role: Role,
) -> GuardOutcome {
    let token_present = persisted_token.is_some_and(|token| !token.is_empty());
    if meta.requires_auth && !token_present {
        return GuardOutcome::Redirect(PATH_LOGIN);
    }

    if let Some(required) = meta.role {
        if session_role != required {
            return GuardOutcome::Redirect(match session_role {
                Role::Student => PATH_HOME,
                Role::Admin => PATH_ADMIN,
                Role::None => PATH_ROOT,
            });
        }
    }

    GuardOutcome::Proceed
}

/// Re-evaluate the guard on every navigation and apply redirects.
///
/// The session role is read untracked: the guard runs once per navigation,
/// not on every store mutation.
pub fn install_route_guard<F>(session: RwSignal<Session>, pathname: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = pathname.get();
        let token = storage::get(storage::KEY_SESSION_TOKEN);
        let role = session.with_untracked(|session| session.role);
        let outcome = evaluate(route_meta(&path), token.as_deref(), role);
        if let GuardOutcome::Redirect(target) = outcome {
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Headless component mounting the guard inside the router.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();
    let navigate = use_navigate();
    install_route_guard(session, location.pathname, navigate);
}
