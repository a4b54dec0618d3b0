//! Static route table: URL paths and their access metadata.
//!
//! DESIGN
//! ======
//! `leptos_router` owns path-to-view resolution, so the `<Routes>` block in
//! `app.rs` maps each path to its page component and this table carries the
//! access metadata the navigation guard reads. The two lists cover the same
//! paths and must stay in sync when routes are added.
//!
//! Metadata defaults to "no restriction": paths missing from the table (the
//! router renders its not-found fallback for them) behave like open routes.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Role;

/// Landing page.
pub const PATH_ROOT: &str = "/";
/// Login form; the guard's target for unauthenticated visits.
pub const PATH_LOGIN: &str = "/login";
/// Signed-in home page.
pub const PATH_HOME: &str = "/home";
/// Personal timetable page.
pub const PATH_TIMETABLE: &str = "/timetable";
/// Course catalogue browser.
pub const PATH_COURSES: &str = "/courses";
/// Per-subject enrolment analysis.
pub const PATH_SUBJECT_ANALYSIS: &str = "/subject-analysis";
/// Per-student clash analysis.
pub const PATH_STUDENT_ANALYSIS: &str = "/student-analysis";
/// Venue directory.
pub const PATH_VENUE: &str = "/venue";
/// Lecturer directory.
pub const PATH_LECTURER: &str = "/lecturer";
/// Student directory.
pub const PATH_STUDENTS: &str = "/students";
/// Administration console.
pub const PATH_ADMIN: &str = "/admin";

/// Access metadata attached to a route.
///
/// The default (`requires_auth` false, no `role`) means anyone may visit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// A persisted session token must be present to visit.
    pub requires_auth: bool,
    /// The session's role must match to visit. No current entry sets this;
    /// the guard's role rule only fires once an entry gains one.
    pub role: Option<Role>,
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Absolute URL path, no trailing slash (except the root).
    pub path: &'static str,
    /// Access metadata the navigation guard evaluates for this path.
    pub meta: RouteMeta,
}

const OPEN: RouteMeta = RouteMeta { requires_auth: false, role: None };
const AUTH: RouteMeta = RouteMeta { requires_auth: true, role: None };

/// The application's routes, defined once at startup and immutable.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: PATH_ROOT, meta: OPEN },
    RouteEntry { path: PATH_LOGIN, meta: OPEN },
    RouteEntry { path: PATH_HOME, meta: AUTH },
    RouteEntry { path: PATH_TIMETABLE, meta: AUTH },
    RouteEntry { path: PATH_COURSES, meta: OPEN },
    RouteEntry { path: PATH_SUBJECT_ANALYSIS, meta: OPEN },
    RouteEntry { path: PATH_STUDENT_ANALYSIS, meta: OPEN },
    RouteEntry { path: PATH_VENUE, meta: OPEN },
    RouteEntry { path: PATH_LECTURER, meta: OPEN },
    RouteEntry { path: PATH_STUDENTS, meta: OPEN },
    RouteEntry { path: PATH_ADMIN, meta: OPEN },
];

/// Look up the access metadata for `path`.
///
/// Trailing slashes are ignored so `/home/` resolves like `/home`. Unknown
/// paths get the unrestricted default.
#[must_use]
pub fn route_meta(path: &str) -> RouteMeta {
    let path = normalize_path(path);
    match ROUTES.iter().find(|entry| entry.path == path) {
        Some(entry) => entry.meta,
        None => RouteMeta::default(),
    }
}

/// Strip trailing slashes, keeping the bare root intact.
fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { PATH_ROOT } else { trimmed }
}
