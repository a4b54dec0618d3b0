//! Top navigation bar with route links and session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::{
    PATH_ADMIN, PATH_COURSES, PATH_HOME, PATH_LECTURER, PATH_LOGIN, PATH_ROOT,
    PATH_STUDENT_ANALYSIS, PATH_STUDENTS, PATH_SUBJECT_ANALYSIS, PATH_TIMETABLE, PATH_VENUE,
};
use crate::state::session::{Role, Session};

/// Navigation bar shown on every screen.
///
/// Links are plain anchors; the navigation guard owns access control, so the
/// bar hides nothing beyond the admin console link.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let signed_in = move || session.with(|session| session.is_logged_in);
    let is_admin = move || session.with(|session| session.role == Role::Admin);

    let on_logout = Callback::new(move |_| {
        session.update(|session| session.logout());
        navigate(PATH_LOGIN, NavigateOptions::default());
    });

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href=PATH_ROOT>"UTM Timetable"</a>
            <div class="nav-bar__links">
                <a href=PATH_HOME>"Home"</a>
                <a href=PATH_TIMETABLE>"Timetable"</a>
                <a href=PATH_COURSES>"Courses"</a>
                <a href=PATH_SUBJECT_ANALYSIS>"Subject Analysis"</a>
                <a href=PATH_STUDENT_ANALYSIS>"Student Analysis"</a>
                <a href=PATH_VENUE>"Venues"</a>
                <a href=PATH_LECTURER>"Lecturers"</a>
                <a href=PATH_STUDENTS>"Students"</a>
                <Show when=is_admin>
                    <a href=PATH_ADMIN>"Admin"</a>
                </Show>
            </div>
            <Show
                when=signed_in
                fallback=|| {
                    view! {
                        <a class="nav-bar__action" href=PATH_LOGIN>
                            "Login"
                        </a>
                    }
                }
            >
                <button class="nav-bar__action" on:click=move |_| on_logout.run(())>
                    "Logout"
                </button>
            </Show>
        </nav>
    }
}
