//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::guard::RouteGuard;
use crate::pages::{
    admin::AdminPage, analysis::AnalysisPage, courses::CoursesPage, home::HomePage,
    lecturer::LecturerPage, login::LoginPage, student_class_time::StudentClassTimePage,
    students::StudentsPage, timetable::TimetablePage, venue::VenuePage,
};
use crate::state::session::Session;

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The route
/// list below must stay in sync with the table in [`crate::routes`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Seeded from persisted storage before the first render, so a reloaded
    // tab starts with its token and matric number already in place.
    let session = RwSignal::new(Session::from_storage());
    provide_context(session);

    view! {
        <Title text="UTM Timetable"/>

        <Router>
            <NavBar/>
            <RouteGuard/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("home") view=HomePage/>
                    <Route path=StaticSegment("timetable") view=TimetablePage/>
                    <Route path=StaticSegment("courses") view=CoursesPage/>
                    <Route path=StaticSegment("subject-analysis") view=AnalysisPage/>
                    <Route path=StaticSegment("student-analysis") view=StudentClassTimePage/>
                    <Route path=StaticSegment("venue") view=VenuePage/>
                    <Route path=StaticSegment("lecturer") view=LecturerPage/>
                    <Route path=StaticSegment("students") view=StudentsPage/>
                    <Route path=StaticSegment("admin") view=AdminPage/>
                </Routes>
            </main>
        </Router>
    }
}
