//! Weekly timetable screen.

use leptos::prelude::*;

#[component]
pub fn TimetablePage() -> impl IntoView {
    view! {
        <div class="page page--timetable">
            <h1>"Timetable"</h1>
            <p class="page__lead">"Your class schedule for the current session."</p>
        </div>
    }
}
