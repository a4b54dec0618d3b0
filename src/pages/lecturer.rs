//! Lecturer directory.

use leptos::prelude::*;

#[component]
pub fn LecturerPage() -> impl IntoView {
    view! {
        <div class="page page--lecturer">
            <h1>"Lecturers"</h1>
            <p class="page__lead">"Teaching staff and their class loads."</p>
        </div>
    }
}
