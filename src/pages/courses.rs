//! Course catalogue browser.

use leptos::prelude::*;

#[component]
pub fn CoursesPage() -> impl IntoView {
    view! {
        <div class="page page--courses">
            <h1>"Courses"</h1>
            <p class="page__lead">"Browse courses offered in the current session."</p>
        </div>
    }
}
