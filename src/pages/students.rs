//! Student directory.

use leptos::prelude::*;

#[component]
pub fn StudentsPage() -> impl IntoView {
    view! {
        <div class="page page--students">
            <h1>"Students"</h1>
            <p class="page__lead">"Enrolled students for the current session."</p>
        </div>
    }
}
