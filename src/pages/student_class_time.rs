//! Per-student class time analysis.

use leptos::prelude::*;

#[component]
pub fn StudentClassTimePage() -> impl IntoView {
    view! {
        <div class="page page--student-analysis">
            <h1>"Student Analysis"</h1>
            <p class="page__lead">"Class time distribution for a student."</p>
        </div>
    }
}
