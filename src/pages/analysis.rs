//! Subject enrolment analysis.

use leptos::prelude::*;

#[component]
pub fn AnalysisPage() -> impl IntoView {
    view! {
        <div class="page page--analysis">
            <h1>"Subject Analysis"</h1>
            <p class="page__lead">"Enrolment breakdown by subject and section."</p>
        </div>
    }
}
