//! Venue directory and availability.

use leptos::prelude::*;

#[component]
pub fn VenuePage() -> impl IntoView {
    view! {
        <div class="page page--venue">
            <h1>"Venues"</h1>
            <p class="page__lead">"Lecture rooms and their weekly occupancy."</p>
        </div>
    }
}
