//! Landing page; greets the signed-in user.

use leptos::prelude::*;

use crate::state::session::Session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let greeting = move || {
        session.with(|session| {
            if session.is_logged_in {
                format!("Welcome back, {}.", session.name)
            } else {
                "Welcome to the UTM timetable.".to_owned()
            }
        })
    };

    view! {
        <div class="page page--home">
            <h1>"Home"</h1>
            <p class="page__lead">{greeting}</p>
        </div>
    }
}
