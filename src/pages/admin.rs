//! Administration console; shows the signed-in identity.

use leptos::prelude::*;

use crate::state::session::Session;

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let identity = move || {
        session.with(|session| {
            format!("Signed in as {} ({})", session.matric_no, session.description)
        })
    };

    view! {
        <div class="page page--admin">
            <h1>"Administration"</h1>
            <p class="page__lead">{identity}</p>
        </div>
    }
}
