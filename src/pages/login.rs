//! Login page exchanging a matric number and password for a session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{self, AuthPayload};
use crate::routes::PATH_HOME;
use crate::state::session::{LoginFields, Role, Session};
use crate::storage;

fn normalize_matric_no(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

/// Validate form input. The matric number is trimmed and uppercased; the
/// password is taken verbatim.
fn validate_login_input(matric_no: &str, password: &str) -> Result<(String, String), &'static str> {
    let matric_no = normalize_matric_no(matric_no);
    if matric_no.is_empty() || password.is_empty() {
        return Err("Enter both matric number and password.");
    }
    Ok((matric_no, password.to_owned()))
}

/// Map a backend payload onto a signed-in session record.
fn session_fields_from_payload(payload: &AuthPayload) -> Result<LoginFields, String> {
    let role = payload.user_role.parse::<Role>().map_err(|e| e.to_string())?;
    Ok(LoginFields {
        matric_no: payload.login_name.clone(),
        name: payload.full_name.clone(),
        description: payload.description.clone(),
        role,
        is_logged_in: true,
        session_token: Some(payload.session_id.clone()),
    })
}

/// Persist the parts of a fresh login that survive a page reload.
fn persist_session(fields: &LoginFields) {
    if let Some(token) = &fields.session_token {
        storage::set(storage::KEY_SESSION_TOKEN, token);
    }
    storage::set(storage::KEY_MATRIC_NO, &fields.matric_no);
    if fields.role == Role::Admin {
        storage::set(storage::KEY_IS_ADMIN, "1");
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    // Prefilled from the persisted matric number, which logout keeps.
    let matric_no = RwSignal::new(session.with_untracked(|session| session.matric_no.clone()));
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (matric_value, password_value) =
            match validate_login_input(&matric_no.get(), &password.get()) {
                Ok(values) => values,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let fields = match api::authenticate(&matric_value, &password_value).await {
                Ok(payload) => session_fields_from_payload(&payload),
                Err(e) => Err(e),
            };
            match fields {
                Ok(fields) => {
                    persist_session(&fields);
                    let mut applied = Ok(());
                    session.update(|session| applied = session.login(fields));
                    match applied {
                        Ok(()) => navigate(PATH_HOME, NavigateOptions::default()),
                        Err(e) => {
                            info.set(format!("Login failed: {e}"));
                            busy.set(false);
                        }
                    }
                }
                Err(e) => {
                    info.set(format!("Login failed: {e}"));
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"UTM Timetable"</h1>
                <p class="login-card__subtitle">"Sign in with your UTM identity"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Matric number"
                        prop:value=move || matric_no.get()
                        on:input=move |ev| matric_no.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
