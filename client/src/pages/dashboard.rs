//! Gated account dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Anonymous visitors are redirected to `/auth` once the session resolves;
//! nothing below the placeholder renders before then. The profile form writes
//! the display name back to the provider and shows the new name immediately.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::{RouteAccess, SessionClient, routes};

use crate::components::user_auth_form::verification_label;
use crate::state::auth::AuthState;
use crate::util::auth::{gate_allows, gate_placeholder, install_route_guard, sign_out, use_session_mirror};

const ACCESS: RouteAccess = RouteAccess::AuthenticatedOnly;

/// `YYYY-MM-DD` part of an ISO 8601 timestamp, or "Unknown".
pub fn member_since(created_at: Option<&str>) -> String {
    let Some(date) = created_at.and_then(|ts| ts.get(..10)) else {
        return "Unknown".to_owned();
    };
    let well_formed = date.bytes().enumerate().all(|(i, b)| match i {
        4 | 7 => b == b'-',
        _ => b.is_ascii_digit(),
    });
    if well_formed { date.to_owned() } else { "Unknown".to_owned() }
}

pub fn greeting(state: &AuthState) -> String {
    format!("Welcome back, {}", state.display_name().unwrap_or_default())
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let client = expect_context::<SessionClient>();
    let auth = use_session_mirror();
    install_route_guard(auth, ACCESS, use_navigate());

    let name_input = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let saved = RwSignal::new(false);

    // Prefill the name field the first time a user is known.
    Effect::new(move || {
        let current = auth.with(|a| a.user.as_ref().and_then(|u| u.user_metadata.full_name.clone()));
        if let Some(name) = current {
            if name_input.get_untracked().is_empty() {
                name_input.set(name);
            }
        }
    });

    let on_save = {
        let client = client.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if saving.get_untracked() {
                return;
            }
            saving.set(true);
            saved.set(false);
            let client = client.clone();
            let input = name_input.get_untracked();

            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                if let Some(user) = session::profile::update_display_name(&client, &input).await {
                    let _ = auth.try_update(|a| a.replace_user(user));
                    let _ = saved.try_set(true);
                }
                let _ = saving.try_set(false);
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (client, input);
            }
        }
    };

    let content = move || {
        let state = auth.get();
        if !gate_allows(ACCESS, &state) {
            return view! {
                <div class="page-placeholder">
                    <h1>"Dashboard"</h1>
                    <p>{gate_placeholder(&state)}</p>
                </div>
            }
            .into_any();
        }

        let client = client.clone();
        let verified = state.user.as_ref().is_some_and(session::User::email_verified);
        let joined = member_since(state.user.as_ref().and_then(|u| u.created_at.as_deref()));
        view! {
            <div class="dashboard">
                <div class="dashboard__intro">
                    <h1>"Dashboard"</h1>
                    <p>{greeting(&state)}</p>
                </div>
                <div class="dashboard__grid">
                    <section class="dashboard-card">
                        <h2>"Account"</h2>
                        <dl class="dashboard-card__details">
                            <dt>"Email"</dt>
                            <dd>{state.email()}</dd>
                            <dt>"Member since"</dt>
                            <dd>{joined}</dd>
                            <dt>"Status"</dt>
                            <dd>{verification_label(verified)}</dd>
                        </dl>
                        <button class="btn btn--outline" on:click=move |_| sign_out(client.clone())>
                            "Sign Out"
                        </button>
                    </section>
                    <section class="dashboard-card">
                        <h2>"Downloads"</h2>
                        <p>"Get the latest version of Imsdly for Windows or macOS."</p>
                        <a class="btn btn--primary" href=routes::DOWNLOAD>"Go to downloads"</a>
                    </section>
                </div>
            </div>
        }
        .into_any()
    };

    view! {
        {content}
        <Show when=move || auth.with(|a| gate_allows(ACCESS, a))>
            <section class="dashboard-card dashboard-card--profile">
                <h2>"Profile"</h2>
                <form class="profile-form" on:submit=on_save.clone()>
                    <label class="auth-form__label" for="display-name">"Full Name"</label>
                    <input
                        id="display-name"
                        class="auth-form__input"
                        type="text"
                        prop:value=move || name_input.get()
                        on:input=move |ev| {
                            saved.set(false);
                            name_input.set(event_target_value(&ev));
                        }
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </button>
                    <Show when=move || saved.get()>
                        <p class="auth-form__message">"Name updated."</p>
                    </Show>
                </form>
            </section>
        </Show>
    }
}
