//! Account panel: the signed-in profile card, or the auth form.

use leptos::prelude::*;
use session::SessionClient;

use crate::components::auth_form::AuthForm;
use crate::util::auth::{sign_out, use_session_mirror};

pub fn verification_label(verified: bool) -> &'static str {
    if verified { "Email verified" } else { "Email not verified" }
}

#[component]
pub fn UserAuthForm() -> impl IntoView {
    let client = expect_context::<SessionClient>();
    let auth = use_session_mirror();

    move || {
        let state = auth.get();
        if state.loading {
            return view! {
                <div class="account-panel account-panel--loading">
                    <div class="spinner" aria-label="Loading"></div>
                </div>
            }
            .into_any();
        }
        let Some(user) = state.user.clone() else {
            return view! { <AuthForm/> }.into_any();
        };

        let client = client.clone();
        view! {
            <div class="account-panel">
                <div class="profile-card">
                    <div class="profile-card__avatar">{state.initial()}</div>
                    <div class="profile-card__identity">
                        <h3 class="profile-card__name">{state.display_name()}</h3>
                        <p class="profile-card__email">{state.email()}</p>
                    </div>
                </div>
                <p class="profile-card__status">{verification_label(user.email_verified())}</p>
                <button class="btn btn--outline profile-card__sign-out" on:click=move |_| sign_out(client.clone())>
                    "Sign Out"
                </button>
            </div>
        }
        .into_any()
    }
}
