//! Tabbed sign-in / sign-up form.
//!
//! Provider error messages are shown verbatim. A sign-up that still needs
//! email confirmation shows a prompt instead of signing the user in.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use leptos::prelude::*;
use session::{AuthError, SessionClient, SignUpOutcome};

pub const MIN_PASSWORD_CHARS: usize = 6;
pub const CONFIRMATION_MESSAGE: &str = "Check your email for the confirmation link.";
pub const SIGNED_UP_MESSAGE: &str = "Account created. You are now signed in.";
const SIGN_IN_FALLBACK: &str = "Invalid login credentials";
const SIGN_UP_FALLBACK: &str = "An error occurred during sign up";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    SignIn,
    SignUp,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignUpInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Trim and require both sign-in fields.
pub fn validate_sign_in(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Trim and require every sign-up field.
pub fn validate_sign_up(full_name: &str, email: &str, password: &str) -> Result<SignUpInput, &'static str> {
    let full_name = full_name.trim();
    let email = email.trim();
    if full_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in your name, email, and password.");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 6 characters.");
    }
    Ok(SignUpInput { full_name: full_name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Message shown after a successful sign-up.
pub fn sign_up_message(outcome: &SignUpOutcome) -> &'static str {
    match outcome {
        SignUpOutcome::PendingConfirmation { .. } => CONFIRMATION_MESSAGE,
        SignUpOutcome::Session(_) => SIGNED_UP_MESSAGE,
    }
}

/// Provider messages pass through; anything else gets the tab's generic text.
pub fn error_text(tab: AuthTab, err: &AuthError) -> String {
    if err.is_provider() {
        return err.to_string();
    }
    match tab {
        AuthTab::SignIn => SIGN_IN_FALLBACK.to_owned(),
        AuthTab::SignUp => SIGN_UP_FALLBACK.to_owned(),
    }
}

pub fn submit_label(tab: AuthTab, busy: bool) -> &'static str {
    match (tab, busy) {
        (AuthTab::SignIn, false) => "Sign In",
        (AuthTab::SignIn, true) => "Signing In...",
        (AuthTab::SignUp, false) => "Create Account",
        (AuthTab::SignUp, true) => "Creating Account...",
    }
}

#[component]
pub fn AuthForm() -> impl IntoView {
    let client = expect_context::<SessionClient>();
    let navigate = leptos_router::hooks::use_navigate();

    let tab = RwSignal::new(AuthTab::SignIn);
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let message = RwSignal::new(None::<String>);

    let switch_tab = move |next: AuthTab| {
        tab.set(next);
        error.set(None);
        message.set(None);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(None);
        message.set(None);
        let current = tab.get_untracked();
        let client = client.clone();

        match current {
            AuthTab::SignIn => {
                let (email_value, password_value) =
                    match validate_sign_in(&email.get_untracked(), &password.get_untracked()) {
                        Ok(v) => v,
                        Err(e) => {
                            error.set(Some(e.to_owned()));
                            return;
                        }
                    };
                busy.set(true);
                let navigate = navigate.clone();

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    match client.sign_in_with_password(&email_value, &password_value).await {
                        Ok(_) => navigate(session::routes::HOME, leptos_router::NavigateOptions::default()),
                        Err(e) => {
                            let _ = error.try_set(Some(error_text(AuthTab::SignIn, &e)));
                        }
                    }
                    let _ = busy.try_set(false);
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (client, navigate, email_value, password_value);
                }
            }
            AuthTab::SignUp => {
                let input = match validate_sign_up(
                    &full_name.get_untracked(),
                    &email.get_untracked(),
                    &password.get_untracked(),
                ) {
                    Ok(v) => v,
                    Err(e) => {
                        error.set(Some(e.to_owned()));
                        return;
                    }
                };
                busy.set(true);

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let metadata = session::UserMetadata { full_name: Some(input.full_name) };
                    match client.sign_up(&input.email, &input.password, &metadata).await {
                        Ok(outcome) => {
                            let _ = message.try_set(Some(sign_up_message(&outcome).to_owned()));
                        }
                        Err(e) => {
                            let _ = error.try_set(Some(error_text(AuthTab::SignUp, &e)));
                        }
                    }
                    let _ = busy.try_set(false);
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (client, input);
                }
            }
        }
    };

    let tab_class = move |which: AuthTab| {
        if tab.get() == which { "auth-tabs__tab auth-tabs__tab--active" } else { "auth-tabs__tab" }
    };

    view! {
        <div class="auth-form">
            <div class="auth-tabs" role="tablist">
                <button
                    type="button"
                    role="tab"
                    class=move || tab_class(AuthTab::SignIn)
                    on:click=move |_| switch_tab(AuthTab::SignIn)
                >
                    "Sign In"
                </button>
                <button
                    type="button"
                    role="tab"
                    class=move || tab_class(AuthTab::SignUp)
                    on:click=move |_| switch_tab(AuthTab::SignUp)
                >
                    "Sign Up"
                </button>
            </div>

            <form class="auth-form__fields" on:submit=on_submit>
                <Show when=move || tab.get() == AuthTab::SignUp>
                    <label class="auth-form__label" for="full-name">"Full Name"</label>
                    <input
                        id="full-name"
                        class="auth-form__input"
                        type="text"
                        placeholder="John Doe"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </Show>

                <label class="auth-form__label" for="email">"Email"</label>
                <input
                    id="email"
                    class="auth-form__input"
                    type="email"
                    placeholder="you@example.com"
                    autocomplete="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />

                <label class="auth-form__label" for="password">"Password"</label>
                <div class="auth-form__password">
                    <input
                        id="password"
                        class="auth-form__input"
                        type=move || if show_password.get() { "text" } else { "password" }
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button
                        type="button"
                        class="auth-form__reveal"
                        on:click=move |_| show_password.update(|v| *v = !*v)
                    >
                        {move || if show_password.get() { "Hide" } else { "Show" }}
                    </button>
                </div>

                <Show when=move || error.get().is_some()>
                    <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || message.get().is_some()>
                    <p class="auth-form__message">{move || message.get().unwrap_or_default()}</p>
                </Show>

                <button class="btn btn--primary auth-form__submit" type="submit" disabled=move || busy.get()>
                    {move || submit_label(tab.get(), busy.get())}
                </button>
            </form>
        </div>
    }
}
