//! Account page hosting sign-in, sign-up and the signed-in profile card.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::components::user_auth_form::UserAuthForm;

/// Public route: signed-in visitors see their profile card here rather than
/// being redirected away.
#[component]
pub fn AuthPage() -> impl IntoView {
    view! {
        <Title text="Authentication - Imsdly"/>
        <Meta name="description" content="Sign in or create an account for Imsdly"/>
        <div class="auth-page">
            <div class="auth-page__intro">
                <h1>"Account"</h1>
                <p>
                    "Sign in to your Imsdly account or create a new one to manage your licenses and downloads"
                </p>
            </div>
            <div class="auth-page__panel">
                <UserAuthForm/>
            </div>
        </div>
    }
}
