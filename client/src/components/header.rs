//! Site header with section navigation and the account menu.

use leptos::prelude::*;
use session::{SessionClient, routes};

use crate::util::auth::{sign_out, use_session_mirror};

/// In-page sections linked from the header nav.
pub const NAV_SECTIONS: [(&str, &str); 4] = [
    ("Features", "/#features"),
    ("How It Works", "/#how-it-works"),
    ("Devices", "/#devices"),
    ("Pricing", "/#pricing"),
];

/// Sticky header. Shows a placeholder until the session resolves, then
/// either the user menu or a sign-in link.
#[component]
pub fn Header() -> impl IntoView {
    let client = expect_context::<SessionClient>();
    let auth = use_session_mirror();
    let menu_open = RwSignal::new(false);

    let account = move || {
        let state = auth.get();
        if state.loading {
            return view! { <div class="site-header__placeholder" aria-hidden="true"></div> }.into_any();
        }
        if state.user.is_none() {
            return view! {
                <a class="btn btn--primary" href=routes::AUTH>"Sign In"</a>
            }
            .into_any();
        }

        let client = client.clone();
        let name = state.display_name().unwrap_or_default();
        let menu_name = name.clone();
        let email = state.email();
        view! {
            <div class="account-menu">
                <button
                    class="btn btn--primary account-menu__trigger"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {name}
                </button>
                <Show when=move || menu_open.get()>
                    <div class="account-menu__content" on:click=move |_| menu_open.set(false)>
                        <div class="account-menu__label">
                            <p class="account-menu__name">{menu_name.clone()}</p>
                            <p class="account-menu__email">{email.clone()}</p>
                        </div>
                        <hr class="account-menu__separator"/>
                        <a class="account-menu__item" href=routes::DASHBOARD>"Dashboard"</a>
                        <a class="account-menu__item" href=routes::DOWNLOAD>"Download"</a>
                        <hr class="account-menu__separator"/>
                        <button
                            class="account-menu__item account-menu__item--danger"
                            on:click={
                                let client = client.clone();
                                move |_| sign_out(client.clone())
                            }
                        >
                            "Sign out"
                        </button>
                    </div>
                </Show>
            </div>
        }
        .into_any()
    };

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <a class="site-header__brand" href=routes::HOME>
                    <img src="/imsdly_logo.png" alt="Imsdly Logo" width="30" height="30"/>
                    <span>"Imsdly"</span>
                </a>
                <nav class="site-header__nav">
                    {NAV_SECTIONS
                        .iter()
                        .map(|(label, href)| view! { <a class="site-header__link" href=*href>{*label}</a> })
                        .collect::<Vec<_>>()}
                </nav>
                <div class="site-header__account">{account}</div>
            </div>
        </header>
    }
}
