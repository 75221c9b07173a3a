//! Marketing landing page.
//!
//! The purchase and download buttons are identity-aware: signed-in visitors
//! go to the download page or the pricing section, everyone else gets the
//! timed sign-in notice.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use session::routes;

use crate::components::footer::Footer;
use crate::state::auth::AuthState;
use crate::util::auth::use_session_mirror;
use crate::util::dom::scroll_to_id;
use crate::util::notice::{Cta, CtaAction, NoticeSpot, NoticeState, PRICING_SECTION_ID, resolve_cta};

const FEATURES: [(&str, &str); 5] = [
    (
        "Universal Compatibility",
        "Works with all external storage types including SD cards, USB drives, and external hard drives.",
    ),
    (
        "Smart Organization",
        "Automatically organize your files by date, type, or custom metadata for a perfectly structured library.",
    ),
    (
        "Batch Renaming",
        "Rename multiple files at once with custom patterns and sequential numbering to save time.",
    ),
    (
        "Verified Transfers",
        "Ensure your files transfer correctly with automatic verification and checksums for peace of mind.",
    ),
    (
        "Intuitive Interface",
        "Easy-to-use interface that makes file transfers simple for everyone with minimal learning curve.",
    ),
];

const STEPS: [(&str, &str); 5] = [
    ("Connect", "Plug in your external storage devices. Imsdly automatically detects all connected storage devices."),
    ("Select", "Choose which files to transfer. Filter by date, file type, or use the smart selection tools."),
    (
        "Organize",
        "Select where to save your files and how to organize them. Create folders by date, type, or custom rules.",
    ),
    ("Rename (Optional)", "Batch rename your files with custom patterns, sequential numbering, or based on metadata."),
    ("Transfer", "Start the transfer process. Imsdly verifies each file to ensure it's transferred correctly."),
];

const DEVICES: [&str; 4] = ["SD Cards", "USB Drives", "External SSDs", "Hard Drives"];

const PRICING_PERKS: [&str; 4] =
    ["All features included", "Free updates for life", "Use on 1 computer", "Email support"];

/// Start a fresh notice at `spot` and schedule its fade and removal.
fn show_notice(notice: RwSignal<NoticeState>, spot: NoticeSpot) {
    let Some(generation) = notice.try_update(|n| n.show(spot)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::util::notice::{FADE_AFTER, HIDE_AFTER, NoticePhase};

        gloo_timers::future::sleep(FADE_AFTER).await;
        if notice.try_update(|n| n.advance(generation, NoticePhase::Fading)) != Some(true) {
            return;
        }
        gloo_timers::future::sleep(HIDE_AFTER - FADE_AFTER).await;
        let _ = notice.try_update(|n| n.advance(generation, NoticePhase::Hidden));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = generation;
    }
}

#[component]
fn SignInNotice(notice: RwSignal<NoticeState>, auth: RwSignal<AuthState>, spot: NoticeSpot) -> impl IntoView {
    let visible = move || notice.with(|n| n.is_shown_at(spot)) && auth.with(|a| a.user.is_none());
    view! {
        <Show when=visible>
            <div class=move || notice.get().phase.class() role="status">
                <p class="signin-notice__title">"Please sign in to continue"</p>
                <p class="signin-notice__body">
                    "You need to be logged in to download or purchase the application"
                </p>
                <a class="signin-notice__link" href=routes::AUTH>"Sign in now →"</a>
            </div>
        </Show>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_session_mirror();
    let notice = RwSignal::new(NoticeState::default());
    let navigate = use_navigate();

    let on_cta = move |cta: Cta, spot: NoticeSpot| match resolve_cta(cta, auth.with_untracked(AuthState::status)) {
        CtaAction::Navigate(path) => navigate(path, NavigateOptions::default()),
        CtaAction::ScrollTo(id) => scroll_to_id(id),
        CtaAction::ShowSignInNotice => show_notice(notice, spot),
    };
    let on_download = {
        let on_cta = on_cta.clone();
        move |_: MouseEvent| on_cta(Cta::DownloadTrial, NoticeSpot::Hero)
    };
    let on_buy_hero = {
        let on_cta = on_cta.clone();
        move |_: MouseEvent| on_cta(Cta::Buy, NoticeSpot::Hero)
    };
    let on_buy_pricing = move |_: MouseEvent| on_cta(Cta::Buy, NoticeSpot::Pricing);

    view! {
        <div class="home">
            <section class="hero">
                <div class="hero__copy">
                    <h1 class="hero__title">"Import Media Files from External Storage with Ease"</h1>
                    <p class="hero__lead">
                        "Seamlessly import files from external storage devices to your computer with just a few clicks."
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn--primary" on:click=on_download>"Download Free Trial"</button>
                        <button class="btn btn--outline" on:click=on_buy_hero>"Buy Now - $30 Lifetime License"</button>
                    </div>
                    <SignInNotice notice=notice auth=auth spot=NoticeSpot::Hero/>
                </div>
                <div class="hero__media">
                    <img src="/main_app.png" alt="Imsdly App Screenshot"/>
                </div>
            </section>

            <section id="features" class="section">
                <h2 class="section__title">"Key Features"</h2>
                <p class="section__lead">"Everything you need to manage and transfer your media files efficiently"</p>
                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|(title, body)| {
                            view! {
                                <div class="feature-card">
                                    <h3>{*title}</h3>
                                    <p>{*body}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section id="how-it-works" class="section section--muted">
                <h2 class="section__title">"How It Works"</h2>
                <p class="section__lead">"Transfer your files in just five simple steps"</p>
                <ol class="steps">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(i, (title, body))| {
                            view! {
                                <li class="step">
                                    <span class="step__number">{i + 1}</span>
                                    <div>
                                        <h3>{*title}</h3>
                                        <p>{*body}</p>
                                    </div>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()}
                </ol>
            </section>

            <section id="devices" class="section">
                <h2 class="section__title">"Device Support"</h2>
                <p class="section__lead">"Compatible with all major storage types and devices"</p>
                <div class="device-grid">
                    {DEVICES
                        .iter()
                        .map(|name| view! { <div class="device-card">{*name}</div> })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section id=PRICING_SECTION_ID class="section section--muted">
                <h2 class="section__title">"Simple Pricing"</h2>
                <p class="section__lead">"One price, lifetime access, no subscriptions"</p>
                <div class="pricing-card">
                    <h3>"Lifetime License"</h3>
                    <p class="pricing-card__subtitle">"One-time payment, forever access"</p>
                    <p class="pricing-card__price">
                        <span class="pricing-card__amount">"$30"</span>
                        <span class="pricing-card__term">"one-time"</span>
                    </p>
                    <ul class="pricing-card__perks">
                        {PRICING_PERKS.iter().map(|perk| view! { <li>{*perk}</li> }).collect::<Vec<_>>()}
                    </ul>
                    <button class="btn btn--primary btn--block" on:click=on_buy_pricing>"Buy Now"</button>
                    <SignInNotice notice=notice auth=auth spot=NoticeSpot::Pricing/>
                    <p class="pricing-card__note">"30-day money-back guarantee"</p>
                </div>
            </section>

            <section class="section newsletter">
                <h2 class="section__title">"Stay Updated"</h2>
                <p class="section__lead">"Subscribe to our newsletter for updates, tips, and exclusive offers"</p>
                // Presentational only; there is no subscription backend.
                <form class="newsletter__form" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                    <input class="newsletter__input" type="email" placeholder="Enter your email"/>
                    <button class="btn btn--light" type="submit">"Subscribe"</button>
                </form>
                <p class="newsletter__note">"We respect your privacy. Unsubscribe at any time."</p>
            </section>

            <Footer/>
        </div>
    }
}
