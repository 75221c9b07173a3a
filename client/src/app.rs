//! Root application component with routing and the session client context.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::pages::{auth::AuthPage, dashboard::DashboardPage, download::DownloadPage, home::HomePage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the one [`session::SessionClient`] for this browser context and
/// provides it to every view; views attach their own session mirrors.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::net::browser::session_client());

    view! {
        <Stylesheet id="leptos" href="/pkg/imsdly.css"/>
        <Title text="Imsdly - Import Media Files with Ease"/>
        <Meta
            name="description"
            content="Seamlessly import files from external storage devices to your computer."
        />
        <Link rel="icon" href="/imsdly_logo.png"/>

        <Router>
            <Header/>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("download") view=DownloadPage/>
                </Routes>
            </main>
        </Router>
    }
}
