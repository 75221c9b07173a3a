//! Gated download page for the desktop installers.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::RouteAccess;

use crate::util::auth::{gate_allows, gate_placeholder, install_route_guard, use_session_mirror};

const ACCESS: RouteAccess = RouteAccess::AuthenticatedOnly;

pub const CURRENT_VERSION: &str = "1.0.0";

/// One downloadable installer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Release {
    pub platform: &'static str,
    pub requirement: &'static str,
    pub url: &'static str,
    /// Suggested local file name for the browser's save dialog.
    pub file_name: &'static str,
}

pub const RELEASES: [Release; 2] = [
    Release {
        platform: "Windows",
        requirement: "Download Imsdly for Windows 10 and above",
        url: "https://michalpuchalski.pl/downloads/file.exe",
        file_name: "imsdly-windows.exe",
    },
    Release {
        platform: "macOS",
        requirement: "Download Imsdly for macOS 10.15 and above",
        url: "https://michalpuchalski.pl/downloads/file1.exe",
        file_name: "imsdly-macos.exe",
    },
];

impl Release {
    pub fn button_label(&self) -> String {
        format!("Download for {}", self.platform)
    }
}

#[component]
fn ReleaseCard(release: Release) -> impl IntoView {
    view! {
        <div class="release-card">
            <h2 class="release-card__platform">{release.platform}</h2>
            <p class="release-card__requirement">{release.requirement}</p>
            <a
                class="btn btn--primary btn--block"
                href=release.url
                download=release.file_name
                target="_blank"
                rel="noopener noreferrer"
            >
                {release.button_label()}
            </a>
            <p class="release-card__version">{format!("Version {CURRENT_VERSION}")}</p>
        </div>
    }
}

#[component]
pub fn DownloadPage() -> impl IntoView {
    let auth = use_session_mirror();
    install_route_guard(auth, ACCESS, use_navigate());

    move || {
        let state = auth.get();
        if !gate_allows(ACCESS, &state) {
            return view! {
                <div class="page-placeholder">
                    <div class="spinner" aria-hidden="true"></div>
                    <p>{gate_placeholder(&state)}</p>
                </div>
            }
            .into_any();
        }
        view! {
            <div class="download-page">
                <div class="download-page__intro">
                    <h1>"Download Imsdly"</h1>
                    <p>"Choose your platform below to download the latest version of Imsdly"</p>
                </div>
                <div class="release-grid">
                    {RELEASES.iter().map(|r| view! { <ReleaseCard release=*r/> }).collect::<Vec<_>>()}
                </div>
            </div>
        }
        .into_any()
    }
}
