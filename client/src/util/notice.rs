//! Home-page call-to-action handling and the sign-in notice timeline.
//!
//! Anonymous visitors who click a purchase/download button get an inline
//! notice instead of a navigation. The notice is fully visible for four
//! seconds, fades for one, then disappears. Each click starts a new
//! generation so timers from an earlier click cannot cut a later notice short.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use std::time::Duration;

use session::{SessionStatus, routes};

pub const FADE_AFTER: Duration = Duration::from_millis(4000);
pub const HIDE_AFTER: Duration = Duration::from_millis(5000);

/// Section the "Buy Now" buttons scroll to.
pub const PRICING_SECTION_ID: &str = "pricing";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cta {
    DownloadTrial,
    Buy,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CtaAction {
    Navigate(&'static str),
    ScrollTo(&'static str),
    ShowSignInNotice,
}

/// Decide what a call-to-action click does. An unresolved session counts as
/// signed out.
pub fn resolve_cta(cta: Cta, status: SessionStatus) -> CtaAction {
    match (cta, status) {
        (Cta::DownloadTrial, SessionStatus::Authenticated) => CtaAction::Navigate(routes::DOWNLOAD),
        (Cta::Buy, SessionStatus::Authenticated) => CtaAction::ScrollTo(PRICING_SECTION_ID),
        (_, SessionStatus::Loading | SessionStatus::Anonymous) => CtaAction::ShowSignInNotice,
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticePhase {
    #[default]
    Hidden,
    Visible,
    Fading,
}

impl NoticePhase {
    /// Phase of a notice shown `elapsed` ago.
    pub fn at(elapsed: Duration) -> Self {
        if elapsed < FADE_AFTER {
            Self::Visible
        } else if elapsed < HIDE_AFTER {
            Self::Fading
        } else {
            Self::Hidden
        }
    }

    pub fn is_shown(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Opacity modifier class for the notice element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Fading | Self::Hidden => "signin-notice signin-notice--fading",
            Self::Visible => "signin-notice",
        }
    }
}

/// Where a notice is rendered: next to the button that raised it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeSpot {
    #[default]
    Hero,
    Pricing,
}

/// Notice phase plus the generation and placement of the click that produced it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub phase: NoticePhase,
    pub generation: u64,
    pub spot: NoticeSpot,
}

impl NoticeState {
    /// Show the notice from the start at `spot`; returns the new generation.
    pub fn show(&mut self, spot: NoticeSpot) -> u64 {
        self.generation += 1;
        self.phase = NoticePhase::Visible;
        self.spot = spot;
        self.generation
    }

    /// Whether the notice is currently rendered at `spot`.
    pub fn is_shown_at(&self, spot: NoticeSpot) -> bool {
        self.phase.is_shown() && self.spot == spot
    }

    /// Move to `phase` if no newer click superseded `generation`.
    pub fn advance(&mut self, generation: u64, phase: NoticePhase) -> bool {
        if generation != self.generation {
            return false;
        }
        self.phase = phase;
        true
    }
}
