//! Badge for verification and loan statuses.
//!
//! DESIGN
//! ======
//! The status → display mapping is an exhaustive match over
//! `BadgeStatus`, so a new workflow status cannot ship without a badge.
//! Raw strings from mock data or the URL go through `BadgeStatus::parse`;
//! anything unrecognised renders nothing.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::state::asset::{LoanStatus, VerificationStatus};

/// Either kind of status a badge can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeStatus {
    Verification(VerificationStatus),
    Loan(LoanStatus),
}

impl BadgeStatus {
    /// Verification statuses win when a wire string is shared.
    pub fn parse(raw: &str) -> Option<Self> {
        VerificationStatus::parse(raw)
            .map(Self::Verification)
            .or_else(|| LoanStatus::parse(raw).map(Self::Loan))
    }
}

impl From<VerificationStatus> for BadgeStatus {
    fn from(status: VerificationStatus) -> Self {
        Self::Verification(status)
    }
}

impl From<LoanStatus> for BadgeStatus {
    fn from(status: LoanStatus) -> Self {
        Self::Loan(status)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeIcon {
    Clock,
    Trending,
    Loader,
    Shield,
    Check,
    Cross,
    Alert,
}

impl BadgeIcon {
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Clock => "◷",
            Self::Trending => "↗",
            Self::Loader => "↻",
            Self::Shield => "⛨",
            Self::Check => "✓",
            Self::Cross => "✕",
            Self::Alert => "!",
        }
    }
}

/// Everything needed to draw one badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadgeDescriptor {
    pub label: &'static str,
    pub variant: BadgeVariant,
    pub class: &'static str,
    pub icon: BadgeIcon,
    pub spin: bool,
}

const TONE_MUTED: &str = "status-badge--muted";
const TONE_INFO: &str = "status-badge--info";
const TONE_WARNING: &str = "status-badge--warning";
const TONE_PRIMARY: &str = "status-badge--primary";
const TONE_ACCENT: &str = "status-badge--accent";
const TONE_SUCCESS: &str = "status-badge--success";
const TONE_DESTRUCTIVE: &str = "status-badge--destructive";

pub fn describe(status: BadgeStatus) -> BadgeDescriptor {
    match status {
        BadgeStatus::Verification(s) => describe_verification(s),
        BadgeStatus::Loan(s) => describe_loan(s),
    }
}

fn describe_verification(status: VerificationStatus) -> BadgeDescriptor {
    use VerificationStatus as V;
    let (label, variant, class, icon) = match status {
        V::Draft => ("Draft", BadgeVariant::Outline, TONE_MUTED, BadgeIcon::Clock),
        V::Submitted => ("Submitted", BadgeVariant::Secondary, TONE_INFO, BadgeIcon::Trending),
        V::InTransit => ("In Transit", BadgeVariant::Secondary, TONE_WARNING, BadgeIcon::Loader),
        V::AtPawnshop => ("At Pawnshop", BadgeVariant::Secondary, TONE_INFO, BadgeIcon::Shield),
        V::Verifying => ("Verifying", BadgeVariant::Secondary, TONE_PRIMARY, BadgeIcon::Loader),
        V::Appraising => ("Appraising", BadgeVariant::Secondary, TONE_ACCENT, BadgeIcon::Loader),
        V::Approved => ("Approved", BadgeVariant::Default, TONE_SUCCESS, BadgeIcon::Check),
        V::Rejected => ("Rejected", BadgeVariant::Destructive, TONE_DESTRUCTIVE, BadgeIcon::Cross),
        V::Tokenized => ("Tokenized", BadgeVariant::Default, TONE_ACCENT, BadgeIcon::Check),
    };
    let spin = matches!(status, V::InTransit | V::Verifying | V::Appraising);
    BadgeDescriptor { label, variant, class, icon, spin }
}

fn describe_loan(status: LoanStatus) -> BadgeDescriptor {
    let (label, variant, class, icon) = match status {
        LoanStatus::Active => ("Active", BadgeVariant::Default, TONE_SUCCESS, BadgeIcon::Trending),
        LoanStatus::Overdue => ("Overdue", BadgeVariant::Destructive, TONE_WARNING, BadgeIcon::Alert),
        LoanStatus::Paid => ("Paid", BadgeVariant::Default, TONE_SUCCESS, BadgeIcon::Check),
        LoanStatus::Defaulted => ("Defaulted", BadgeVariant::Destructive, TONE_DESTRUCTIVE, BadgeIcon::Cross),
    };
    BadgeDescriptor { label, variant, class, icon, spin: false }
}

/// Descriptor for a raw status string, `None` when it is not a known status.
pub fn describe_raw(raw: &str) -> Option<BadgeDescriptor> {
    BadgeStatus::parse(raw).map(describe)
}

fn badge_class(descriptor: &BadgeDescriptor, extra: &str) -> String {
    let mut class = format!("status-badge status-badge--{} {}", descriptor.variant.as_str(), descriptor.class);
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// A typed status badge.
#[component]
pub fn StatusBadge(
    #[prop(into)] status: BadgeStatus,
    #[prop(optional, into)] class: String,
    #[prop(default = true)] show_icon: bool,
) -> impl IntoView {
    let descriptor = describe(status);
    let class = badge_class(&descriptor, &class);
    view! {
        <span class=class>
            <Show when=move || show_icon>
                <span class="status-badge__icon" class:status-badge__icon--spin=descriptor.spin aria-hidden="true">
                    {descriptor.icon.glyph()}
                </span>
            </Show>
            {descriptor.label}
        </span>
    }
}

/// Badge for an untyped status string; renders nothing for unknown values.
#[component]
pub fn RawStatusBadge(#[prop(into)] status: String, #[prop(optional, into)] class: String) -> impl IntoView {
    BadgeStatus::parse(&status).map(|status| view! { <StatusBadge status=status class=class /> })
}
