//! Live-status view of a submitted asset.

use leptos::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::main_layout::{MainLayout, crumbs};
use crate::components::status_badge::StatusBadge;
use crate::components::timeline::Timeline;
use crate::state::mock::{PAWNSHOP, TRACKING_NUMBER, status_messages, tracked_asset, verification_history};
use crate::state::verification::build_timeline;
use crate::util::format::{format_us_date, format_usd};

const NEXT_STEPS: [&str; 4] = [
    "Appraisal completion (24-48 hours)",
    "Final value determination",
    "Tokenization eligibility approval",
    "Receive notification to proceed",
];

#[component]
pub fn AssetStatusPage() -> impl IntoView {
    let asset = tracked_asset();
    let events = build_timeline(&verification_history(), asset.verification_status);
    let messages = status_messages();
    let message_count = messages.len();
    let submitted = asset.submitted_at.as_deref().and_then(format_us_date).unwrap_or_default();

    view! {
        <MainLayout breadcrumbs=crumbs(&[("Assets", "/assets/status"), ("Status", "/assets/status")])>
            <div class="page">
                <div class="page__header page__header--row">
                    <div>
                        <h1>{asset.name.clone()}</h1>
                        <p class="muted">{format!("Asset ID: {}", asset.id)}</p>
                    </div>
                    <StatusBadge status=asset.verification_status class="status-badge--large" />
                </div>

                <div class="grid grid--3">
                    <GlassCard>
                        <p class="muted">"Estimated Value"</p>
                        <p class="figure figure--accent">{format_usd(asset.estimated_value)}</p>
                    </GlassCard>
                    <GlassCard>
                        <p class="muted">"Tracking Number"</p>
                        <p class="figure mono">{TRACKING_NUMBER}</p>
                    </GlassCard>
                    <GlassCard>
                        <p class="muted">"Submitted"</p>
                        <p class="figure">{submitted}</p>
                    </GlassCard>
                </div>

                <div class="grid grid--main">
                    <GlassCard gradient=true>
                        <div class="card-heading">
                            <h2>"Verification Timeline"</h2>
                            <span class="pill pill--live">"Live Updates"</span>
                        </div>
                        <Timeline events=events />
                        <div class="callout">
                            <h3>"Current Status: Physical Verification"</h3>
                            <p class="muted">
                                "Our certified appraiser is conducting a thorough examination of your asset, "
                                "including authenticity verification, condition assessment, and detailed "
                                "documentation. This process typically takes 1-2 business days."
                            </p>
                        </div>
                    </GlassCard>

                    <div class="stack">
                        <GlassCard title="Partner Pawnshop" description="Verified & Trusted">
                            <div class="kv-list">
                                <div><span class="muted">"Name"</span><span>{PAWNSHOP.name}</span></div>
                                <div><span class="muted">"Location"</span><span>{PAWNSHOP.location}</span></div>
                                <div><span class="muted">"License"</span><span class="mono">{PAWNSHOP.license}</span></div>
                            </div>
                        </GlassCard>

                        <GlassCard>
                            <div class="card-heading">
                                <h3>"Updates & Messages"</h3>
                                <span class="pill">{message_count}</span>
                            </div>
                            {messages
                                .into_iter()
                                .map(|m| {
                                    view! {
                                        <div class="message" class:message--unread=!m.is_read>
                                            <p class="message__from">{m.from}</p>
                                            <p class="muted small">{m.message}</p>
                                            <p class="muted small">{m.timestamp}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </GlassCard>

                        <GlassCard title="What Happens Next?">
                            <ul class="steps-list">
                                {NEXT_STEPS.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
                            </ul>
                        </GlassCard>
                    </div>
                </div>
            </div>
        </MainLayout>
    }
}
