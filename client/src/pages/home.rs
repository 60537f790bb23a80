//! Dashboard: portfolio stats, owned assets, recent activity.

use leptos::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::main_layout::{MainLayout, crumbs};
use crate::components::status_badge::StatusBadge;
use crate::state::mock::{DASHBOARD_STATS, portfolio, recent_activity};
use crate::util::format::{format_us_date, format_usd};

#[component]
pub fn HomePage() -> impl IntoView {
    let stats = DASHBOARD_STATS;
    let assets = portfolio();
    let has_assets = !assets.is_empty();

    let asset_cards = assets
        .into_iter()
        .map(|asset| {
            view! {
                <div class="asset-row">
                    <div class="asset-row__head">
                        <h3>{asset.name}</h3>
                        <StatusBadge status=asset.status />
                    </div>
                    <p class="muted small">{format!("Asset ID: {}", asset.id)}</p>
                    <div class="grid grid--3">
                        <div><p class="muted small">"Asset Value"</p><p class="figure--accent">{format_usd(asset.value)}</p></div>
                        <div><p class="muted small">"Loan Amount"</p><p>{format_usd(asset.loan_amount)}</p></div>
                        <div><p class="muted small">"Next Payment"</p><p>{asset.next_payment}</p></div>
                    </div>
                    <div class="asset-row__actions">
                        <a class="btn btn--outline btn--sm" href="/assets/status">"View Details"</a>
                        <a class="btn btn--accent btn--sm" href="/repayment">"Make Payment"</a>
                    </div>
                </div>
            }
        })
        .collect_view();

    let activity = recent_activity()
        .into_iter()
        .map(|a| {
            let date = format_us_date(a.timestamp).unwrap_or_else(|| a.timestamp.to_owned());
            view! {
                <div class="activity">
                    <div>
                        <p class="activity__title">{a.description}</p>
                        <p class="muted small">{date}</p>
                    </div>
                    {(a.amount > 0.0).then(|| view! { <span class="activity__amount">{format_usd(a.amount)}</span> })}
                </div>
            }
        })
        .collect_view();

    view! {
        <MainLayout breadcrumbs=crumbs(&[("Dashboard", "/")])>
            <div class="page">
                <section class="hero">
                    <h1>"Welcome to ChainCredit"</h1>
                    <p class="muted">"Transform your physical assets into instant liquidity through blockchain tokenization"</p>
                    <div class="hero__actions">
                        <a class="btn btn--accent btn--lg" href="/assets/register">"+ Register New Asset"</a>
                        <a class="btn btn--outline btn--lg" href="/wallet-demo">"View Wallet"</a>
                    </div>
                </section>

                <div class="grid grid--4">
                    <GlassCard hover=true>
                        <p class="muted">"Total Asset Value"</p>
                        <p class="figure figure--accent">{format_usd(stats.total_asset_value)}</p>
                    </GlassCard>
                    <GlassCard hover=true>
                        <p class="muted">"Active Loans"</p>
                        <p class="figure">{stats.active_loans}</p>
                        <p class="muted small">"All in good standing"</p>
                    </GlassCard>
                    <GlassCard hover=true>
                        <p class="muted">"Available Credit"</p>
                        <p class="figure figure--success">{format_usd(stats.available_credit)}</p>
                        <p class="muted small">"70% LTV on assets"</p>
                    </GlassCard>
                    <GlassCard hover=true>
                        <p class="muted">"Total Repaid"</p>
                        <p class="figure">{format_usd(stats.total_repaid)}</p>
                    </GlassCard>
                </div>

                <div class="grid grid--main">
                    <GlassCard gradient=true>
                        <div class="card-heading">
                            <h2>"Your Assets"</h2>
                            <a class="btn btn--ghost btn--sm" href="/assets/register">"+ Add New"</a>
                        </div>
                        {asset_cards}
                        {(!has_assets).then(|| view! {
                            <div class="empty">
                                <h3>"No Assets Yet"</h3>
                                <p class="muted">"Start by registering your first asset"</p>
                                <a class="btn btn--accent" href="/assets/register">"Register Asset"</a>
                            </div>
                        })}
                    </GlassCard>

                    <div class="stack">
                        <GlassCard title="Quick Actions">
                            <div class="stack stack--tight">
                                <a class="btn btn--outline btn--block" href="/assets/register">"Register New Asset"</a>
                                <a class="btn btn--outline btn--block" href="/assets/status">"Track Status"</a>
                                <a class="btn btn--outline btn--block" href="/repayment">"Make Payment"</a>
                            </div>
                        </GlassCard>
                        <GlassCard title="Recent Activity">{activity}</GlassCard>
                    </div>
                </div>
            </div>
        </MainLayout>
    }
}
