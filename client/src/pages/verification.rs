//! Verification result: appraisal outcome and the loan it unlocks.

#[cfg(test)]
#[path = "verification_test.rs"]
mod verification_test;

use leptos::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::main_layout::{MainLayout, crumbs};
use crate::components::status_badge::StatusBadge;
use crate::state::mock::{LOAN_OFFER, PAWNSHOP, tokenized_asset, verification_result};
use crate::state::wallet::chain_name;
use crate::util::format::{format_percent, format_usd, format_us_date};

/// Loan-to-value ratio applied to the appraised value.
pub const LOAN_TO_VALUE: f64 = 0.70;

/// Percentage change from the owner's estimate to the appraisal. A zero
/// estimate yields `0.0` rather than infinity.
pub fn value_increase_pct(estimated: f64, appraised: f64) -> f64 {
    if estimated == 0.0 {
        return 0.0;
    }
    (appraised - estimated) / estimated * 100.0
}

pub fn max_loan(appraised: f64) -> f64 {
    (appraised * LOAN_TO_VALUE).round()
}

/// `+10.0%` / `-4.2%`.
pub fn signed_percent(value: f64) -> String {
    if value >= 0.0 { format!("+{}", format_percent(value)) } else { format_percent(value) }
}

#[component]
pub fn VerificationPage() -> impl IntoView {
    let result = verification_result();
    let token = tokenized_asset();
    let appraisal = result.appraisal.clone();
    let increase = value_increase_pct(result.estimated_value, appraisal.appraised_value);
    let loan_amount = max_loan(appraisal.appraised_value);
    let verified_on = format_us_date(&appraisal.verification_date).unwrap_or_else(|| appraisal.verification_date.clone());

    view! {
        <MainLayout breadcrumbs=crumbs(&[("Assets", "/assets/status"), ("Verification Result", "/assets/verification")])>
            <div class="page">
                <GlassCard gradient=true class="banner banner--success">
                    <div class="banner__row">
                        <div>
                            <h1>"Asset Approved!"</h1>
                            <p class="muted">"Your asset has been successfully verified and is eligible for tokenization"</p>
                        </div>
                        <StatusBadge status=result.status class="status-badge--large" />
                    </div>
                </GlassCard>

                <div class="grid grid--2">
                    <GlassCard gradient=true title="Professional Appraisal">
                        <p class="muted">"Your Estimated Value"</p>
                        <p class="figure figure--struck">{format_usd(result.estimated_value)}</p>
                        <p class="muted">"Appraised Value"</p>
                        <div class="figure-row">
                            <p class="figure figure--xl figure--accent">{format_usd(appraisal.appraised_value)}</p>
                            <span class="pill pill--success">{signed_percent(increase)}</span>
                        </div>
                        <div class="kv-grid">
                            <div><p class="muted">"Condition"</p><p>{appraisal.condition.label()}</p></div>
                            <div><p class="muted">"Authenticity"</p><p>{result.authenticity}</p></div>
                            <div><p class="muted">"Certificate"</p><p class="mono">{result.certificate_id}</p></div>
                            <div><p class="muted">"Verified"</p><p>{verified_on}</p></div>
                        </div>
                    </GlassCard>

                    <GlassCard title="Verification Details">
                        <div class="kv-list">
                            <div><span class="muted">"Pawnshop"</span><span>{appraisal.pawnshop_name.clone()}</span></div>
                            <div><span class="muted">"Verifier"</span><span>{appraisal.verifier_name.clone()}</span></div>
                            <div><span class="muted">"License"</span><span class="mono">{PAWNSHOP.license}</span></div>
                            <div><span class="muted">"Rating"</span><span>{format!("{:.1} / 5.0", result.pawnshop_rating)}</span></div>
                        </div>
                        <p class="muted">"Appraiser Notes"</p>
                        <p class="notes">{appraisal.notes.clone()}</p>
                    </GlassCard>
                </div>

                <GlassCard gradient=true title="Available Liquidity" description="Borrow against your tokenized asset">
                    <div class="grid grid--4">
                        <div>
                            <p class="muted">"Maximum Loan"</p>
                            <p class="figure figure--accent">{format_usd(loan_amount)}</p>
                            <p class="muted small">{format!("{:.0}% LTV", LOAN_TO_VALUE * 100.0)}</p>
                        </div>
                        <div><p class="muted">"Interest Rate"</p><p class="figure">{format!("{}% APR", LOAN_OFFER.interest_rate)}</p></div>
                        <div><p class="muted">"Term"</p><p class="figure">{format!("{} months", LOAN_OFFER.term_months)}</p></div>
                        <div><p class="muted">"Monthly Payment"</p><p class="figure">{format_usd(LOAN_OFFER.monthly_payment)}</p></div>
                    </div>
                    <a class="btn btn--accent" href="/repayment">"Tokenize & Get Loan"</a>
                </GlassCard>

                <GlassCard title="How Tokenization Works">
                    <ol class="steps-list">
                        <li>"Your asset stays in insured custody at the partner pawnshop."</li>
                        <li>{format!("A {} token ({}) represents it on {}.", token.token_symbol, token.token_id, chain_name(token.chain_id))}</li>
                        <li>"The token is locked as collateral while the loan is active."</li>
                        <li>"Repay the loan to release the token and retrieve your asset."</li>
                    </ol>
                </GlassCard>
            </div>
        </MainLayout>
    }
}
