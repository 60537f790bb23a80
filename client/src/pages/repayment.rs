//! Loan repayment: summary, payment form, schedule, success screen.
//!
//! Payments are simulated. Submitting waits `PROCESSING_DELAY` and then shows
//! the receipt; the mock loan itself is never mutated.

#[cfg(test)]
#[path = "repayment_test.rs"]
mod repayment_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::glass_card::GlassCard;
use crate::components::main_layout::{MainLayout, crumbs};
use crate::components::status_badge::StatusBadge;
use crate::state::asset::{LoanDetails, PaymentStatus, RepaymentSchedule, Transaction, TransactionKind, TransactionStatus};
use crate::state::mock::active_loan;
use crate::util::dates::{add_months, format_iso_date, parse_iso_date};
use crate::util::format::{format_usd, format_usd_cents, parse_amount};

pub const PROCESSING_DELAY: Duration = Duration::from_secs(2);
pub const SCHEDULE_START: &str = "2024-12-20";
pub const INSTALLMENTS: u32 = 12;
const INSTALLMENT_AMOUNT: f64 = 1025.0;
const INSTALLMENT_PRINCIPAL: f64 = 962.5;
const INSTALLMENT_INTEREST: f64 = 62.5;

// =============================================================================
// SCHEDULE
// =============================================================================

/// Equal monthly installments starting at `start`, all pending.
pub fn installment_schedule(
    start: time::Date,
    count: u32,
    amount: f64,
    principal: f64,
    interest: f64,
) -> Vec<RepaymentSchedule> {
    (0..count)
        .map(|i| RepaymentSchedule {
            payment_number: i + 1,
            due_date: add_months(start, i).map(format_iso_date).unwrap_or_default(),
            amount,
            principal,
            interest,
            status: PaymentStatus::Pending,
            paid_at: None,
        })
        .collect()
}

pub fn demo_schedule() -> Vec<RepaymentSchedule> {
    let Some(start) = parse_iso_date(SCHEDULE_START) else {
        return Vec::new();
    };
    installment_schedule(start, INSTALLMENTS, INSTALLMENT_AMOUNT, INSTALLMENT_PRINCIPAL, INSTALLMENT_INTEREST)
}

// =============================================================================
// PAYMENT MATH
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaymentPreview {
    /// Parsed amount; unparsable input counts as zero.
    pub amount: f64,
    pub is_full_payment: bool,
    pub remaining_after: f64,
    pub early_payment_savings: f64,
}

pub fn preview_payment(raw: &str, loan: &LoanDetails) -> PaymentPreview {
    let amount = parse_amount(raw).unwrap_or(0.0);
    let is_full_payment = amount >= loan.remaining_balance;
    PaymentPreview {
        amount,
        is_full_payment,
        remaining_after: loan.remaining_balance - amount,
        early_payment_savings: if is_full_payment { loan.total_owed - loan.remaining_balance } else { 0.0 },
    }
}

pub fn can_submit_payment(amount: f64, processing: bool) -> bool {
    !processing && amount > 0.0
}

/// Simulated on-chain record of a completed payment.
pub fn payment_receipt(loan: &LoanDetails, amount: f64) -> Transaction {
    Transaction {
        id: format!("{}-PMT", loan.loan_id),
        kind: TransactionKind::Repayment,
        amount,
        currency: "USD".to_owned(),
        timestamp: SCHEDULE_START.to_owned(),
        tx_hash: Some("0xabc...def".to_owned()),
        status: TransactionStatus::Confirmed,
        from_address: None,
        to_address: None,
    }
}

fn payment_status_class(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Pending => "pill pill--muted",
        PaymentStatus::Paid => "pill pill--success",
        PaymentStatus::Overdue => "pill pill--warning",
    }
}

// =============================================================================
// PAGE
// =============================================================================

#[component]
pub fn RepaymentPage() -> impl IntoView {
    let receipt = RwSignal::new(None::<(PaymentPreview, Transaction)>);

    view! {
        <Show
            when=move || receipt.get().is_none()
            fallback=move || view! { <PaymentSuccess receipt=receipt /> }
        >
            <MainLayout breadcrumbs=crumbs(&[("Repayment", "/repayment")])>
                <PaymentWorkspace receipt=receipt />
            </MainLayout>
        </Show>
    }
}

#[component]
fn PaymentWorkspace(receipt: RwSignal<Option<(PaymentPreview, Transaction)>>) -> impl IntoView {
    let loan = active_loan();
    let next_amount = loan.next_payment_amount.unwrap_or_default();
    let remaining = loan.remaining_balance;
    let amount = RwSignal::new(next_amount.to_string());
    let processing = RwSignal::new(false);

    let preview = {
        let loan = loan.clone();
        Memo::new(move |_| preview_payment(&amount.get(), &loan))
    };

    let on_pay = {
        let loan = loan.clone();
        move |_| {
            let current = preview.get_untracked();
            if !can_submit_payment(current.amount, processing.get_untracked()) {
                return;
            }
            processing.set(true);
            let tx = payment_receipt(&loan, current.amount);

            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(PROCESSING_DELAY).await;
                log::info!("repayment of {} processed", current.amount);
                processing.try_set(false);
                receipt.try_set(Some((current, tx)));
            });
            #[cfg(not(feature = "hydrate"))]
            let _ = (tx, receipt);
        }
    };

    view! {
        <div class="page">
            <div class="page__header page__header--row">
                <div>
                    <h1>"Loan Repayment"</h1>
                    <p class="muted">{format!("Loan ID: {}", loan.loan_id)}</p>
                </div>
                <StatusBadge status=loan.status class="status-badge--large" />
            </div>

            <GlassCard gradient=true>
                <h2>{loan.asset_name.clone()}</h2>
                <p class="muted">{format!("Asset ID: {} • Token: {}", loan.asset_id, loan.token_id)}</p>
                <div class="grid grid--3">
                    <div><p class="muted">"Total Owed"</p><p class="figure">{format_usd(loan.total_owed)}</p></div>
                    <div><p class="muted">"Paid So Far"</p><p class="figure figure--success">{format_usd(loan.repaid_amount)}</p></div>
                    <div><p class="muted">"Remaining"</p><p class="figure figure--accent">{format_usd(loan.remaining_balance)}</p></div>
                </div>
                <p class="muted small">
                    {format!("{}% APR · next payment {} due {}",
                        loan.interest_rate,
                        format_usd(next_amount),
                        loan.next_payment_date.clone().unwrap_or_default())}
                </p>
            </GlassCard>

            <div class="grid grid--2">
                <GlassCard title="Make a Payment">
                    <label class="form__field">
                        <span>"Payment Amount"</span>
                        <input
                            class="input"
                            type="number"
                            prop:value=move || amount.get()
                            on:input=move |ev| amount.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="quick-fill">
                        <button class="btn btn--outline btn--sm" on:click=move |_| amount.set(next_amount.to_string())>
                            {format!("Next Payment ({})", format_usd(next_amount))}
                        </button>
                        <button class="btn btn--outline btn--sm" on:click=move |_| amount.set(remaining.to_string())>
                            {format!("Pay in Full ({})", format_usd(remaining))}
                        </button>
                    </div>

                    <div class="kv-list">
                        <div><span class="muted">"Payment Amount"</span><span>{move || format_usd(preview.get().amount)}</span></div>
                        <div>
                            <span class="muted">"New Balance"</span>
                            <span>{move || format_usd_cents(preview.get().remaining_after)}</span>
                        </div>
                        <Show when=move || preview.get().is_full_payment>
                            <div class="kv-list__highlight">
                                <span>"Early Payment Savings"</span>
                                <span>{move || format_usd_cents(preview.get().early_payment_savings)}</span>
                            </div>
                        </Show>
                    </div>

                    <button
                        class="btn btn--accent btn--block"
                        disabled=move || !can_submit_payment(preview.get().amount, processing.get())
                        on:click=on_pay
                    >
                        {move || if processing.get() { "Processing..." } else { "Confirm Payment" }}
                    </button>
                </GlassCard>

                <GlassCard title="Repayment Schedule">
                    <ScheduleList />
                </GlassCard>
            </div>
        </div>
    }
}

#[component]
fn ScheduleList() -> impl IntoView {
    demo_schedule()
        .into_iter()
        .map(|p| {
            let is_next = p.payment_number == 1;
            view! {
                <div class="schedule__row" class:schedule__row--next=is_next>
                    <span class="schedule__number">{format!("#{}", p.payment_number)}</span>
                    <span class="schedule__date">{p.due_date}</span>
                    <span class="schedule__split muted">
                        {format!("Principal {} · Interest {}", format_usd(p.principal), format_usd(p.interest))}
                    </span>
                    <span class="schedule__amount">{format_usd(p.amount)}</span>
                    <span class=payment_status_class(p.status)>{p.status.label()}</span>
                </div>
            }
        })
        .collect_view()
}

#[component]
fn PaymentSuccess(receipt: RwSignal<Option<(PaymentPreview, Transaction)>>) -> impl IntoView {
    let Some((preview, tx)) = receipt.get_untracked() else {
        return ().into_any();
    };

    view! {
        <MainLayout breadcrumbs=crumbs(&[("Repayment", "/repayment"), ("Success", "/repayment")])>
            <div class="page page--narrow">
                <GlassCard gradient=true class="success">
                    <h1>"Payment Successful!"</h1>
                    <p class="muted">"Your payment has been processed successfully"</p>
                    <div class="success__amount">
                        <p class="muted">"Payment Amount"</p>
                        <p class="figure figure--xl figure--accent">{format_usd(preview.amount)}</p>
                    </div>
                    <Show when=move || preview.is_full_payment>
                        <div class="success__full">
                            <p class="figure--success">"Loan Fully Repaid!"</p>
                            <p class="muted">"Your asset is now available for retrieval from secure storage"</p>
                        </div>
                    </Show>
                    <div class="kv-list">
                        <div><span class="muted">"Transaction Hash"</span><span class="mono">{tx.tx_hash.unwrap_or_default()}</span></div>
                        <div><span class="muted">"Remaining Balance"</span><span>{format_usd_cents(preview.remaining_after)}</span></div>
                    </div>
                    <div class="success__actions">
                        <button class="btn btn--outline" on:click=move |_| receipt.set(None)>"Make Another Payment"</button>
                        {if preview.is_full_payment {
                            view! { <a class="btn btn--success" href="/assets/status">"Retrieve Asset"</a> }.into_any()
                        } else {
                            view! { <a class="btn btn--accent" href="/">"Back to Dashboard"</a> }.into_any()
                        }}
                    </div>
                </GlassCard>
            </div>
        </MainLayout>
    }
    .into_any()
}
