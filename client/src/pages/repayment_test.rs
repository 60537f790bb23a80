use super::*;

#[test]
fn demo_schedule_has_twelve_monthly_installments() {
    let schedule = demo_schedule();
    assert_eq!(schedule.len(), 12);
    assert_eq!(schedule[0].payment_number, 1);
    assert_eq!(schedule[0].due_date, "2024-12-20");
    assert_eq!(schedule[1].due_date, "2025-01-20");
    assert_eq!(schedule[11].due_date, "2025-11-20");
    assert!(schedule.iter().all(|p| p.status == PaymentStatus::Pending && p.paid_at.is_none()));
}

#[test]
fn installments_split_into_principal_and_interest() {
    for p in demo_schedule() {
        assert!((p.principal + p.interest - p.amount).abs() < f64::EPSILON);
        assert!((p.amount - 1025.0).abs() < f64::EPSILON);
    }
}

#[test]
fn partial_payment_preview() {
    let preview = preview_payment("1025", &active_loan());
    assert!(!preview.is_full_payment);
    assert_eq!(format_usd_cents(preview.remaining_after), "$11,506.00");
    assert!(preview.early_payment_savings.abs() < f64::EPSILON);
}

#[test]
fn payment_at_or_above_balance_is_full() {
    let loan = active_loan();
    assert!(preview_payment("12531", &loan).is_full_payment);
    assert!(preview_payment("20000", &loan).is_full_payment);
    assert!(!preview_payment("12530.99", &loan).is_full_payment);
}

#[test]
fn unparsable_amount_counts_as_zero() {
    let loan = active_loan();
    let preview = preview_payment("abc", &loan);
    assert!(preview.amount.abs() < f64::EPSILON);
    assert!((preview.remaining_after - loan.remaining_balance).abs() < f64::EPSILON);
}

#[test]
fn pay_button_disabled_while_processing_or_non_positive() {
    assert!(can_submit_payment(1025.0, false));
    assert!(!can_submit_payment(1025.0, true));
    assert!(!can_submit_payment(0.0, false));
    assert!(!can_submit_payment(-10.0, false));
}

#[test]
fn receipt_is_a_confirmed_repayment() {
    let tx = payment_receipt(&active_loan(), 1025.0);
    assert_eq!(tx.kind, TransactionKind::Repayment);
    assert_eq!(tx.status, TransactionStatus::Confirmed);
    assert_eq!(tx.id, "LOAN-2024-001-PMT");
}
