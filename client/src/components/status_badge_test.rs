use super::*;

#[test]
fn unknown_status_string_has_no_descriptor() {
    assert_eq!(describe_raw("mystery"), None);
    assert_eq!(describe_raw(""), None);
    assert_eq!(describe_raw("In-Transit"), None);
}

#[test]
fn every_verification_status_has_a_label() {
    for status in VerificationStatus::ALL {
        let descriptor = describe(status.into());
        assert!(!descriptor.label.is_empty(), "{status:?}");
    }
}

#[test]
fn spinning_only_for_in_progress_verification_steps() {
    let spinning: Vec<VerificationStatus> =
        VerificationStatus::ALL.into_iter().filter(|s| describe((*s).into()).spin).collect();
    assert_eq!(
        spinning,
        vec![VerificationStatus::InTransit, VerificationStatus::Verifying, VerificationStatus::Appraising]
    );
    for status in LoanStatus::ALL {
        assert!(!describe(status.into()).spin);
    }
}

#[test]
fn raw_strings_resolve_to_either_family() {
    let tokenized = describe_raw("tokenized").unwrap();
    assert_eq!(tokenized.label, "Tokenized");
    assert_eq!(tokenized.icon, BadgeIcon::Check);

    let overdue = describe_raw("overdue").unwrap();
    assert_eq!(overdue.label, "Overdue");
    assert_eq!(overdue.variant, BadgeVariant::Destructive);
}

#[test]
fn rejected_and_defaulted_are_destructive() {
    assert_eq!(describe(VerificationStatus::Rejected.into()).variant, BadgeVariant::Destructive);
    assert_eq!(describe(LoanStatus::Defaulted.into()).variant, BadgeVariant::Destructive);
    assert_eq!(describe(VerificationStatus::Draft.into()).variant, BadgeVariant::Outline);
}

#[test]
fn badge_class_appends_extra_classes() {
    let descriptor = describe(LoanStatus::Active.into());
    assert_eq!(
        badge_class(&descriptor, "status-badge--large"),
        "status-badge status-badge--default status-badge--success status-badge--large"
    );
    assert_eq!(badge_class(&descriptor, ""), "status-badge status-badge--default status-badge--success");
}
