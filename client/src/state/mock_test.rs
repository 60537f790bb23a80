use super::*;

#[test]
fn history_is_in_pipeline_order() {
    let positions: Vec<usize> =
        verification_history().iter().filter_map(|e| e.status.pipeline_position()).collect();
    assert_eq!(positions.len(), 6);
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn tracked_asset_is_mid_verification() {
    let asset = tracked_asset();
    assert_eq!(asset.verification_status, VerificationStatus::Verifying);
    assert!(verification_history().iter().any(|e| e.status == asset.verification_status));
}

#[test]
fn loan_balance_matches_repaid_amount() {
    let loan = active_loan();
    assert!((loan.total_owed - loan.repaid_amount - loan.remaining_balance).abs() < f64::EPSILON);
}

#[test]
fn dashboard_agrees_with_appraisal() {
    let result = verification_result();
    assert!((DASHBOARD_STATS.total_asset_value - result.appraisal.appraised_value).abs() < f64::EPSILON);
    assert!((portfolio()[0].loan_amount - active_loan().principal_amount).abs() < f64::EPSILON);
}
