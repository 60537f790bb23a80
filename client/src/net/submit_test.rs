use super::*;
use crate::state::wizard::DraftField;
use futures::executor::block_on;

fn complete_draft() -> AssetDraft {
    let mut draft = AssetDraft::default();
    draft.set(DraftField::Type, "jewelry");
    draft.set(DraftField::Name, "Rolex Submariner");
    draft.set(DraftField::Description, "18K gold");
    draft.set(DraftField::EstimatedValue, "15000");
    draft.set(DraftField::Condition, "excellent");
    draft
}

fn two_images() -> ImageSet {
    ["data:image/png;base64,AA==", "data:image/png;base64,AQ=="].into_iter().map(str::to_owned).collect()
}

#[test]
fn validate_submission_accepts_complete_draft() {
    assert!(validate_submission(&complete_draft(), &two_images()).is_empty());
}

#[test]
fn validate_submission_lists_missing_fields_and_photos() {
    let issues = validate_submission(&AssetDraft::default(), &ImageSet::new());
    assert_eq!(
        issues,
        vec![
            "Asset Type is required",
            "Asset Name is required",
            "Description is required",
            "Estimated Value is required",
            "Condition is required",
            "At least 2 photos are required",
        ]
    );
}

#[test]
fn validate_submission_rejects_non_positive_value() {
    let mut draft = complete_draft();
    draft.set(DraftField::EstimatedValue, "-5");
    let issues = validate_submission(&draft, &two_images());
    assert_eq!(issues, vec!["Estimated Value must be a positive number"]);
}

#[test]
fn validate_submission_checks_optional_price_only_when_present() {
    let mut draft = complete_draft();
    draft.set(DraftField::PurchasePrice, "abc");
    assert_eq!(validate_submission(&draft, &two_images()), vec!["Purchase Price must be a number"]);
    draft.set(DraftField::PurchasePrice, "");
    assert!(validate_submission(&draft, &two_images()).is_empty());
}

#[test]
fn mock_submitter_numbers_assets_sequentially() {
    let submitter = MockAssetSubmitter::new(2024);
    let first = block_on(submitter.submit(&complete_draft(), &two_images())).unwrap();
    let second = block_on(submitter.submit(&complete_draft(), &two_images())).unwrap();
    assert_eq!(first.asset_id, "AST-2024-001");
    assert_eq!(second.asset_id, "AST-2024-002");
    assert_eq!(first.status, VerificationStatus::Submitted);
    assert_eq!(first.image_count, 2);
}

#[test]
fn mock_submitter_returns_validation_error() {
    let submitter = MockAssetSubmitter::new(2024);
    let err = block_on(submitter.submit(&complete_draft(), &ImageSet::new())).unwrap_err();
    assert_eq!(err, SubmitError::Validation(vec!["At least 2 photos are required".to_owned()]));
    assert_eq!(err.to_string(), "please fix: At least 2 photos are required");
}
