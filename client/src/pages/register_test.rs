use super::*;
use crate::state::images::DecodedImage;

fn decoded(n: usize) -> DecodedImage {
    DecodedImage { index_hint: n, data_uri: format!("data:image/png;base64,{n}") }
}

#[test]
fn steps_follow_wizard_order() {
    let labels: Vec<String> = wizard_steps().into_iter().map(|s| s.label).collect();
    assert_eq!(labels, vec!["Asset Details", "Upload Photos", "Review & Submit"]);
}

#[test]
fn decode_landing_while_page_is_mounted_is_appended() {
    let owner = Owner::new();
    let wizard = owner.with(|| RwSignal::new(RegistrationWizard::default()));
    let session = wizard.with_untracked(|w| w.intake_session);

    assert_eq!(wizard.try_update(|w| w.accept_decoded(session, decoded(0))), Some(true));
    assert_eq!(wizard.with_untracked(|w| w.images.len()), 1);
}

#[test]
fn decode_landing_after_page_disposal_is_dropped() {
    let owner = Owner::new();
    let wizard = owner.with(|| RwSignal::new(RegistrationWizard::default()));
    let session = wizard.with_untracked(|w| w.intake_session);

    owner.cleanup();

    assert_eq!(wizard.try_update(|w| w.accept_decoded(session, decoded(1))), None);
    assert!(wizard.try_with_untracked(|w| w.images.len()).is_none());
}
