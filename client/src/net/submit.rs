//! Asset submission boundary for the registration wizard.
//!
//! DESIGN
//! ======
//! The review step hands the finished draft and its photos to an
//! `AssetSubmitter`. The only implementation shipped today is
//! `MockAssetSubmitter`, which checks completeness locally and hands back a
//! generated asset id; a network-backed submitter can replace it through
//! the same context handle without touching the page.
//!
//! ERROR HANDLING
//! ==============
//! `SubmitError` separates problems the user can fix (`Validation`) from
//! decisions made elsewhere (`Rejected`) and transport failures (`Network`).
//! Nothing retries; the message is shown on the review step.

#[cfg(test)]
#[path = "submit_test.rs"]
mod submit_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::state::asset::VerificationStatus;
use crate::state::images::{ImageSet, MIN_IMAGES};
use crate::state::wizard::AssetDraft;
use crate::util::format::parse_amount;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("please fix: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("network error: {0}")]
    Network(String),
}

/// Receipt for an accepted registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedAsset {
    pub asset_id: String,
    pub status: VerificationStatus,
    pub image_count: usize,
}

/// Accepts a completed registration.
#[async_trait::async_trait]
pub trait AssetSubmitter: Send + Sync {
    /// Submit a draft with its photos.
    ///
    /// # Errors
    ///
    /// Returns a [`SubmitError`] when the draft is incomplete, the receiver
    /// refuses it, or it cannot be delivered.
    async fn submit(&self, draft: &AssetDraft, images: &ImageSet) -> Result<SubmittedAsset, SubmitError>;
}

/// Context handle for the active submitter.
#[derive(Clone)]
pub struct Submitter(pub Arc<dyn AssetSubmitter>);

impl Default for Submitter {
    fn default() -> Self {
        Self(Arc::new(MockAssetSubmitter::new(2024)))
    }
}

/// Problems with a draft that would make a submission fail.
pub fn validate_submission(draft: &AssetDraft, images: &ImageSet) -> Vec<String> {
    let mut issues: Vec<String> = draft
        .missing_fields()
        .into_iter()
        .map(|f| format!("{} is required", f.label()))
        .collect();
    if !draft.estimated_value.is_empty() && !parse_amount(&draft.estimated_value).is_some_and(|v| v > 0.0) {
        issues.push("Estimated Value must be a positive number".to_owned());
    }
    if !draft.purchase_price.is_empty() && draft.purchase_price().is_none() {
        issues.push("Purchase Price must be a number".to_owned());
    }
    if images.len() < MIN_IMAGES {
        issues.push(format!("At least {MIN_IMAGES} photos are required"));
    }
    issues
}

/// In-memory submitter that numbers assets `AST-<year>-<seq>`.
pub struct MockAssetSubmitter {
    year: u16,
    next_seq: AtomicU32,
}

impl MockAssetSubmitter {
    #[must_use]
    pub fn new(year: u16) -> Self {
        Self { year, next_seq: AtomicU32::new(1) }
    }
}

#[async_trait::async_trait]
impl AssetSubmitter for MockAssetSubmitter {
    async fn submit(&self, draft: &AssetDraft, images: &ImageSet) -> Result<SubmittedAsset, SubmitError> {
        let issues = validate_submission(draft, images);
        if !issues.is_empty() {
            return Err(SubmitError::Validation(issues));
        }
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let asset_id = format!("AST-{}-{seq:03}", self.year);
        log::info!("asset submitted: {asset_id} ({} photos)", images.len());
        Ok(SubmittedAsset { asset_id, status: VerificationStatus::Submitted, image_count: images.len() })
    }
}
