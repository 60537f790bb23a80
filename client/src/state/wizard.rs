//! Asset registration wizard: step cursor, draft form, and intake bookkeeping.
//!
//! DESIGN
//! ======
//! The wizard is a plain value owned by the register page through one
//! `RwSignal`. Validation never raises errors: `can_proceed` is evaluated
//! when the user tries to move forward and the page disables the control
//! while it is false.
//!
//! Image decodes finish asynchronously. Each batch is tagged with the
//! wizard's `intake_session`; `reset` bumps the session so decodes started
//! before a reset are dropped instead of leaking into the fresh draft.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use crate::net::submit::SubmittedAsset;
use crate::state::asset::{AssetCondition, AssetType};
use crate::state::images::{DecodedImage, DragEventKind, DragState, ImageSet};
use crate::util::format::{format_usd_input, parse_amount};

// =============================================================================
// STEPS
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    Details,
    Photos,
    Review,
}

impl WizardStep {
    pub const ALL: [Self; 3] = [Self::Details, Self::Photos, Self::Review];

    pub const fn index(self) -> usize {
        match self {
            Self::Details => 0,
            Self::Photos => 1,
            Self::Review => 2,
        }
    }

    /// Step at `index`, clamped to the last step.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index.min(Self::ALL.len() - 1)]
    }

    pub const fn is_last(self) -> bool {
        self.index() == Self::ALL.len() - 1
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Details => "Asset Details",
            Self::Photos => "Upload Photos",
            Self::Review => "Review & Submit",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Details => "Basic information",
            Self::Photos => "Visual documentation",
            Self::Review => "Confirm details",
        }
    }

    fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    fn prev(self) -> Self {
        Self::from_index(self.index().saturating_sub(1))
    }
}

// =============================================================================
// DRAFT
// =============================================================================

/// Editable fields of the registration form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Type,
    Name,
    Description,
    EstimatedValue,
    Condition,
    PurchaseDate,
    PurchasePrice,
    SerialNumber,
}

impl DraftField {
    pub const REQUIRED: [Self; 5] =
        [Self::Type, Self::Name, Self::Description, Self::EstimatedValue, Self::Condition];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Type => "Asset Type",
            Self::Name => "Asset Name",
            Self::Description => "Description",
            Self::EstimatedValue => "Estimated Value",
            Self::Condition => "Condition",
            Self::PurchaseDate => "Purchase Date",
            Self::PurchasePrice => "Purchase Price",
            Self::SerialNumber => "Serial Number",
        }
    }
}

/// In-progress registration form. Optional fields are empty when unset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetDraft {
    pub asset_type: Option<AssetType>,
    pub name: String,
    pub description: String,
    /// Numeric string as typed by the user.
    pub estimated_value: String,
    pub condition: Option<AssetCondition>,
    pub purchase_date: String,
    pub purchase_price: String,
    pub serial_number: String,
}

impl AssetDraft {
    /// Replace one field. Enum fields take their wire string; an unknown
    /// string clears the field.
    pub fn set(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Type => self.asset_type = AssetType::parse(value),
            DraftField::Name => value.clone_into(&mut self.name),
            DraftField::Description => value.clone_into(&mut self.description),
            DraftField::EstimatedValue => value.clone_into(&mut self.estimated_value),
            DraftField::Condition => self.condition = AssetCondition::parse(value),
            DraftField::PurchaseDate => value.clone_into(&mut self.purchase_date),
            DraftField::PurchasePrice => value.clone_into(&mut self.purchase_price),
            DraftField::SerialNumber => value.clone_into(&mut self.serial_number),
        }
    }

    /// Current value of a field as bound to its input element.
    pub fn value(&self, field: DraftField) -> String {
        match field {
            DraftField::Type => self.asset_type.map(AssetType::as_str).unwrap_or_default().to_owned(),
            DraftField::Name => self.name.clone(),
            DraftField::Description => self.description.clone(),
            DraftField::EstimatedValue => self.estimated_value.clone(),
            DraftField::Condition => self.condition.map(AssetCondition::as_str).unwrap_or_default().to_owned(),
            DraftField::PurchaseDate => self.purchase_date.clone(),
            DraftField::PurchasePrice => self.purchase_price.clone(),
            DraftField::SerialNumber => self.serial_number.clone(),
        }
    }

    fn is_filled(&self, field: DraftField) -> bool {
        match field {
            DraftField::Type => self.asset_type.is_some(),
            DraftField::Condition => self.condition.is_some(),
            other => !self.value(other).is_empty(),
        }
    }

    /// Required fields that are still empty, in form order.
    pub fn missing_fields(&self) -> Vec<DraftField> {
        DraftField::REQUIRED.into_iter().filter(|f| !self.is_filled(*f)).collect()
    }

    pub fn is_details_complete(&self) -> bool {
        DraftField::REQUIRED.into_iter().all(|f| self.is_filled(f))
    }

    pub fn serial_number(&self) -> Option<&str> {
        non_empty(&self.serial_number)
    }

    pub fn purchase_date(&self) -> Option<&str> {
        non_empty(&self.purchase_date)
    }

    pub fn purchase_price(&self) -> Option<f64> {
        parse_amount(&self.purchase_price)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    (!value.is_empty()).then_some(value)
}

// =============================================================================
// REVIEW
// =============================================================================

/// Read-only projection shown on the review step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewSummary {
    pub type_label: Option<&'static str>,
    pub name: String,
    pub description: String,
    pub estimated_value: String,
    pub condition_label: Option<&'static str>,
    pub serial_number: Option<String>,
    pub purchase_date: Option<String>,
    pub image_count: usize,
}

impl ReviewSummary {
    pub fn from_parts(draft: &AssetDraft, images: &ImageSet) -> Self {
        Self {
            type_label: draft.asset_type.map(AssetType::label),
            name: draft.name.clone(),
            description: draft.description.clone(),
            estimated_value: format_usd_input(&draft.estimated_value),
            condition_label: draft.condition.map(AssetCondition::label),
            serial_number: draft.serial_number().map(str::to_owned),
            purchase_date: draft.purchase_date().map(str::to_owned),
            image_count: images.len(),
        }
    }
}

// =============================================================================
// WIZARD
// =============================================================================

/// Progress of the terminal submit action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Submitted(SubmittedAsset),
    Failed(String),
}

#[derive(Clone, Debug, Default)]
pub struct RegistrationWizard {
    pub step: WizardStep,
    pub draft: AssetDraft,
    pub images: ImageSet,
    pub drag: DragState,
    /// Tag for decode batches; bumped by `reset`.
    pub intake_session: u64,
    pub submission: SubmissionState,
}

impl RegistrationWizard {
    /// Whether the current step's requirements are met.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            WizardStep::Details => self.draft.is_details_complete(),
            WizardStep::Photos => self.images.meets_minimum(),
            WizardStep::Review => true,
        }
    }

    /// Move forward one step if allowed. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.step.is_last() || !self.can_proceed() {
            return false;
        }
        self.step = self.step.next();
        true
    }

    /// Going back is closed once a submission is in flight or accepted, so
    /// the receipt always matches the reviewed draft.
    pub fn can_retreat(&self) -> bool {
        self.step != WizardStep::Details
            && !matches!(self.submission, SubmissionState::Submitting | SubmissionState::Submitted(_))
    }

    /// Move back one step, stopping at the first. Returns whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if !self.can_retreat() {
            return false;
        }
        let prev = self.step.prev();
        let moved = prev != self.step;
        self.step = prev;
        moved
    }

    pub fn set_field(&mut self, field: DraftField, value: &str) {
        self.draft.set(field, value);
    }

    /// Apply a drag event. Returns whether the drag state changed, so
    /// repeated `dragover` events can skip notifying subscribers.
    pub fn on_drag(&mut self, event: DragEventKind) -> bool {
        let next = self.drag.after(event);
        let changed = next != self.drag;
        self.drag = next;
        changed
    }

    /// Append a finished decode if it belongs to the current session.
    pub fn accept_decoded(&mut self, session: u64, image: DecodedImage) -> bool {
        if session != self.intake_session {
            log::debug!("image intake: dropping decode from stale session {session}");
            return false;
        }
        self.images.push(image.data_uri);
        true
    }

    pub fn remove_image(&mut self, index: usize) -> Option<String> {
        self.images.remove(index)
    }

    pub fn review(&self) -> ReviewSummary {
        ReviewSummary::from_parts(&self.draft, &self.images)
    }

    /// Discard the draft and start over, invalidating in-flight decodes.
    pub fn reset(&mut self) {
        *self = Self { intake_session: self.intake_session.wrapping_add(1), ..Self::default() };
    }
}
