//! Asset, verification, and loan value types.
//!
//! DESIGN
//! ======
//! Every closed enumeration carries its wire string (`as_str`) and its
//! human label (`label`) as exhaustive matches, so adding a variant fails to
//! compile until every lookup knows how to display it. Wire strings are the
//! kebab-case forms used in JSON and `<select>` option values.

#[cfg(test)]
#[path = "asset_test.rs"]
mod asset_test;

use serde::{Deserialize, Serialize};

// =============================================================================
// ASSET CATEGORY + CONDITION
// =============================================================================

/// Category of a physical asset offered as collateral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetType {
    Jewelry,
    Electronics,
    Vehicle,
    RealEstate,
    Collectibles,
    LuxuryItems,
    Other,
}

impl AssetType {
    pub const ALL: [Self; 7] = [
        Self::Jewelry,
        Self::Electronics,
        Self::Vehicle,
        Self::RealEstate,
        Self::Collectibles,
        Self::LuxuryItems,
        Self::Other,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Jewelry => "jewelry",
            Self::Electronics => "electronics",
            Self::Vehicle => "vehicle",
            Self::RealEstate => "real-estate",
            Self::Collectibles => "collectibles",
            Self::LuxuryItems => "luxury-items",
            Self::Other => "other",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Jewelry => "Jewelry & Precious Metals",
            Self::Electronics => "Electronics",
            Self::Vehicle => "Vehicle",
            Self::RealEstate => "Real Estate",
            Self::Collectibles => "Collectibles & Art",
            Self::LuxuryItems => "Luxury Items",
            Self::Other => "Other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

/// Self-reported physical condition of an asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetCondition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl AssetCondition {
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    /// One-line guidance shown under the option in the condition picker.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Like new, no visible wear",
            Self::Good => "Minor wear, fully functional",
            Self::Fair => "Moderate wear, works properly",
            Self::Poor => "Heavy wear, may need repairs",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }
}

// =============================================================================
// WORKFLOW STATUSES
// =============================================================================

/// Offline verification workflow status of a registered asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationStatus {
    Draft,
    Submitted,
    InTransit,
    AtPawnshop,
    Verifying,
    Appraising,
    Approved,
    Rejected,
    Tokenized,
}

impl VerificationStatus {
    pub const ALL: [Self; 9] = [
        Self::Draft,
        Self::Submitted,
        Self::InTransit,
        Self::AtPawnshop,
        Self::Verifying,
        Self::Appraising,
        Self::Approved,
        Self::Rejected,
        Self::Tokenized,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::InTransit => "in-transit",
            Self::AtPawnshop => "at-pawnshop",
            Self::Verifying => "verifying",
            Self::Appraising => "appraising",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Tokenized => "tokenized",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    /// Position of this status along the happy-path verification pipeline.
    ///
    /// `Rejected` leaves the pipeline and has no position.
    pub const fn pipeline_position(self) -> Option<usize> {
        match self {
            Self::Draft => Some(0),
            Self::Submitted => Some(1),
            Self::InTransit => Some(2),
            Self::AtPawnshop => Some(3),
            Self::Verifying => Some(4),
            Self::Appraising => Some(5),
            Self::Approved => Some(6),
            Self::Tokenized => Some(7),
            Self::Rejected => None,
        }
    }
}

/// Lifecycle status of a collateralized loan.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoanStatus {
    Active,
    Overdue,
    Paid,
    Defaulted,
}

impl LoanStatus {
    pub const ALL: [Self; 4] = [Self::Active, Self::Overdue, Self::Paid, Self::Defaulted];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Overdue => "overdue",
            Self::Paid => "paid",
            Self::Defaulted => "defaulted",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }
}

/// Status of one scheduled repayment installment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Overdue,
}

impl PaymentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Paid => "Paid",
            Self::Overdue => "Overdue",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    Disbursement,
    Repayment,
    Tokenization,
    Liquidation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionStatus {
    Pending,
    Confirmed,
    Failed,
}

// =============================================================================
// DISPLAY ENTITIES
// =============================================================================

/// A registered asset as shown on status and dashboard views.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub name: String,
    pub description: String,
    pub estimated_value: f64,
    pub appraised_value: Option<f64>,
    pub condition: AssetCondition,
    pub images: Vec<String>,
    pub purchase_date: Option<String>,
    pub purchase_price: Option<f64>,
    pub serial_number: Option<String>,
    pub verification_status: VerificationStatus,
    pub created_at: String,
    pub updated_at: String,
    pub submitted_at: Option<String>,
    pub approved_at: Option<String>,
    pub token_id: Option<String>,
}

/// One recorded step in an asset's verification history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationTimeline {
    pub status: VerificationStatus,
    /// Empty while the step has not happened yet.
    pub timestamp: String,
    pub description: String,
    pub completed_by: Option<String>,
    pub notes: Option<String>,
}

/// Appraisal outcome recorded by the pawnshop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PawnshopVerification {
    pub pawnshop_id: String,
    pub pawnshop_name: String,
    pub verifier_name: String,
    pub verification_date: String,
    pub appraised_value: f64,
    pub condition: AssetCondition,
    pub notes: String,
    pub photos: Vec<String>,
    pub certificate_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenizedAsset {
    pub asset_id: String,
    pub token_id: String,
    pub token_symbol: String,
    pub contract_address: String,
    pub chain_id: u64,
    pub minted_at: String,
    pub total_supply: u64,
    pub liquidity_pool_address: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDetails {
    pub loan_id: String,
    pub asset_id: String,
    pub asset_name: String,
    pub token_id: String,
    pub principal_amount: f64,
    /// Annual percentage rate.
    pub interest_rate: f64,
    pub total_owed: f64,
    pub repaid_amount: f64,
    pub remaining_balance: f64,
    pub status: LoanStatus,
    pub next_payment_date: Option<String>,
    pub next_payment_amount: Option<f64>,
}

/// One installment of a loan's repayment schedule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepaymentSchedule {
    pub payment_number: u32,
    pub due_date: String,
    pub amount: f64,
    pub principal: f64,
    pub interest: f64,
    pub status: PaymentStatus,
    pub paid_at: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub currency: String,
    pub timestamp: String,
    pub tx_hash: Option<String>,
    pub status: TransactionStatus,
    pub from_address: Option<String>,
    pub to_address: Option<String>,
}
