//! Static demo data behind the dashboard, status, verification and
//! repayment pages.
//!
//! Everything here describes a single asset (`AST-2024-001`, a gold
//! Submariner) moving through verification into an active loan, so figures
//! on different pages agree with each other.

#[cfg(test)]
#[path = "mock_test.rs"]
mod mock_test;

use crate::state::asset::{
    Asset, AssetCondition, AssetType, LoanDetails, LoanStatus, PawnshopVerification, TokenizedAsset,
    VerificationStatus, VerificationTimeline,
};

pub const DEMO_ASSET_ID: &str = "AST-2024-001";
pub const DEMO_ASSET_NAME: &str = "18K Gold Rolex Submariner";

// =============================================================================
// ASSET STATUS
// =============================================================================

pub const TRACKING_NUMBER: &str = "TRK-8472938";

/// The asset as seen on the status page, mid-verification.
pub fn tracked_asset() -> Asset {
    Asset {
        id: DEMO_ASSET_ID.to_owned(),
        user_id: "USR-0001".to_owned(),
        asset_type: AssetType::Jewelry,
        name: DEMO_ASSET_NAME.to_owned(),
        description: "18K gold case and bracelet, automatic movement".to_owned(),
        estimated_value: 15_000.0,
        appraised_value: None,
        condition: AssetCondition::Excellent,
        images: Vec::new(),
        purchase_date: None,
        purchase_price: None,
        serial_number: None,
        verification_status: VerificationStatus::Verifying,
        created_at: "2024-11-18T10:30:00Z".to_owned(),
        updated_at: "2024-11-19T11:45:00Z".to_owned(),
        submitted_at: Some("2024-11-18T10:30:00Z".to_owned()),
        approved_at: None,
        token_id: None,
    }
}

fn step(status: VerificationStatus, timestamp: &str, description: &str, completed_by: Option<&str>) -> VerificationTimeline {
    VerificationTimeline {
        status,
        timestamp: timestamp.to_owned(),
        description: description.to_owned(),
        completed_by: completed_by.map(str::to_owned),
        notes: None,
    }
}

pub fn verification_history() -> Vec<VerificationTimeline> {
    vec![
        step(VerificationStatus::Submitted, "2024-11-18 10:30 AM", "Asset registration submitted successfully", Some("System")),
        step(VerificationStatus::InTransit, "2024-11-18 02:15 PM", "Asset picked up by logistics partner", Some("Swift Logistics")),
        step(
            VerificationStatus::AtPawnshop,
            "2024-11-19 09:00 AM",
            "Asset delivered to Golden Trust Pawnshop",
            Some("Swift Logistics"),
        ),
        step(
            VerificationStatus::Verifying,
            "2024-11-19 11:45 AM",
            "Physical verification and authenticity check in progress",
            Some("Senior Appraiser - John Smith"),
        ),
        step(VerificationStatus::Appraising, "", "Professional appraisal and valuation pending", None),
        step(VerificationStatus::Approved, "", "Final approval and tokenization eligibility", None),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartnerPawnshop {
    pub name: &'static str,
    pub location: &'static str,
    pub license: &'static str,
}

pub const PAWNSHOP: PartnerPawnshop =
    PartnerPawnshop { name: "Golden Trust Pawnshop", location: "Manhattan, NY", license: "LIC-NY-8472" };

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub id: u32,
    pub from: &'static str,
    pub message: &'static str,
    pub timestamp: &'static str,
    pub is_read: bool,
}

pub fn status_messages() -> Vec<StatusMessage> {
    vec![
        StatusMessage {
            id: 1,
            from: "Golden Trust Pawnshop",
            message: "Your asset has been received and initial inspection looks good. Full appraisal in progress.",
            timestamp: "2024-11-19 11:50 AM",
            is_read: true,
        },
        StatusMessage {
            id: 2,
            from: "System",
            message: "Reminder: You can track your asset status in real-time on this page.",
            timestamp: "2024-11-19 10:00 AM",
            is_read: true,
        },
    ]
}

// =============================================================================
// VERIFICATION RESULT
// =============================================================================

#[derive(Clone, Debug, PartialEq)]
pub struct VerificationResult {
    pub asset_id: &'static str,
    pub asset_name: &'static str,
    pub status: VerificationStatus,
    pub estimated_value: f64,
    pub appraisal: PawnshopVerification,
    pub certificate_id: &'static str,
    pub authenticity: &'static str,
    pub pawnshop_rating: f64,
}

pub fn verification_result() -> VerificationResult {
    VerificationResult {
        asset_id: DEMO_ASSET_ID,
        asset_name: DEMO_ASSET_NAME,
        status: VerificationStatus::Approved,
        estimated_value: 15_000.0,
        appraisal: PawnshopVerification {
            pawnshop_id: "PWN-GT-001".to_owned(),
            pawnshop_name: PAWNSHOP.name.to_owned(),
            verifier_name: "John Smith".to_owned(),
            verification_date: "2024-11-20".to_owned(),
            appraised_value: 16_500.0,
            condition: AssetCondition::Excellent,
            notes: "18K gold case and bracelet in excellent condition. Automatic movement functioning \
                    perfectly. All original documentation present. Serial number verified with manufacturer."
                .to_owned(),
            photos: Vec::new(),
            certificate_url: None,
        },
        certificate_id: "CERT-2024-001-GT",
        authenticity: "Verified Genuine",
        pawnshop_rating: 4.9,
    }
}

/// Loan offer shown beside the appraisal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoanOffer {
    /// Annual percentage rate.
    pub interest_rate: f64,
    pub term_months: u32,
    pub monthly_payment: f64,
}

pub const LOAN_OFFER: LoanOffer = LoanOffer { interest_rate: 8.5, term_months: 12, monthly_payment: 1025.0 };

pub fn tokenized_asset() -> TokenizedAsset {
    TokenizedAsset {
        asset_id: DEMO_ASSET_ID.to_owned(),
        token_id: "RWA-ROLEX-001".to_owned(),
        token_symbol: "RWA-ROLEX".to_owned(),
        contract_address: "0x5FbDB2315678afecb367f032d93F642f64180aa3".to_owned(),
        chain_id: 11_155_111,
        minted_at: "2024-11-20T12:00:00Z".to_owned(),
        total_supply: 1,
        liquidity_pool_address: None,
    }
}

// =============================================================================
// REPAYMENT
// =============================================================================

pub fn active_loan() -> LoanDetails {
    LoanDetails {
        loan_id: "LOAN-2024-001".to_owned(),
        asset_id: DEMO_ASSET_ID.to_owned(),
        asset_name: DEMO_ASSET_NAME.to_owned(),
        token_id: "RWA-ROLEX-001".to_owned(),
        principal_amount: 11_550.0,
        interest_rate: 8.5,
        total_owed: 12_531.0,
        repaid_amount: 0.0,
        remaining_balance: 12_531.0,
        status: LoanStatus::Active,
        next_payment_date: Some("2024-12-20".to_owned()),
        next_payment_amount: Some(1025.0),
    }
}

// =============================================================================
// DASHBOARD
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DashboardStats {
    pub total_asset_value: f64,
    pub active_loans: u32,
    pub available_credit: f64,
    pub total_repaid: f64,
}

pub const DASHBOARD_STATS: DashboardStats =
    DashboardStats { total_asset_value: 16_500.0, active_loans: 1, available_credit: 11_550.0, total_repaid: 0.0 };

#[derive(Clone, Debug, PartialEq)]
pub struct PortfolioAsset {
    pub id: &'static str,
    pub name: &'static str,
    pub status: VerificationStatus,
    pub value: f64,
    pub loan_amount: f64,
    pub next_payment: &'static str,
}

pub fn portfolio() -> Vec<PortfolioAsset> {
    vec![PortfolioAsset {
        id: DEMO_ASSET_ID,
        name: DEMO_ASSET_NAME,
        status: VerificationStatus::Tokenized,
        value: 16_500.0,
        loan_amount: 11_550.0,
        next_payment: "2024-12-20",
    }]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Disbursement,
    Tokenization,
    Approval,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Activity {
    pub id: u32,
    pub kind: ActivityKind,
    pub description: &'static str,
    /// Zero when the event moved no money.
    pub amount: f64,
    /// ISO date.
    pub timestamp: &'static str,
}

pub fn recent_activity() -> Vec<Activity> {
    vec![
        Activity {
            id: 1,
            kind: ActivityKind::Disbursement,
            description: "Loan funds disbursed",
            amount: 11_550.0,
            timestamp: "2024-11-20",
        },
        Activity {
            id: 2,
            kind: ActivityKind::Tokenization,
            description: "Asset tokenized successfully",
            amount: 0.0,
            timestamp: "2024-11-20",
        },
        Activity {
            id: 3,
            kind: ActivityKind::Approval,
            description: "Asset verification approved",
            amount: 16_500.0,
            timestamp: "2024-11-19",
        },
    ]
}
