//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per route. Pages compose components and own page-local
//! signals; anything shared across routes comes from `App` context.

pub mod asset_status;
pub mod home;
pub mod register;
pub mod repayment;
pub mod tasks;
pub mod verification;
pub mod wallet_demo;
