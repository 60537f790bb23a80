//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting and calendar helpers, kept free of Leptos so pages and
//! state modules can share and test them natively.

pub mod dates;
pub mod format;
