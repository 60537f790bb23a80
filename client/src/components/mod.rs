//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Status badge, timeline and progress indicator are stateless renderers of
//! caller-supplied data. The wallet widget and task list read shared state
//! from Leptos context.

pub mod glass_card;
pub mod main_layout;
pub mod progress_indicator;
pub mod status_badge;
pub mod task_card;
pub mod task_list;
pub mod timeline;
pub mod wallet_connect;
