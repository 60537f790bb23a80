//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own storage concerns behind traits so route handlers can
//! stay focused on protocol translation.

pub mod task;
