//! Networking and external collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the task REST calls, `submit` is the asset submission
//! boundary, `wallet` talks to the injected browser wallet, and `types`
//! defines the task wire schema shared with the server.

pub mod api;
pub mod submit;
pub mod types;
pub mod wallet;
