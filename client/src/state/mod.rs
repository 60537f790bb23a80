//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Plain data types and reducers. Pages wrap them
//! in `RwSignal`s; shared ones (wallet, tasks) are provided from `App`.

pub mod asset;
pub mod images;
pub mod mock;
pub mod tasks;
pub mod verification;
pub mod wallet;
pub mod wizard;
