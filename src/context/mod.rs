//! Session Context Module
//!
//! The session context record, the closed set of actions that change it, the
//! pure reducer, and the store that owns the current value.

pub mod action;
pub mod navigation;
pub mod reducer;
pub mod state;
pub mod store;

pub use action::Action;
pub use navigation::Navigator;
pub use reducer::{reduce, reduce_raw};
pub use state::{SessionContext, DEFAULT_LANGUAGE};
pub use store::{ContextStore, UpdateTicket};
