//! Daikoku back-office core.
//!
//! - `context`: session context, actions, reducer and store
//! - `permissions`: the capability predicate
//! - `workflows`: team administration flows built on the client and store
//!
//! The wire types and the REST client live in their own crates and are
//! re-exported here.

pub mod config;
pub mod context;
pub mod permissions;
pub mod telemetry;
pub mod workflows;

pub use backoffice_client as client;
pub use backoffice_types as types;

pub use backoffice_client::{BackofficeApi, ClientConfig, ClientError, HttpClient};
pub use config::AppConfig;
pub use context::{Action, ContextStore, Navigator, SessionContext};
pub use permissions::{can_do, can_do_in, CapabilityDenied, Operation, Resource};
pub use workflows::WorkflowError;
