//! Core domain logic for the ordered project list.
//! This crate owns record ordering and command lifecycle invariants.

pub mod logging;
pub mod model;
pub mod ordering;
pub mod service;
pub mod store;
pub mod view;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId, ProjectPatch, Weight};
pub use ordering::reorder_patches;
pub use service::collaborators::{Clock, IdGenerator, SystemClock, UuidGenerator};
pub use service::command::{derive_project, CommandError, ProjectCommand};
pub use service::project_service::{
    DeleteRequest, Listener, NameCommit, PendingCommand, ProjectService, SubscriptionId,
};
pub use store::project_state::{
    reduce, CommandKind, CommandPayload, ProjectAction, ProjectState, StoreStatus,
};

/// Minimal health-check API for linkage checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
