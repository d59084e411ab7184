//! In-memory record store for the project list.
//!
//! # Responsibility
//! - Hold the authoritative project collection and coarse load status.
//! - Apply committed command payloads through explicit state transitions.
//!
//! # Invariants
//! - The store only mutates records when a command is fulfilled.
//! - Unknown ids in delete/rename/reorder payloads are silent no-ops.
//! - `status` is `Loading` exactly while at least one command is in flight.

pub mod project_state;
