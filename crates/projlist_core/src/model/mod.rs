//! Domain model for the ordered project list.
//!
//! # Responsibility
//! - Define the project record and the field-level patch applied to it.
//! - Keep wire naming aligned with the external camelCase schema.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId` that is never reused.
//! - Deletion is a hard removal; there is no tombstone state.

pub mod project;
