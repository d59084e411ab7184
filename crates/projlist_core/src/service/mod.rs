//! Command layer and the project service facade.
//!
//! # Responsibility
//! - Derive command payloads from UI intents and commit them to the store.
//! - Keep UI bindings decoupled from store transition details.

pub mod collaborators;
pub mod command;
pub mod project_service;
