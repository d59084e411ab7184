//! Project commands and payload derivation.
//!
//! # Responsibility
//! - Model the four commands a UI can dispatch.
//! - Derive the payload each command commits, or fail before any mutation.
//!
//! # Invariants
//! - Derivation never touches the store.
//! - A created id is recorded as issued on successful derivation and is
//!   never accepted again, even after the record is deleted.
//! - Delete, rename and reorder payloads are passed through verbatim.

use crate::model::project::{Project, ProjectId, ProjectPatch};
use crate::service::collaborators::{Clock, IdGenerator};
use crate::store::project_state::{CommandKind, CommandPayload};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Payload derivation failures. A failed command commits nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The clock could not produce an epoch timestamp.
    ClockUnavailable,
    /// The id generator produced an id that was already issued.
    DuplicateId(ProjectId),
}

impl Display for CommandError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ClockUnavailable => write!(f, "clock unavailable: cannot stamp creation time"),
            Self::DuplicateId(id) => write!(f, "project id already issued: {id}"),
        }
    }
}

impl Error for CommandError {}

/// One UI-originated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectCommand {
    /// Create a project, optionally named. Unnamed projects are drafts.
    Create { name: Option<String> },
    /// Remove a project.
    Delete(ProjectId),
    /// Replace a project label.
    ///
    /// Callers only dispatch non-empty names; see
    /// [`crate::ProjectService::commit_name`].
    Rename { id: ProjectId, name: String },
    /// Apply precomputed weight patches, usually from
    /// [`crate::ordering::reorder_patches`].
    ReorderBatch(Vec<ProjectPatch>),
}

impl ProjectCommand {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Create { .. } => CommandKind::Create,
            Self::Delete(_) => CommandKind::Delete,
            Self::Rename { .. } => CommandKind::Rename,
            Self::ReorderBatch(_) => CommandKind::ReorderBatch,
        }
    }

    /// Derives the payload that the store will commit.
    ///
    /// # Errors
    /// - `ClockUnavailable` when a create cannot be timestamped.
    /// - `DuplicateId` when the generator repeats an issued id.
    pub fn derive_payload(
        self,
        ids: &mut dyn IdGenerator,
        clock: &dyn Clock,
        issued: &mut HashSet<ProjectId>,
    ) -> Result<CommandPayload, CommandError> {
        match self {
            Self::Create { name } => {
                derive_project(name, ids, clock, issued).map(CommandPayload::Create)
            }
            Self::Delete(id) => Ok(CommandPayload::Delete(id)),
            Self::Rename { id, name } => Ok(CommandPayload::Rename(ProjectPatch::rename(id, name))),
            Self::ReorderBatch(patches) => Ok(CommandPayload::ReorderBatch(patches)),
        }
    }
}

/// Derives the unplaced record a create command commits.
///
/// # Errors
/// Same as [`ProjectCommand::derive_payload`] for `Create`.
pub fn derive_project(
    name: Option<String>,
    ids: &mut dyn IdGenerator,
    clock: &dyn Clock,
    issued: &mut HashSet<ProjectId>,
) -> Result<Project, CommandError> {
    let id = ids.next_id();
    if issued.contains(&id) {
        return Err(CommandError::DuplicateId(id));
    }
    let date_created = clock.now_epoch_ms()?;
    issued.insert(id);
    Ok(Project::new(id, date_created, name))
}
