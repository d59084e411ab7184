//! Project list service facade.
//!
//! # Responsibility
//! - Run each command through pending -> fulfilled/rejected transitions.
//! - Notify subscribers after every transition.
//! - Host the drag-drop, delete-confirmation and name-commit entry points
//!   that UI widgets call.
//!
//! # Invariants
//! - The store is mutated only through [`ProjectState::apply`].
//! - A rejected command leaves records untouched and only settles status.
//! - Nameless projects bypass the delete confirmation gate.

use crate::model::project::{Project, ProjectId, ProjectPatch};
use crate::ordering::reorder_patches;
use crate::service::collaborators::{Clock, IdGenerator, SystemClock, UuidGenerator};
use crate::service::command::{derive_project, CommandError, ProjectCommand};
use crate::store::project_state::{
    CommandKind, CommandPayload, ProjectAction, ProjectState, StoreStatus,
};
use log::{debug, info, warn};
use std::collections::HashSet;

/// Store change listener. Called with the state after each transition.
pub type Listener = Box<dyn FnMut(&ProjectState)>;

/// Handle returned by [`ProjectService::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// A dispatched command waiting for [`ProjectService::resolve`].
#[must_use = "a pending command keeps the store loading until it is resolved"]
#[derive(Debug)]
pub struct PendingCommand {
    command: ProjectCommand,
}

impl PendingCommand {
    pub fn kind(&self) -> CommandKind {
        self.command.kind()
    }
}

/// Result of [`ProjectService::request_delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteRequest {
    /// Draft or unknown project; deleted without confirmation.
    Deleted,
    /// Named project; parked until `confirm_delete` or `cancel_delete`.
    AwaitingConfirmation,
}

/// Result of [`ProjectService::commit_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameCommit {
    /// A rename was dispatched.
    Renamed,
    /// Empty input on a named project; nothing was dispatched.
    Unchanged,
    /// Empty input on a draft; the draft was deleted.
    Discarded,
}

/// Facade over the project store.
pub struct ProjectService<G: IdGenerator = UuidGenerator, C: Clock = SystemClock> {
    state: ProjectState,
    ids: G,
    clock: C,
    issued_ids: HashSet<ProjectId>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
    pending_delete: Option<ProjectId>,
}

impl ProjectService<UuidGenerator, SystemClock> {
    /// Creates an empty service with random ids and the system clock.
    pub fn new() -> Self {
        Self::with_collaborators(UuidGenerator, SystemClock)
    }
}

impl Default for ProjectService<UuidGenerator, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator, C: Clock> ProjectService<G, C> {
    /// Creates an empty service with caller-provided id and time sources.
    pub fn with_collaborators(ids: G, clock: C) -> Self {
        Self {
            state: ProjectState::new(),
            ids,
            clock,
            issued_ids: HashSet::new(),
            listeners: Vec::new(),
            next_subscription: 0,
            pending_delete: None,
        }
    }

    /// Current store snapshot.
    pub fn state(&self) -> &ProjectState {
        &self.state
    }

    pub fn status(&self) -> StoreStatus {
        self.state.status()
    }

    /// Projects in display order.
    pub fn ordered(&self) -> Vec<&Project> {
        self.state.ordered()
    }

    /// Registers a listener notified after every store transition.
    pub fn subscribe(&mut self, listener: impl FnMut(&ProjectState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` for unknown handles.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// Dispatches `command` and marks the store as loading.
    ///
    /// Nothing is derived or committed until [`ProjectService::resolve`].
    pub fn begin(&mut self, command: ProjectCommand) -> PendingCommand {
        self.mark_pending(command.kind());
        PendingCommand { command }
    }

    /// Derives the payload of `pending` and commits it.
    ///
    /// Returns the committed payload.
    ///
    /// # Errors
    /// Returns the derivation error after settling the store as rejected.
    pub fn resolve(&mut self, pending: PendingCommand) -> Result<CommandPayload, CommandError> {
        let kind = pending.kind();
        let derived = pending
            .command
            .derive_payload(&mut self.ids, &self.clock, &mut self.issued_ids);
        match derived {
            Ok(payload) => {
                self.fulfill(payload.clone());
                Ok(payload)
            }
            Err(err) => Err(self.reject(kind, err)),
        }
    }

    /// Runs `command` through both phases.
    pub fn dispatch(&mut self, command: ProjectCommand) -> Result<CommandPayload, CommandError> {
        let pending = self.begin(command);
        self.resolve(pending)
    }

    /// Creates a project at the end of the list and returns its id.
    pub fn create_project(&mut self, name: Option<String>) -> Result<ProjectId, CommandError> {
        self.mark_pending(CommandKind::Create);
        let derived = derive_project(name, &mut self.ids, &self.clock, &mut self.issued_ids);
        let record = match derived {
            Ok(record) => record,
            Err(err) => return Err(self.reject(CommandKind::Create, err)),
        };
        let id = record.id;
        self.fulfill(CommandPayload::Create(record));
        info!(
            "event=project_created module=service status=ok id={} total={}",
            id,
            self.state.len()
        );
        Ok(id)
    }

    /// Deletes a project immediately, bypassing the confirmation gate.
    pub fn delete_project(&mut self, id: ProjectId) -> Result<(), CommandError> {
        self.dispatch(ProjectCommand::Delete(id)).map(drop)
    }

    /// Dispatches a rename without applying the name-commit rules.
    pub fn rename_project(
        &mut self,
        id: ProjectId,
        name: impl Into<String>,
    ) -> Result<(), CommandError> {
        self.dispatch(ProjectCommand::Rename {
            id,
            name: name.into(),
        })
        .map(drop)
    }

    /// Applies a batch of weight patches.
    pub fn reorder_projects(&mut self, patches: Vec<ProjectPatch>) -> Result<(), CommandError> {
        self.dispatch(ProjectCommand::ReorderBatch(patches)).map(drop)
    }

    /// Moves `active` into the display slot of `target`.
    ///
    /// Returns the number of weight patches applied. Moves onto self or
    /// involving unknown ids dispatch nothing and return `0`.
    pub fn move_project(
        &mut self,
        active: ProjectId,
        target: ProjectId,
    ) -> Result<usize, CommandError> {
        let patches = reorder_patches(&self.state.ordered(), active, target);
        if patches.is_empty() {
            return Ok(0);
        }
        let count = patches.len();
        self.reorder_projects(patches)?;
        Ok(count)
    }

    /// Asks to delete a project, gating named projects behind confirmation.
    ///
    /// A new request replaces any earlier parked request.
    pub fn request_delete(&mut self, id: ProjectId) -> Result<DeleteRequest, CommandError> {
        let needs_confirmation = self.state.get(id).is_some_and(Project::has_name);
        if !needs_confirmation {
            self.delete_project(id)?;
            return Ok(DeleteRequest::Deleted);
        }
        self.pending_delete = Some(id);
        Ok(DeleteRequest::AwaitingConfirmation)
    }

    /// Project parked by [`ProjectService::request_delete`], if any.
    pub fn pending_delete(&self) -> Option<ProjectId> {
        self.pending_delete
    }

    /// Deletes the parked project and clears the gate.
    ///
    /// Returns the deleted id, or `None` when nothing was parked.
    pub fn confirm_delete(&mut self) -> Result<Option<ProjectId>, CommandError> {
        let Some(id) = self.pending_delete.take() else {
            return Ok(None);
        };
        self.delete_project(id)?;
        Ok(Some(id))
    }

    /// Clears the gate without deleting. Returns the dropped id.
    pub fn cancel_delete(&mut self) -> Option<ProjectId> {
        self.pending_delete.take()
    }

    /// Commits the text of an in-place name editor.
    ///
    /// Blank input discards a draft and is ignored for a named project.
    /// Other input is trimmed and dispatched as a rename.
    pub fn commit_name(&mut self, id: ProjectId, name: &str) -> Result<NameCommit, CommandError> {
        // Trimmed on purpose: whitespace-only input counts as blank, and stored
        // labels never carry editor padding. `rename_project` stays verbatim.
        let trimmed = name.trim();
        if !trimmed.is_empty() {
            self.rename_project(id, trimmed)?;
            return Ok(NameCommit::Renamed);
        }

        let is_named = self.state.get(id).is_some_and(Project::has_name);
        if is_named {
            return Ok(NameCommit::Unchanged);
        }
        self.delete_project(id)?;
        Ok(NameCommit::Discarded)
    }

    fn mark_pending(&mut self, kind: CommandKind) {
        self.transition(ProjectAction::Pending(kind));
        debug!(
            "event=command_pending module=service command={} in_flight={}",
            kind.as_str(),
            self.state.in_flight()
        );
    }

    fn fulfill(&mut self, payload: CommandPayload) {
        let kind = payload.kind();
        self.transition(ProjectAction::Fulfilled(payload));
        debug!(
            "event=command_fulfilled module=service command={} in_flight={}",
            kind.as_str(),
            self.state.in_flight()
        );
    }

    fn reject(&mut self, kind: CommandKind, err: CommandError) -> CommandError {
        self.transition(ProjectAction::Rejected(kind));
        warn!(
            "event=command_rejected module=service command={} status=error error={}",
            kind.as_str(),
            err
        );
        err
    }

    fn transition(&mut self, action: ProjectAction) {
        self.state.apply(&action);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&self.state);
        }
    }
}
