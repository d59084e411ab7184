//! Project collection state and its transition function.
//!
//! # Responsibility
//! - Define command lifecycle actions (`Pending`/`Fulfilled`/`Rejected`).
//! - Apply create/delete/rename/reorder payloads with field-level merges.
//!
//! # Invariants
//! - A created record gets `max(defined weights) + 1`, or `1` when no
//!   record has a weight. Weight arithmetic saturates instead of wrapping.
//! - Records are kept in insertion order; that order is only a tie-break
//!   for the display projection and never a source of truth for position.
//! - Settling more commands than were started never underflows the
//!   in-flight counter.

use crate::model::project::{Project, ProjectId, ProjectPatch, Weight};
use crate::view;
use log::debug;
use serde::{Deserialize, Serialize};

/// Coarse store status exposed to readers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    /// No command is in flight.
    #[default]
    Idle,
    /// At least one command has been dispatched and not settled.
    Loading,
}

/// The four command families understood by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Create,
    Delete,
    Rename,
    ReorderBatch,
}

impl CommandKind {
    /// Stable name used in log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Delete => "delete",
            Self::Rename => "rename",
            Self::ReorderBatch => "reorder_batch",
        }
    }
}

/// Resolved payload of a fulfilled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandPayload {
    Create(Project),
    Delete(ProjectId),
    Rename(ProjectPatch),
    ReorderBatch(Vec<ProjectPatch>),
}

impl CommandPayload {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::Create(_) => CommandKind::Create,
            Self::Delete(_) => CommandKind::Delete,
            Self::Rename(_) => CommandKind::Rename,
            Self::ReorderBatch(_) => CommandKind::ReorderBatch,
        }
    }
}

/// Lifecycle action fed to [`ProjectState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectAction {
    /// A command was dispatched; its payload is not known yet.
    Pending(CommandKind),
    /// A command resolved; commit its payload.
    Fulfilled(CommandPayload),
    /// A command failed while deriving its payload; nothing is committed.
    Rejected(CommandKind),
}

/// Snapshot of the project collection and its status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectState {
    records: Vec<Project>,
    status: StoreStatus,
    #[serde(skip)]
    in_flight: usize,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records in insertion order. Use [`ProjectState::ordered`] for display.
    pub fn records(&self) -> &[Project] {
        &self.records
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.records.iter().find(|project| project.id == id)
    }

    pub fn contains(&self, id: ProjectId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn status(&self) -> StoreStatus {
        self.status
    }

    /// Number of dispatched commands that have not settled yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Records in display order, derived on every call.
    pub fn ordered(&self) -> Vec<&Project> {
        view::ordered(&self.records)
    }

    /// Weight the next created record will receive.
    ///
    /// Saturates at `Weight::MAX`; the new record then ties with the heaviest
    /// one and sorts after it.
    pub fn next_weight(&self) -> Weight {
        self.records
            .iter()
            .filter_map(|project| project.weight)
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }

    /// Applies one lifecycle action in place.
    pub fn apply(&mut self, action: &ProjectAction) {
        match action {
            ProjectAction::Pending(_) => self.begin(),
            ProjectAction::Fulfilled(payload) => {
                self.commit(payload);
                self.settle();
            }
            ProjectAction::Rejected(_) => self.settle(),
        }
    }

    /// Inserts a record at the end of the display order.
    ///
    /// Returns `false` without touching the store when the id is already
    /// present.
    pub fn apply_create(&mut self, mut record: Project) -> bool {
        if self.contains(record.id) {
            debug!(
                "event=create_skipped module=store status=duplicate id={}",
                record.id
            );
            return false;
        }
        record.weight = Some(self.next_weight());
        self.records.push(record);
        true
    }

    /// Removes the record with `id`. Returns whether a record was removed.
    pub fn apply_delete(&mut self, id: ProjectId) -> bool {
        let before = self.records.len();
        self.records.retain(|project| project.id != id);
        let removed = self.records.len() != before;
        if !removed {
            debug!("event=delete_skipped module=store status=unknown_id id={id}");
        }
        removed
    }

    /// Merges `patch` into its record. Returns whether a record matched.
    pub fn apply_rename(&mut self, patch: &ProjectPatch) -> bool {
        self.merge_patch(patch)
    }

    /// Merges every patch into its record, skipping unknown ids.
    ///
    /// Returns the number of patches that matched a record.
    pub fn apply_reorder_batch(&mut self, patches: &[ProjectPatch]) -> usize {
        patches
            .iter()
            .filter(|patch| self.merge_patch(patch))
            .count()
    }

    fn commit(&mut self, payload: &CommandPayload) {
        match payload {
            CommandPayload::Create(record) => {
                self.apply_create(record.clone());
            }
            CommandPayload::Delete(id) => {
                self.apply_delete(*id);
            }
            CommandPayload::Rename(patch) => {
                self.apply_rename(patch);
            }
            CommandPayload::ReorderBatch(patches) => {
                let matched = self.apply_reorder_batch(patches);
                if matched != patches.len() {
                    debug!(
                        "event=reorder_partial module=store status=ok matched={} dropped={}",
                        matched,
                        patches.len() - matched
                    );
                }
            }
        }
    }

    fn merge_patch(&mut self, patch: &ProjectPatch) -> bool {
        match self.records.iter_mut().find(|project| project.id == patch.id) {
            Some(project) => {
                project.merge(patch);
                true
            }
            None => false,
        }
    }

    fn begin(&mut self) {
        self.in_flight += 1;
        self.status = StoreStatus::Loading;
    }

    fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        if self.in_flight == 0 {
            self.status = StoreStatus::Idle;
        }
    }
}

/// Pure transition: returns the state that results from applying `action`.
pub fn reduce(state: &ProjectState, action: &ProjectAction) -> ProjectState {
    let mut next = state.clone();
    next.apply(action);
    next
}

#[cfg(test)]
mod tests {
    use super::{reduce, CommandKind, CommandPayload, ProjectAction, ProjectState, StoreStatus};
    use crate::model::project::{Project, ProjectPatch};
    use uuid::Uuid;

    fn record(seed: u128) -> Project {
        Project::new(Uuid::from_u128(seed), 1_700_000_000_000, None)
    }

    #[test]
    fn create_into_empty_store_gets_weight_one() {
        let mut state = ProjectState::new();
        assert!(state.apply_create(record(1)));
        assert_eq!(state.get(Uuid::from_u128(1)).unwrap().weight, Some(1));
    }

    #[test]
    fn create_ignores_incoming_weight() {
        let mut state = ProjectState::new();
        let mut incoming = record(1);
        incoming.weight = Some(40);
        state.apply_create(incoming);
        assert_eq!(state.get(Uuid::from_u128(1)).unwrap().weight, Some(1));
    }

    #[test]
    fn next_weight_saturates_at_max() {
        let mut state = ProjectState::new();
        state.apply_create(record(1));
        state.apply_reorder_batch(&[ProjectPatch::reweight(Uuid::from_u128(1), Some(i64::MAX))]);
        assert_eq!(state.next_weight(), i64::MAX);
    }

    #[test]
    fn duplicate_create_is_rejected_by_store() {
        let mut state = ProjectState::new();
        assert!(state.apply_create(record(1)));
        assert!(!state.apply_create(record(1)));
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn reduce_leaves_input_untouched() {
        let state = ProjectState::new();
        let next = reduce(
            &state,
            &ProjectAction::Fulfilled(CommandPayload::Create(record(7))),
        );
        assert!(state.is_empty());
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn settle_without_pending_keeps_idle() {
        let mut state = ProjectState::new();
        state.apply(&ProjectAction::Rejected(CommandKind::Delete));
        assert_eq!(state.status(), StoreStatus::Idle);
        assert_eq!(state.in_flight(), 0);
    }

    #[test]
    fn rename_unknown_id_is_noop() {
        let mut state = ProjectState::new();
        state.apply_create(record(1));
        let before = state.clone();
        assert!(!state.apply_rename(&ProjectPatch::rename(Uuid::from_u128(2), "x")));
        assert_eq!(state, before);
    }
}
