//! Project record and patch model.
//!
//! # Responsibility
//! - Define the canonical project record held by the store.
//! - Provide field-level merge semantics for partial updates.
//!
//! # Invariants
//! - `id` and `date_created` are set once at creation and never patched.
//! - An absent patch field leaves the record field untouched; absence is
//!   never serialized as `null` or `0`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for one project record.
pub type ProjectId = Uuid;

/// Integer ordering key. Lower weights sort earlier.
pub type Weight = i64;

/// One entry of the project list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Opaque identity, generated when the create command derives its payload.
    pub id: ProjectId,
    /// User label. `None` marks a draft row that has not been named yet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unix epoch milliseconds.
    pub date_created: i64,
    /// Display order key. Assigned by the store when the create commits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

impl Project {
    /// Creates an unplaced project record.
    ///
    /// The weight stays `None` until the record is committed to a store.
    pub fn new(id: ProjectId, date_created: i64, name: Option<String>) -> Self {
        Self {
            id,
            name,
            date_created,
            weight: None,
        }
    }

    /// Returns whether the project carries a non-empty label.
    ///
    /// Nameless and empty-named rows are both treated as drafts by the
    /// delete gate and the name-commit flow.
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|name| !name.is_empty())
    }

    /// Merges every present field of `patch` into this record.
    ///
    /// The patch `id` is a lookup key only; callers match it before merging.
    pub fn merge(&mut self, patch: &ProjectPatch) {
        if let Some(name) = &patch.name {
            self.name = Some(name.clone());
        }
        if let Some(weight) = patch.weight {
            self.weight = Some(weight);
        }
    }
}

/// Partial project keyed by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    pub id: ProjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<Weight>,
}

impl ProjectPatch {
    /// Patch that only replaces the label.
    pub fn rename(id: ProjectId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            weight: None,
        }
    }

    /// Patch that only touches the weight. `None` leaves the weight as is.
    pub fn reweight(id: ProjectId, weight: Option<Weight>) -> Self {
        Self {
            id,
            name: None,
            weight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectPatch};
    use uuid::Uuid;

    #[test]
    fn merge_replaces_only_present_fields() {
        let id = Uuid::from_u128(1);
        let mut project = Project::new(id, 1_700_000_000_000, Some("Alpha".to_string()));
        project.weight = Some(4);

        project.merge(&ProjectPatch::reweight(id, Some(9)));
        assert_eq!(project.name.as_deref(), Some("Alpha"));
        assert_eq!(project.weight, Some(9));

        project.merge(&ProjectPatch::rename(id, "Beta"));
        assert_eq!(project.name.as_deref(), Some("Beta"));
        assert_eq!(project.weight, Some(9));
    }

    #[test]
    fn absent_weight_patch_keeps_unplaced_record_unplaced() {
        let id = Uuid::from_u128(2);
        let mut project = Project::new(id, 0, None);
        project.merge(&ProjectPatch::reweight(id, None));
        assert_eq!(project.weight, None);
    }

    #[test]
    fn empty_name_is_not_a_name() {
        let mut project = Project::new(Uuid::from_u128(3), 0, None);
        assert!(!project.has_name());
        project.name = Some(String::new());
        assert!(!project.has_name());
        project.name = Some("x".to_string());
        assert!(project.has_name());
    }
}
