//! Minimal weight reassignment for drag-and-drop moves.
//!
//! # Responsibility
//! - Translate "move `active` to the slot of `target`" into weight patches.
//! - Touch only the range between the old and new position.
//!
//! # Invariants
//! - The active record takes the target's current weight.
//! - Every record strictly between the two slots, plus the target, shifts
//!   by exactly one step toward the vacated slot.
//! - Records outside that range are never patched.
//! - A record with no weight stays unplaced; no weight is invented for it.
//! - Moves onto an unplaced target, or moves whose shift would leave the
//!   `i64` range, produce no patches.

use crate::model::project::{Project, ProjectId, ProjectPatch, Weight};
use log::debug;

/// Computes the weight patches for moving `active` onto `target`.
///
/// `ordered` must be the current display order (see [`crate::view::ordered`]).
/// Returns an empty list when `active == target`, when either id is not in
/// `ordered`, when the target has no weight to hand over, or when shifting
/// the range would overflow. Otherwise returns `|active_idx - target_idx| + 1`
/// patches with the active record first, followed by the shifted range in
/// display order.
pub fn reorder_patches(
    ordered: &[&Project],
    active: ProjectId,
    target: ProjectId,
) -> Vec<ProjectPatch> {
    if active == target {
        return Vec::new();
    }
    let (Some(active_idx), Some(target_idx)) =
        (position(ordered, active), position(ordered, target))
    else {
        return Vec::new();
    };
    let Some(target_weight) = ordered[target_idx].weight else {
        debug!("event=reorder_skipped module=ordering status=unplaced_target id={target}");
        return Vec::new();
    };

    let (range, delta) = if active_idx > target_idx {
        // Moving toward the front: the displaced range slides back.
        (&ordered[target_idx..active_idx], 1)
    } else {
        (&ordered[active_idx + 1..=target_idx], -1)
    };

    let mut patches = Vec::with_capacity(range.len() + 1);
    patches.push(ProjectPatch::reweight(active, Some(target_weight)));
    for project in range {
        match shifted(project, delta) {
            Some(patch) => patches.push(patch),
            None => {
                debug!(
                    "event=reorder_skipped module=ordering status=weight_overflow id={}",
                    project.id
                );
                return Vec::new();
            }
        }
    }
    patches
}

fn position(ordered: &[&Project], id: ProjectId) -> Option<usize> {
    ordered.iter().position(|project| project.id == id)
}

/// `None` when the shifted weight would leave the `i64` range.
fn shifted(project: &Project, delta: Weight) -> Option<ProjectPatch> {
    let weight = match project.weight {
        Some(weight) => Some(weight.checked_add(delta)?),
        None => None,
    };
    Some(ProjectPatch::reweight(project.id, weight))
}
