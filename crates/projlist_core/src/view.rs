//! Display-order projection over store contents.
//!
//! # Invariants
//! - Output is sorted ascending by weight; ties keep input order.
//! - Unplaced records (no weight) sort after every placed record.
//! - The projection is recomputed on each call and never stored.

use crate::model::project::{Project, ProjectId, Weight};
use std::cmp::Ordering;

/// Returns records in display order.
pub fn ordered<'a, I>(records: I) -> Vec<&'a Project>
where
    I: IntoIterator<Item = &'a Project>,
{
    let mut items: Vec<&Project> = records.into_iter().collect();
    // `sort_by` is stable, which is what keeps ties in storage order.
    items.sort_by(|left, right| compare_weights(left.weight, right.weight));
    items
}

/// Returns record ids in display order.
pub fn ordered_ids<'a, I>(records: I) -> Vec<ProjectId>
where
    I: IntoIterator<Item = &'a Project>,
{
    ordered(records)
        .into_iter()
        .map(|project| project.id)
        .collect()
}

/// Weight comparison used by the projection.
pub fn compare_weights(left: Option<Weight>, right: Option<Weight>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.cmp(&right),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
