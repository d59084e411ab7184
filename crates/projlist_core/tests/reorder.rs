use projlist_core::{reorder_patches, Project, ProjectId, ProjectPatch, ProjectState};
use uuid::Uuid;

fn seeded_state(count: u128) -> ProjectState {
    let mut state = ProjectState::new();
    for seed in 0..count {
        state.apply_create(Project::new(Uuid::from_u128(seed), 0, None));
    }
    state
}

fn display_seeds(state: &ProjectState) -> Vec<u128> {
    state
        .ordered()
        .iter()
        .map(|project| project.id.as_u128())
        .collect()
}

fn move_by_index(state: &mut ProjectState, from: usize, to: usize) -> Vec<ProjectPatch> {
    let (active, target): (ProjectId, ProjectId) = {
        let ordered = state.ordered();
        (ordered[from].id, ordered[to].id)
    };
    let patches = reorder_patches(&state.ordered(), active, target);
    state.apply_reorder_batch(&patches);
    patches
}

#[test]
fn moving_last_to_second_shifts_only_the_range() {
    let mut state = seeded_state(5);
    let patches = move_by_index(&mut state, 4, 1);

    assert_eq!(
        patches,
        vec![
            ProjectPatch::reweight(Uuid::from_u128(4), Some(2)),
            ProjectPatch::reweight(Uuid::from_u128(1), Some(3)),
            ProjectPatch::reweight(Uuid::from_u128(2), Some(4)),
            ProjectPatch::reweight(Uuid::from_u128(3), Some(5)),
        ]
    );
    assert_eq!(state.get(Uuid::from_u128(0)).unwrap().weight, Some(1));
    assert_eq!(display_seeds(&state), vec![0, 4, 1, 2, 3]);
}

#[test]
fn patch_count_is_distance_plus_one() {
    for (from, to) in [(0, 4), (4, 0), (1, 2), (3, 1)] {
        let mut state = seeded_state(5);
        let patches = move_by_index(&mut state, from, to);
        assert_eq!(patches.len(), from.abs_diff(to) + 1);
    }
}

#[test]
fn move_and_move_back_restores_order() {
    for (from, to) in [(0, 3), (4, 1), (2, 3), (1, 0)] {
        let mut state = seeded_state(5);
        let original = display_seeds(&state);

        move_by_index(&mut state, from, to);
        assert_ne!(display_seeds(&state), original);
        move_by_index(&mut state, to, from);

        assert_eq!(display_seeds(&state), original);
    }
}

#[test]
fn reordered_range_keeps_distinct_weights() {
    let mut state = seeded_state(6);
    move_by_index(&mut state, 1, 5);
    move_by_index(&mut state, 4, 0);

    let mut weights: Vec<i64> = state
        .records()
        .iter()
        .filter_map(|project| project.weight)
        .collect();
    weights.sort_unstable();
    weights.dedup();
    assert_eq!(weights, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn dragging_first_onto_last_of_three() {
    let mut state = ProjectState::new();
    let a = Uuid::from_u128(0xA);
    let b = Uuid::from_u128(0xB);
    let c = Uuid::from_u128(0xC);
    for id in [a, b, c] {
        state.apply_create(Project::new(id, 0, None));
    }

    let patches = reorder_patches(&state.ordered(), a, c);
    assert_eq!(
        patches,
        vec![
            ProjectPatch::reweight(a, Some(3)),
            ProjectPatch::reweight(b, Some(1)),
            ProjectPatch::reweight(c, Some(2)),
        ]
    );

    state.apply_reorder_batch(&patches);
    let ordered = state.ordered();
    let ids: Vec<Uuid> = ordered.iter().map(|project| project.id).collect();
    let weights: Vec<Option<i64>> = ordered.iter().map(|project| project.weight).collect();
    assert_eq!(ids, vec![b, c, a]);
    assert_eq!(weights, vec![Some(1), Some(2), Some(3)]);
}

#[test]
fn dragging_onto_unplaced_record_is_a_noop() {
    let mut state: ProjectState = serde_json::from_value(serde_json::json!({
        "records": [
            { "id": Uuid::from_u128(1).to_string(), "dateCreated": 1, "weight": 1 },
            { "id": Uuid::from_u128(2).to_string(), "dateCreated": 2, "weight": 2 },
            { "id": Uuid::from_u128(3).to_string(), "dateCreated": 3 },
        ],
        "status": "idle",
    }))
    .unwrap();

    let patches = reorder_patches(&state.ordered(), Uuid::from_u128(1), Uuid::from_u128(3));
    assert!(patches.is_empty());

    state.apply_reorder_batch(&patches);
    assert_eq!(display_seeds(&state), vec![1, 2, 3]);
    assert_eq!(state.get(Uuid::from_u128(1)).unwrap().weight, Some(1));
    assert_eq!(state.get(Uuid::from_u128(2)).unwrap().weight, Some(2));
}

#[test]
fn dragging_unplaced_record_onto_placed_one_places_it() {
    let mut state: ProjectState = serde_json::from_value(serde_json::json!({
        "records": [
            { "id": Uuid::from_u128(1).to_string(), "dateCreated": 1, "weight": 1 },
            { "id": Uuid::from_u128(2).to_string(), "dateCreated": 2, "weight": 2 },
            { "id": Uuid::from_u128(3).to_string(), "dateCreated": 3 },
        ],
        "status": "idle",
    }))
    .unwrap();

    let patches = reorder_patches(&state.ordered(), Uuid::from_u128(3), Uuid::from_u128(1));
    assert_eq!(patches.len(), 3);
    state.apply_reorder_batch(&patches);

    assert_eq!(display_seeds(&state), vec![3, 1, 2]);
    let weights: Vec<Option<i64>> = state.ordered().iter().map(|p| p.weight).collect();
    assert_eq!(weights, vec![Some(1), Some(2), Some(3)]);
}
