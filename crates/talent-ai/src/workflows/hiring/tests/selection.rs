use std::sync::Arc;
use std::thread;

use crate::workflows::hiring::domain::CandidateId;
use crate::workflows::hiring::selection::{
    SelectedMember, SelectionError, SelectionManager, SELECTION_CAPACITY,
};

fn member(id: &str) -> SelectedMember {
    SelectedMember {
        candidate_id: CandidateId(id.to_string()),
        location: None,
    }
}

#[test]
fn capacity_is_enforced_and_the_overflow_select_leaves_the_set_unchanged() {
    let manager = SelectionManager::new();

    for index in 0..SELECTION_CAPACITY {
        manager
            .select(member(&format!("cand-{index}")))
            .expect("selects under capacity succeed");
    }
    assert_eq!(manager.snapshot().len(), SELECTION_CAPACITY);

    let before = manager.snapshot();
    let overflow = manager.select(member("cand-overflow"));
    match overflow {
        Err(SelectionError::CapacityExceeded { capacity }) => {
            assert_eq!(capacity, SELECTION_CAPACITY)
        }
        Ok(_) => panic!("sixth select must fail"),
    }
    assert_eq!(manager.snapshot(), before);
}

#[test]
fn reselecting_a_member_is_an_idempotent_no_op() {
    let manager = SelectionManager::new();

    manager.select(member("cand-1")).expect("first select");
    let first = manager.snapshot();
    manager.select(member("cand-1")).expect("re-select succeeds");
    assert_eq!(manager.snapshot(), first);
    assert_eq!(manager.snapshot().len(), 1);

    // The duplicate never consumed a slot: four more distinct selects fit.
    for index in 2..=SELECTION_CAPACITY {
        manager
            .select(member(&format!("cand-{index}")))
            .expect("capacity was not spent on the duplicate");
    }
}

#[test]
fn deselect_is_unconditional_and_restores_a_slot() {
    let manager = SelectionManager::new();

    // Deselecting an unknown id is a quiet no-op.
    let snapshot = manager.deselect(&CandidateId("ghost".to_string()));
    assert!(snapshot.is_empty());

    manager.select(member("cand-1")).expect("select");
    manager.select(member("cand-2")).expect("select");
    manager.deselect(&CandidateId("cand-1".to_string()));

    let after = manager.snapshot();
    assert_eq!(after.len(), 1);
    assert!(after.contains(&CandidateId("cand-2".to_string())));

    // Re-selecting the removed member restores it without touching others.
    manager.select(member("cand-1")).expect("re-select fits");
    let restored = manager.snapshot();
    assert!(restored.contains(&CandidateId("cand-1".to_string())));
    assert!(restored.contains(&CandidateId("cand-2".to_string())));
    assert_eq!(restored.len(), 2);
}

#[test]
fn concurrent_selects_never_exceed_capacity() {
    let manager = Arc::new(SelectionManager::new());
    let mut handles = Vec::new();

    for index in 0..16 {
        let manager = manager.clone();
        handles.push(thread::spawn(move || {
            manager.select(member(&format!("cand-{index}"))).is_ok()
        }));
    }

    let successes = handles
        .into_iter()
        .map(|handle| handle.join().expect("selector thread panicked"))
        .filter(|succeeded| *succeeded)
        .count();

    assert_eq!(successes, SELECTION_CAPACITY);
    assert_eq!(manager.snapshot().len(), SELECTION_CAPACITY);
}

#[test]
fn snapshot_preserves_insertion_order() {
    let manager = SelectionManager::new();
    for id in ["first", "second", "third"] {
        manager.select(member(id)).expect("select");
    }

    let ids: Vec<String> = manager
        .snapshot()
        .members()
        .iter()
        .map(|member| member.candidate_id.0.clone())
        .collect();
    assert_eq!(ids, vec!["first", "second", "third"]);
}
