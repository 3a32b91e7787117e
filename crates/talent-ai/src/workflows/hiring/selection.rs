use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::domain::CandidateId;
use super::taxonomy::PRIMARY_COUNTRY;

/// Hard cap on simultaneously selected candidates.
pub const SELECTION_CAPACITY: usize = 5;

/// The slice of a selected candidate the location factor needs. Carrying the
/// location here keeps snapshots self-contained; evaluators never reach back
/// into the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedMember {
    pub candidate_id: CandidateId,
    pub location: Option<String>,
}

/// Immutable, ordered view of the selection set taken at a single point in
/// time. A ranking pass scores every candidate against one snapshot, so a
/// concurrent select or deselect cannot skew part of the pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSnapshot {
    members: Vec<SelectedMember>,
}

impl SelectionSnapshot {
    pub fn members(&self) -> &[SelectedMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: &CandidateId) -> bool {
        self.members.iter().any(|member| &member.candidate_id == id)
    }

    pub fn member_ids(&self) -> Vec<CandidateId> {
        self.members
            .iter()
            .map(|member| member.candidate_id.clone())
            .collect()
    }

    /// True when any member's location matches `country` exactly (trimmed).
    pub fn has_member_in(&self, country: &str) -> bool {
        self.members.iter().any(|member| {
            member
                .location
                .as_deref()
                .map(|location| location.trim() == country)
                .unwrap_or(false)
        })
    }

    /// True when the required primary-country seat is already filled.
    pub fn covers_primary_country(&self) -> bool {
        self.has_member_in(PRIMARY_COUNTRY)
    }
}

/// Error raised when a select would overflow the team.
#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("selection capacity of {capacity} candidates reached")]
    CapacityExceeded { capacity: usize },
}

/// Owner of the mutable selection set. The capacity check and the insertion
/// happen under one lock acquisition, so two racing selects can never both
/// claim the final slot.
#[derive(Debug, Default)]
pub struct SelectionManager {
    members: Mutex<Vec<SelectedMember>>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a candidate selected. Re-selecting an already-selected candidate
    /// is a no-op success and does not consume a slot.
    pub fn select(&self, member: SelectedMember) -> Result<SelectionSnapshot, SelectionError> {
        let mut members = self.members.lock().expect("selection mutex poisoned");

        if members
            .iter()
            .any(|existing| existing.candidate_id == member.candidate_id)
        {
            return Ok(SelectionSnapshot {
                members: members.clone(),
            });
        }

        if members.len() >= SELECTION_CAPACITY {
            return Err(SelectionError::CapacityExceeded {
                capacity: SELECTION_CAPACITY,
            });
        }

        members.push(member);
        Ok(SelectionSnapshot {
            members: members.clone(),
        })
    }

    /// Mark a candidate unselected. Deselecting an unknown id is a no-op.
    pub fn deselect(&self, id: &CandidateId) -> SelectionSnapshot {
        let mut members = self.members.lock().expect("selection mutex poisoned");
        members.retain(|member| &member.candidate_id != id);
        SelectionSnapshot {
            members: members.clone(),
        }
    }

    pub fn is_selected(&self, id: &CandidateId) -> bool {
        let members = self.members.lock().expect("selection mutex poisoned");
        members.iter().any(|member| &member.candidate_id == id)
    }

    /// Copy-on-read snapshot of the current members in insertion order.
    pub fn snapshot(&self) -> SelectionSnapshot {
        let members = self.members.lock().expect("selection mutex poisoned");
        SelectionSnapshot {
            members: members.clone(),
        }
    }
}
