use serde::{Deserialize, Serialize};

use super::domain::{CandidateId, CandidateProfile};

/// Conjunctive filter accepted by the ranking endpoint and pushed down to
/// storage. Both predicates are optional; an empty filter matches everyone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateFilter {
    /// Every listed skill must have a case-insensitive substring match in
    /// the candidate's skill set ("react" admits "React Native").
    #[serde(default)]
    pub skills: Option<Vec<String>>,
    /// Exact location match, compared trimmed.
    #[serde(default)]
    pub location: Option<String>,
}

impl CandidateFilter {
    pub fn matches(&self, profile: &CandidateProfile) -> bool {
        if let Some(skills) = &self.skills {
            let candidate_skills: Vec<String> = profile
                .skills
                .iter()
                .map(|skill| skill.to_lowercase())
                .collect();
            let all_present = skills.iter().all(|wanted| {
                let wanted = wanted.to_lowercase();
                candidate_skills.iter().any(|skill| skill.contains(&wanted))
            });
            if !all_present {
                return false;
            }
        }

        if let Some(location) = &self.location {
            let matches = profile
                .location
                .as_deref()
                .map(|candidate| candidate.trim() == location.trim())
                .unwrap_or(false);
            if !matches {
                return false;
            }
        }

        true
    }
}

/// Storage abstraction over the candidate pool. Implementations must return
/// `query` results in a stable order (insertion order for the in-memory
/// store) because ranking relies on it for deterministic tie-breaking.
pub trait CandidateRepository: Send + Sync {
    fn insert(&self, profile: CandidateProfile) -> Result<CandidateProfile, RepositoryError>;
    fn fetch(&self, id: &CandidateId) -> Result<Option<CandidateProfile>, RepositoryError>;
    fn query(&self, filter: &CandidateFilter) -> Result<Vec<CandidateProfile>, RepositoryError>;
    fn fetch_many(&self, ids: &[CandidateId]) -> Result<Vec<CandidateProfile>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("candidate already exists")]
    Conflict,
    #[error("candidate not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Sanitized per-candidate view for API responses: the profile plus the
/// selection flag and any cached analysis text layered on top.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateView {
    pub candidate_id: CandidateId,
    pub name: String,
    pub location: Option<String>,
    pub selected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}

impl CandidateView {
    pub fn from_profile(profile: &CandidateProfile, selected: bool) -> Self {
        Self {
            candidate_id: profile.candidate_id.clone(),
            name: profile.name.clone(),
            location: profile.location.clone(),
            selected,
            analysis: None,
        }
    }
}
