//! Candidate scoring, ranking, and team selection.
//!
//! Five of the six factor evaluators are pure functions of the candidate;
//! the location factor also depends on the current selection set, so every
//! ranking pass takes one [`selection::SelectionSnapshot`] up front and
//! scores the whole pool against it. The selection set itself is bounded at
//! [`selection::SELECTION_CAPACITY`] members, enforced atomically.

pub mod analysis;
pub mod domain;
pub mod intake;
pub mod ranking;
pub mod repository;
pub mod router;
pub(crate) mod scoring;
pub mod selection;
pub mod service;
pub mod taxonomy;

#[cfg(test)]
mod tests;

pub use analysis::{AnalysisError, AnalysisGateway, AnalysisProvider, ANALYSIS_FALLBACK};
pub use domain::{
    CandidateId, CandidateProfile, Degree, Education, SalaryExpectation, ScoreBreakdown,
    WorkExperience,
};
pub use intake::{import_candidates, CandidateImportError};
pub use ranking::{RankedCandidate, RankingService};
pub use repository::{CandidateFilter, CandidateRepository, CandidateView, RepositoryError};
pub use router::{candidate_router, RankRequest};
pub use scoring::{EducationPolicy, ScoringConfig, ScoringEngine};
pub use selection::{
    SelectedMember, SelectionError, SelectionManager, SelectionSnapshot, SELECTION_CAPACITY,
};
pub use service::{CandidateService, CandidateServiceError, SelectionView};
