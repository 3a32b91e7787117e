use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::info;

use super::analysis::{AnalysisGateway, AnalysisProvider};
use super::domain::{CandidateId, CandidateProfile};
use super::intake::{import_candidates, CandidateImportError};
use super::ranking::{RankedCandidate, RankingService};
use super::repository::{CandidateFilter, CandidateRepository, CandidateView, RepositoryError};
use super::scoring::{ScoringConfig, ScoringEngine};
use super::selection::{SelectedMember, SelectionError, SelectionManager, SelectionSnapshot};

/// Service composing the repository, the scoring engine, the selection
/// manager, and the analysis gateway behind one API surface.
pub struct CandidateService<R, P> {
    repository: Arc<R>,
    selection: Arc<SelectionManager>,
    ranking: RankingService<R>,
    analyst: AnalysisGateway<P>,
}

impl<R, P> CandidateService<R, P>
where
    R: CandidateRepository + 'static,
    P: AnalysisProvider + 'static,
{
    pub fn new(
        repository: Arc<R>,
        provider: Arc<P>,
        config: ScoringConfig,
        analysis_timeout: Duration,
    ) -> Self {
        let selection = Arc::new(SelectionManager::new());
        let engine = Arc::new(ScoringEngine::new(config));
        let ranking = RankingService::new(repository.clone(), selection.clone(), engine);
        let analyst = AnalysisGateway::new(provider, analysis_timeout);

        Self {
            repository,
            selection,
            ranking,
            analyst,
        }
    }

    /// Bulk-import form submissions, returning how many candidates landed.
    pub fn import<Rd: Read>(&self, reader: Rd) -> Result<usize, CandidateServiceError> {
        let profiles = import_candidates(reader)?;
        let count = profiles.len();

        for profile in profiles {
            self.repository.insert(profile)?;
        }

        info!(count, "imported candidate submissions");
        Ok(count)
    }

    /// Rank the filtered pool against one selection snapshot. Analysis text
    /// is attached per candidate: freshly requested when asked for,
    /// otherwise only whatever the cache already holds.
    pub async fn rank(
        &self,
        filter: &CandidateFilter,
        include_analysis: bool,
    ) -> Result<Vec<RankedCandidate>, CandidateServiceError> {
        let snapshot = self.selection.snapshot();
        let mut ranked = self.ranking.rank_against(filter, &snapshot)?;

        for entry in &mut ranked {
            entry.scores.analysis = if include_analysis {
                Some(self.analyst.analyze(&entry.candidate, &snapshot).await)
            } else {
                self.analyst.cached(&entry.candidate.candidate_id)
            };
        }

        Ok(ranked)
    }

    /// Select a candidate into the team, enforcing the capacity invariant.
    pub fn select(&self, id: &CandidateId) -> Result<SelectionView, CandidateServiceError> {
        let profile = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let snapshot = self.selection.select(SelectedMember {
            candidate_id: profile.candidate_id.clone(),
            location: profile.location.clone(),
        })?;

        info!(candidate = %id.0, team_size = snapshot.len(), "candidate selected");
        Ok(SelectionView::for_candidate(id, &snapshot))
    }

    /// Remove a candidate from the team; removing an unselected candidate
    /// succeeds without changing anything.
    pub fn deselect(&self, id: &CandidateId) -> Result<SelectionView, CandidateServiceError> {
        self.repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let snapshot = self.selection.deselect(id);
        info!(candidate = %id.0, team_size = snapshot.len(), "candidate deselected");
        Ok(SelectionView::for_candidate(id, &snapshot))
    }

    /// Fetch a candidate plus selection flag and cached analysis.
    pub fn get(&self, id: &CandidateId) -> Result<CandidateView, CandidateServiceError> {
        let profile = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let mut view = CandidateView::from_profile(&profile, self.selection.is_selected(id));
        view.analysis = self.analyst.cached(id);
        Ok(view)
    }

    /// Profiles of the currently selected team, in selection order.
    pub fn selected_profiles(&self) -> Result<Vec<CandidateProfile>, CandidateServiceError> {
        let snapshot = self.selection.snapshot();
        Ok(self.repository.fetch_many(&snapshot.member_ids())?)
    }

    pub fn selection_snapshot(&self) -> SelectionSnapshot {
        self.selection.snapshot()
    }

    /// Best-effort assessment for one candidate against the current team.
    pub async fn analyze(&self, id: &CandidateId) -> Result<String, CandidateServiceError> {
        let profile = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        let snapshot = self.selection.snapshot();
        Ok(self.analyst.analyze(&profile, &snapshot).await)
    }
}

/// Error raised by the candidate service.
#[derive(Debug, thiserror::Error)]
pub enum CandidateServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error(transparent)]
    Import(#[from] CandidateImportError),
}

/// Response payload for select/deselect calls.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionView {
    pub candidate_id: CandidateId,
    pub selected: bool,
    pub team_size: usize,
    pub team: Vec<CandidateId>,
}

impl SelectionView {
    fn for_candidate(id: &CandidateId, snapshot: &SelectionSnapshot) -> Self {
        Self {
            candidate_id: id.clone(),
            selected: snapshot.contains(id),
            team_size: snapshot.len(),
            team: snapshot.member_ids(),
        }
    }
}
