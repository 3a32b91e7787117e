use std::cmp::Ordering;
use std::sync::Arc;

use serde::Serialize;

use super::domain::{CandidateProfile, ScoreBreakdown};
use super::repository::{CandidateFilter, CandidateRepository, RepositoryError};
use super::scoring::ScoringEngine;
use super::selection::{SelectionManager, SelectionSnapshot};

/// One row of a ranking result.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
    pub candidate: CandidateProfile,
    pub scores: ScoreBreakdown,
}

/// Orchestrates evaluators and the aggregator across the candidate pool.
/// Reads the selection set exactly once per pass, so every candidate in a
/// pass is scored against the identical selection state.
pub struct RankingService<R> {
    repository: Arc<R>,
    selection: Arc<SelectionManager>,
    engine: Arc<ScoringEngine>,
}

impl<R> RankingService<R>
where
    R: CandidateRepository,
{
    pub fn new(
        repository: Arc<R>,
        selection: Arc<SelectionManager>,
        engine: Arc<ScoringEngine>,
    ) -> Self {
        Self {
            repository,
            selection,
            engine,
        }
    }

    /// Rank the filtered pool against the current selection snapshot,
    /// descending by total. The sort is stable, so equal totals keep their
    /// repository order and re-ranking an unchanged pool is deterministic.
    pub fn rank(&self, filter: &CandidateFilter) -> Result<Vec<RankedCandidate>, RepositoryError> {
        let snapshot = self.selection.snapshot();
        self.rank_against(filter, &snapshot)
    }

    /// Rank against an explicit snapshot. Exposed so callers holding a
    /// snapshot (e.g. for analysis context) score against the same state.
    pub fn rank_against(
        &self,
        filter: &CandidateFilter,
        snapshot: &SelectionSnapshot,
    ) -> Result<Vec<RankedCandidate>, RepositoryError> {
        let pool = self.repository.query(filter)?;

        let mut ranked: Vec<RankedCandidate> = pool
            .into_iter()
            .map(|candidate| {
                let scores = self.engine.score(&candidate, snapshot);
                RankedCandidate { candidate, scores }
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.scores
                .total
                .partial_cmp(&a.scores.total)
                .unwrap_or(Ordering::Equal)
        });

        Ok(ranked)
    }
}
