mod config;
pub(crate) mod factors;

pub use config::{
    EducationPolicy, ScoringConfig, DIVERSITY_WEIGHT, EDUCATION_WEIGHT, EXPERIENCE_WEIGHT,
    LOCATION_WEIGHT, SALARY_WEIGHT, SKILLS_WEIGHT,
};

use super::domain::{CandidateProfile, ScoreBreakdown};
use super::selection::SelectionSnapshot;

/// Stateless engine combining the six factor evaluators into a
/// `ScoreBreakdown`. Safe to call concurrently across candidates; the only
/// shared input is the immutable snapshot.
#[derive(Debug, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score one candidate against one selection snapshot. Every factor is
    /// populated; missing profile data floors the affected factor to zero.
    pub fn score(
        &self,
        profile: &CandidateProfile,
        snapshot: &SelectionSnapshot,
    ) -> ScoreBreakdown {
        let relevant_skills = factors::skills_score(&profile.skills);
        let work_experience = factors::experience_score(&profile.work_experiences);
        let work_diversity = factors::work_diversity_score(&profile.work_experiences);
        let education =
            factors::education_score(profile.education.as_ref(), self.config.education_policy);
        let salary_fit =
            factors::salary_fit_score(&profile.annual_salary_expectation, &profile.work_experiences);
        let location_diversity = factors::location_score(profile.location.as_deref(), snapshot);

        let total = 100.0
            * (relevant_skills * SKILLS_WEIGHT
                + work_experience * EXPERIENCE_WEIGHT
                + work_diversity * DIVERSITY_WEIGHT
                + education * EDUCATION_WEIGHT
                + salary_fit * SALARY_WEIGHT
                + location_diversity * LOCATION_WEIGHT);

        ScoreBreakdown {
            relevant_skills,
            work_experience,
            work_diversity,
            education,
            salary_fit,
            location_diversity,
            total,
            analysis: None,
        }
    }
}
