use serde::{Deserialize, Serialize};

/// Factor weights for the composite total. Kept as named constants so the
/// rubric can be audited and pinned by tests independently of the
/// evaluators. They must sum to 1.0.
pub const SKILLS_WEIGHT: f32 = 0.35;
pub const EXPERIENCE_WEIGHT: f32 = 0.25;
pub const DIVERSITY_WEIGHT: f32 = 0.15;
pub const EDUCATION_WEIGHT: f32 = 0.10;
pub const SALARY_WEIGHT: f32 = 0.10;
pub const LOCATION_WEIGHT: f32 = 0.05;

/// Share of the skills factor granted to tech versus domain matches.
pub const TECH_SKILLS_WEIGHT: f32 = 0.7;
pub const DOMAIN_SKILLS_WEIGHT: f32 = 0.3;

/// Match-count denominators for the skills factor. Matches beyond the cap
/// stop improving the score.
pub const TECH_SKILLS_CAP: usize = 10;
pub const DOMAIN_SKILLS_CAP: usize = 5;

/// Experience sub-score caps.
pub const LEADERSHIP_WEIGHT: f32 = 0.4;
pub const STARTUP_AFFINITY_WEIGHT: f32 = 0.3;
pub const TENURE_BREADTH_WEIGHT: f32 = 0.3;

/// Roles needed for a full tenure-breadth sub-score.
pub const TENURE_TARGET_ROLES: usize = 5;

/// Distinct role categories needed for a full diversity score.
pub const DIVERSITY_TARGET_CATEGORIES: usize = 3;

/// How the education factor is computed.
///
/// `HighestDegree` is the canonical rubric: one strong degree dominates.
/// `Composite` is an optional richer strategy weighing degree level, subject
/// relevance, and school tier; it exists as an explicit configuration choice
/// rather than a silent behavior change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationPolicy {
    #[default]
    HighestDegree,
    Composite,
}

/// Composite-policy weights (degree level / subject relevance / school tier).
pub const COMPOSITE_DEGREE_WEIGHT: f32 = 0.35;
pub const COMPOSITE_SUBJECT_WEIGHT: f32 = 0.35;
pub const COMPOSITE_SCHOOL_WEIGHT: f32 = 0.30;

/// School-tier values used by the composite policy.
pub const TOP_25_SCHOOL_SCORE: f32 = 1.0;
pub const TOP_50_SCHOOL_SCORE: f32 = 0.7;
pub const UNRANKED_SCHOOL_SCORE: f32 = 0.4;

/// Tunable portion of the rubric. The factor weights themselves are fixed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub education_policy: EducationPolicy,
}
