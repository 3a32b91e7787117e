use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier wrapper for imported candidates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CandidateId(pub String);

/// One entry in a candidate's ordered work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: String,
    pub role_name: String,
}

/// A single degree as reported on the submission form. School-ranking flags
/// are independent: a top-25 school is not implicitly top-50.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    pub degree: String,
    pub subject: String,
    pub school: String,
    pub gpa: String,
    pub start_date: String,
    pub end_date: String,
    pub original_school: String,
    pub is_top25: bool,
    pub is_top50: bool,
}

/// Education block with the self-reported highest level and all degrees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub highest_level: String,
    pub degrees: Vec<Degree>,
}

/// Free-text salary expectation; the full-time figure may be missing or
/// malformed ("$117,931", "90k", "negotiable") and must never fail scoring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryExpectation {
    pub full_time: Option<String>,
}

/// Immutable candidate record produced by intake. Every optional field has
/// its "missing" policy resolved here, once, so the evaluators can treat
/// absence uniformly as a floor score of zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub candidate_id: CandidateId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: Option<String>,
    pub submitted_at: Option<DateTime<Utc>>,
    pub work_availability: Vec<String>,
    pub annual_salary_expectation: SalaryExpectation,
    pub work_experiences: Vec<WorkExperience>,
    pub education: Option<Education>,
    pub skills: Vec<String>,
}

/// Per-candidate factor scores, each in [0, 1], with the weighted total in
/// [0, 100]. Always fully populated; missing source data scores zero rather
/// than leaving a hole. The analysis text is an advisory cache and never
/// feeds back into the numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub relevant_skills: f32,
    pub work_experience: f32,
    pub work_diversity: f32,
    pub education: f32,
    pub salary_fit: f32,
    pub location_diversity: f32,
    pub total: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
}
