//! Bulk intake of candidate form submissions. The submission file is a JSON
//! array of loosely-shaped records; every optional or malformed field is
//! resolved to its documented default here so the rest of the engine never
//! re-derives missing-data policy.

use std::io::Read;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

use super::domain::{
    CandidateId, CandidateProfile, Degree, Education, SalaryExpectation, WorkExperience,
};

/// Error raised when the submissions payload cannot be read at all.
/// Field-level problems inside individual records degrade to defaults
/// instead of failing the import.
#[derive(Debug, thiserror::Error)]
pub enum CandidateImportError {
    #[error("candidate submissions are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to read candidate submissions: {0}")]
    Io(#[from] std::io::Error),
}

static CANDIDATE_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_candidate_id() -> CandidateId {
    let id = CANDIDATE_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    CandidateId(format!("cand-{id:06}"))
}

/// Parse a submissions array into immutable candidate profiles, assigning
/// sequential candidate ids.
pub fn import_candidates<R: Read>(
    reader: R,
) -> Result<Vec<CandidateProfile>, CandidateImportError> {
    let mut buffer = String::new();
    let mut reader = reader;
    reader.read_to_string(&mut buffer)?;

    let rows: Vec<SubmissionRow> = serde_json::from_str(&buffer)?;

    Ok(rows
        .into_iter()
        .map(|row| row.into_profile(next_candidate_id()))
        .collect())
}

#[derive(Debug, Deserialize)]
struct SubmissionRow {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    submitted_at: Option<String>,
    #[serde(default)]
    work_availability: Vec<String>,
    #[serde(default)]
    annual_salary_expectation: Option<SalaryExpectationRow>,
    #[serde(default)]
    work_experiences: Vec<WorkExperienceRow>,
    #[serde(default)]
    education: Option<EducationRow>,
    #[serde(default)]
    skills: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SalaryExpectationRow {
    #[serde(
        default,
        alias = "full-time",
        deserialize_with = "empty_string_as_none"
    )]
    full_time: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WorkExperienceRow {
    #[serde(default)]
    company: String,
    #[serde(rename = "roleName", default)]
    role_name: String,
}

#[derive(Debug, Deserialize)]
struct EducationRow {
    #[serde(default)]
    highest_level: String,
    #[serde(default)]
    degrees: Vec<DegreeRow>,
}

#[derive(Debug, Deserialize)]
struct DegreeRow {
    #[serde(default)]
    degree: String,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    school: String,
    #[serde(default)]
    gpa: String,
    #[serde(rename = "startDate", default)]
    start_date: String,
    #[serde(rename = "endDate", default)]
    end_date: String,
    #[serde(rename = "originalSchool", default)]
    original_school: String,
    #[serde(rename = "isTop25", default)]
    is_top25: bool,
    #[serde(rename = "isTop50", default)]
    is_top50: bool,
}

impl SubmissionRow {
    fn into_profile(self, candidate_id: CandidateId) -> CandidateProfile {
        let submitted_at = self.submitted_at.as_deref().and_then(parse_timestamp);

        let annual_salary_expectation = self
            .annual_salary_expectation
            .map(|row| SalaryExpectation {
                full_time: row.full_time,
            })
            .unwrap_or_default();

        let work_experiences = self
            .work_experiences
            .into_iter()
            .map(|row| WorkExperience {
                company: row.company,
                role_name: row.role_name,
            })
            .collect();

        let education = self.education.map(|row| Education {
            highest_level: row.highest_level,
            degrees: row
                .degrees
                .into_iter()
                .map(|degree| Degree {
                    degree: degree.degree,
                    subject: degree.subject,
                    school: degree.school,
                    gpa: degree.gpa,
                    start_date: degree.start_date,
                    end_date: degree.end_date,
                    original_school: degree.original_school,
                    is_top25: degree.is_top25,
                    is_top50: degree.is_top50,
                })
                .collect(),
        });

        CandidateProfile {
            candidate_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            location: self.location.map(|value| value.trim().to_string()),
            submitted_at,
            work_availability: self.work_availability,
            annual_salary_expectation,
            work_experiences,
            education,
            skills: self.skills,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value.trim())
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
