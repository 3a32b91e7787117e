use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use crate::workflows::hiring::analysis::{AnalysisError, AnalysisProvider};
use crate::workflows::hiring::domain::{
    CandidateId, CandidateProfile, Degree, Education, SalaryExpectation, WorkExperience,
};
use crate::workflows::hiring::repository::{
    CandidateFilter, CandidateRepository, RepositoryError,
};
use crate::workflows::hiring::scoring::ScoringConfig;
use crate::workflows::hiring::selection::SelectionSnapshot;
use crate::workflows::hiring::service::CandidateService;

/// Vec-backed repository preserving insertion order, which the ranking
/// determinism tests rely on.
#[derive(Default)]
pub(super) struct TestRepository {
    profiles: Mutex<Vec<CandidateProfile>>,
}

impl CandidateRepository for TestRepository {
    fn insert(&self, profile: CandidateProfile) -> Result<CandidateProfile, RepositoryError> {
        let mut profiles = self.profiles.lock().expect("repository mutex poisoned");
        if profiles
            .iter()
            .any(|existing| existing.candidate_id == profile.candidate_id)
        {
            return Err(RepositoryError::Conflict);
        }
        profiles.push(profile.clone());
        Ok(profile)
    }

    fn fetch(&self, id: &CandidateId) -> Result<Option<CandidateProfile>, RepositoryError> {
        let profiles = self.profiles.lock().expect("repository mutex poisoned");
        Ok(profiles
            .iter()
            .find(|profile| &profile.candidate_id == id)
            .cloned())
    }

    fn query(&self, filter: &CandidateFilter) -> Result<Vec<CandidateProfile>, RepositoryError> {
        let profiles = self.profiles.lock().expect("repository mutex poisoned");
        Ok(profiles
            .iter()
            .filter(|profile| filter.matches(profile))
            .cloned()
            .collect())
    }

    fn fetch_many(&self, ids: &[CandidateId]) -> Result<Vec<CandidateProfile>, RepositoryError> {
        let profiles = self.profiles.lock().expect("repository mutex poisoned");
        Ok(ids
            .iter()
            .filter_map(|id| {
                profiles
                    .iter()
                    .find(|profile| &profile.candidate_id == id)
                    .cloned()
            })
            .collect())
    }
}

/// Provider returning a fixed assessment instantly.
pub(super) struct CannedAnalyst;

#[async_trait]
impl AnalysisProvider for CannedAnalyst {
    async fn assess(
        &self,
        profile: &CandidateProfile,
        _snapshot: &SelectionSnapshot,
    ) -> Result<String, AnalysisError> {
        Ok(format!("Assessment for {}", profile.name))
    }
}

/// Provider that always fails, for fallback-path tests.
pub(super) struct FailingAnalyst;

#[async_trait]
impl AnalysisProvider for FailingAnalyst {
    async fn assess(
        &self,
        _profile: &CandidateProfile,
        _snapshot: &SelectionSnapshot,
    ) -> Result<String, AnalysisError> {
        Err(AnalysisError::Transport("connection refused".to_string()))
    }
}

/// Provider that never answers inside any sane timeout.
pub(super) struct StalledAnalyst;

#[async_trait]
impl AnalysisProvider for StalledAnalyst {
    async fn assess(
        &self,
        _profile: &CandidateProfile,
        _snapshot: &SelectionSnapshot,
    ) -> Result<String, AnalysisError> {
        tokio::time::sleep(Duration::from_secs(3600)).await;
        Err(AnalysisError::Transport("unreachable".to_string()))
    }
}

pub(super) fn candidate(id: &str, name: &str) -> CandidateProfile {
    CandidateProfile {
        candidate_id: CandidateId(id.to_string()),
        name: name.to_string(),
        email: format!("{id}@example.com"),
        phone: String::new(),
        location: None,
        submitted_at: None,
        work_availability: vec!["full-time".to_string()],
        annual_salary_expectation: SalaryExpectation::default(),
        work_experiences: Vec::new(),
        education: None,
        skills: Vec::new(),
    }
}

pub(super) fn skilled_candidate(id: &str, name: &str, skills: &[&str]) -> CandidateProfile {
    let mut profile = candidate(id, name);
    profile.skills = skills.iter().map(|skill| skill.to_string()).collect();
    profile
}

pub(super) fn located(mut profile: CandidateProfile, location: &str) -> CandidateProfile {
    profile.location = Some(location.to_string());
    profile
}

pub(super) fn experiences(entries: &[(&str, &str)]) -> Vec<WorkExperience> {
    entries
        .iter()
        .map(|(company, role_name)| WorkExperience {
            company: company.to_string(),
            role_name: role_name.to_string(),
        })
        .collect()
}

pub(super) fn salary(raw: &str) -> SalaryExpectation {
    SalaryExpectation {
        full_time: Some(raw.to_string()),
    }
}

pub(super) fn degree(level: &str, subject: &str, is_top25: bool, is_top50: bool) -> Degree {
    Degree {
        degree: level.to_string(),
        subject: subject.to_string(),
        school: "State University".to_string(),
        gpa: "GPA 3.5-3.9".to_string(),
        start_date: "2015".to_string(),
        end_date: "2019".to_string(),
        original_school: "State University".to_string(),
        is_top25,
        is_top50,
    }
}

pub(super) fn education_with(degrees: Vec<Degree>) -> Education {
    Education {
        highest_level: degrees
            .first()
            .map(|degree| degree.degree.clone())
            .unwrap_or_default(),
        degrees,
    }
}

pub(super) type TestService = CandidateService<TestRepository, CannedAnalyst>;

pub(super) fn service_with_pool(pool: Vec<CandidateProfile>) -> Arc<TestService> {
    let repository = Arc::new(TestRepository::default());
    for profile in pool {
        repository.insert(profile).expect("seed profile inserts");
    }

    Arc::new(CandidateService::new(
        repository,
        Arc::new(CannedAnalyst),
        ScoringConfig::default(),
        Duration::from_millis(250),
    ))
}

/// Ten-candidate pool used by the end-to-end ranking scenario. Four list a
/// react-family skill; one of those is US-based.
pub(super) fn demo_pool() -> Vec<CandidateProfile> {
    let mut pool = Vec::new();

    let mut ada = skilled_candidate("cand-001", "Ada Park", &["React", "TypeScript", "AWS"]);
    ada = located(ada, "United States");
    ada.work_experiences = experiences(&[
        ("Nimbus Startup", "Senior Engineer"),
        ("DataTech", "Data Scientist"),
        ("Orbit Labs", "Product Manager"),
        ("Helio", "Developer"),
        ("Quanta", "Engineer"),
    ]);
    ada.annual_salary_expectation = salary("$125,000");
    ada.education = Some(education_with(vec![degree(
        "Master's Degree",
        "Computer Science",
        true,
        false,
    )]));
    pool.push(ada);

    let mut bruno = skilled_candidate("cand-002", "Bruno Silva", &["React Native", "Kotlin"]);
    bruno = located(bruno, "Canada");
    bruno.work_experiences = experiences(&[("AppWorks", "Mobile Developer")]);
    bruno.annual_salary_expectation = salary("$85,000");
    pool.push(bruno);

    let mut chen = skilled_candidate("cand-003", "Chen Wei", &["Python", "Django", "SQL"]);
    chen = located(chen, "Singapore");
    chen.work_experiences = experiences(&[
        ("CloudTech", "Backend Engineer"),
        ("FinServe", "Analyst"),
    ]);
    chen.annual_salary_expectation = salary("$95,000");
    pool.push(chen);

    let mut dara = skilled_candidate("cand-004", "Dara Okafor", &["react", "node js", "graphql"]);
    dara = located(dara, "Germany");
    dara.work_experiences = experiences(&[
        ("ShopStartup", "Full Stack Developer"),
        ("MediaHouse", "Team Lead"),
    ]);
    dara.annual_salary_expectation = salary("$105,000");
    pool.push(dara);

    let mut eli = skilled_candidate("cand-005", "Eli Stern", &["Java", "Spring Boot"]);
    eli = located(eli, "United Kingdom");
    eli.annual_salary_expectation = salary("$140,000");
    pool.push(eli);

    let mut fatima = skilled_candidate("cand-006", "Fatima Noor", &["Preact", "CSS"]);
    fatima = located(fatima, "India");
    pool.push(fatima);

    let greta = skilled_candidate("cand-007", "Greta Lind", &["Rust", "PostgreSQL"]);
    pool.push(located(greta, "Netherlands"));

    let mut hugo = skilled_candidate("cand-008", "Hugo Reyes", &["Excel", "Power BI"]);
    hugo = located(hugo, "Brazil");
    pool.push(hugo);

    let ines = skilled_candidate("cand-009", "Ines Moreau", &["Tableau"]);
    pool.push(ines);

    let mut jun = skilled_candidate("cand-010", "Jun Sato", &["ReactJS", "Redux"]);
    jun = located(jun, "Australia");
    jun.work_experiences = experiences(&[("GameTech", "Frontend Engineer")]);
    jun.annual_salary_expectation = salary("$92,000");
    pool.push(jun);

    pool
}
