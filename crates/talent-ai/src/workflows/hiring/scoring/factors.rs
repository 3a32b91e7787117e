//! The six factor evaluators. The first five are pure functions of the
//! candidate alone; the location factor also takes the selection snapshot
//! and is the only evaluator whose output can change without the candidate's
//! own data changing.

use super::super::domain::{Education, SalaryExpectation, WorkExperience};
use super::super::selection::SelectionSnapshot;
use super::super::taxonomy::{
    degree_weight, RoleCategory, SalaryBand, JUNIOR_BAND, LEADERSHIP_KEYWORDS, MID_BAND,
    MID_EXPERIENCE_THRESHOLD, PRIMARY_COUNTRY, PRIMARY_LOCATIONS, ROLE_CATEGORY_KEYWORDS,
    SECONDARY_LOCATIONS, SENIOR_BAND, SENIOR_EXPERIENCE_THRESHOLD, STARTUP_DOMAIN_SKILLS,
    STARTUP_TECH_SKILLS, TECH_SUBJECT_KEYWORDS, TERTIARY_LOCATIONS,
};
use super::config::{
    EducationPolicy, COMPOSITE_DEGREE_WEIGHT, COMPOSITE_SCHOOL_WEIGHT, COMPOSITE_SUBJECT_WEIGHT,
    DIVERSITY_TARGET_CATEGORIES, DOMAIN_SKILLS_CAP, DOMAIN_SKILLS_WEIGHT, LEADERSHIP_WEIGHT,
    STARTUP_AFFINITY_WEIGHT, TECH_SKILLS_CAP, TECH_SKILLS_WEIGHT, TENURE_BREADTH_WEIGHT,
    TENURE_TARGET_ROLES, TOP_25_SCHOOL_SCORE, TOP_50_SCHOOL_SCORE, UNRANKED_SCHOOL_SCORE,
};

/// Count reference skills for which the candidate lists a containing skill.
/// Containment runs in that direction ("react native" contains "react") so
/// over-matching is possible but a listed skill never misses its own entry.
fn matched_reference_skills(candidate_skills: &[String], reference: &[&str]) -> usize {
    let normalized: Vec<String> = candidate_skills
        .iter()
        .map(|skill| skill.to_lowercase())
        .collect();

    reference
        .iter()
        .filter(|wanted| normalized.iter().any(|skill| skill.contains(*wanted)))
        .count()
}

/// Skills factor: 70% tech-list coverage plus 30% domain-list coverage, each
/// ratio clamped before weighting so the factor stays in [0, 1] even when
/// matches exceed the cap denominator.
pub(crate) fn skills_score(skills: &[String]) -> f32 {
    if skills.is_empty() {
        return 0.0;
    }

    let tech_cap = STARTUP_TECH_SKILLS.len().min(TECH_SKILLS_CAP);
    let tech_ratio = matched_reference_skills(skills, STARTUP_TECH_SKILLS) as f32 / tech_cap as f32;

    let domain_cap = STARTUP_DOMAIN_SKILLS.len().min(DOMAIN_SKILLS_CAP);
    let domain_ratio =
        matched_reference_skills(skills, STARTUP_DOMAIN_SKILLS) as f32 / domain_cap as f32;

    tech_ratio.min(1.0) * TECH_SKILLS_WEIGHT + domain_ratio.min(1.0) * DOMAIN_SKILLS_WEIGHT
}

/// Experience factor: leadership titles (0.4) + startup affinity (0.3) +
/// tenure breadth (0.3). Breadth is a count-of-roles proxy, not elapsed time.
pub(crate) fn experience_score(experiences: &[WorkExperience]) -> f32 {
    let leadership = experiences.iter().any(|experience| {
        let role = experience.role_name.to_lowercase();
        LEADERSHIP_KEYWORDS
            .iter()
            .any(|keyword| role.contains(keyword))
    });
    let leadership_score = if leadership { LEADERSHIP_WEIGHT } else { 0.0 };

    let startup_affinity = experiences.iter().any(|experience| {
        let company = experience.company.to_lowercase();
        let role = experience.role_name.to_lowercase();
        company.contains("startup") || company.contains("tech") || role.contains("founder")
    });
    let startup_score = if startup_affinity {
        STARTUP_AFFINITY_WEIGHT
    } else {
        0.0
    };

    let breadth_ratio = (experiences.len() as f32 / TENURE_TARGET_ROLES as f32).min(1.0);

    leadership_score + startup_score + breadth_ratio * TENURE_BREADTH_WEIGHT
}

/// Work-diversity factor: distinct role categories touched, out of three. A
/// role matching several categories contributes each category once.
pub(crate) fn work_diversity_score(experiences: &[WorkExperience]) -> f32 {
    let mut touched: Vec<RoleCategory> = Vec::new();

    for experience in experiences {
        let role = experience.role_name.to_lowercase();
        for (category, keywords) in ROLE_CATEGORY_KEYWORDS {
            if keywords.iter().any(|keyword| role.contains(keyword)) && !touched.contains(category)
            {
                touched.push(*category);
            }
        }
    }

    (touched.len() as f32 / DIVERSITY_TARGET_CATEGORIES as f32).min(1.0)
}

/// Education factor. The canonical policy takes the maximum degree-level
/// weight; one strong degree dominates and unrecognized degrees contribute
/// zero without dragging the maximum down.
pub(crate) fn education_score(education: Option<&Education>, policy: EducationPolicy) -> f32 {
    let degrees = match education {
        Some(education) if !education.degrees.is_empty() => &education.degrees,
        _ => return 0.0,
    };

    match policy {
        EducationPolicy::HighestDegree => degrees
            .iter()
            .map(|degree| degree_weight(&degree.degree))
            .fold(0.0, f32::max),
        EducationPolicy::Composite => degrees
            .iter()
            .map(|degree| {
                let subject = degree.subject.to_lowercase();
                let subject_relevance = if TECH_SUBJECT_KEYWORDS
                    .iter()
                    .any(|keyword| subject.contains(keyword))
                {
                    1.0
                } else {
                    0.0
                };

                let school_tier = if degree.is_top25 {
                    TOP_25_SCHOOL_SCORE
                } else if degree.is_top50 {
                    TOP_50_SCHOOL_SCORE
                } else {
                    UNRANKED_SCHOOL_SCORE
                };

                degree_weight(&degree.degree) * COMPOSITE_DEGREE_WEIGHT
                    + subject_relevance * COMPOSITE_SUBJECT_WEIGHT
                    + school_tier * COMPOSITE_SCHOOL_WEIGHT
            })
            .fold(0.0, f32::max),
    }
}

fn salary_band(experience_count: usize) -> SalaryBand {
    if experience_count > SENIOR_EXPERIENCE_THRESHOLD {
        SENIOR_BAND
    } else if experience_count > MID_EXPERIENCE_THRESHOLD {
        MID_BAND
    } else {
        JUNIOR_BAND
    }
}

/// Extract the digits from a free-text salary figure. "no digits" means the
/// field is unusable and the factor floors to zero; it never errors.
fn parse_expected_salary(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Salary-fit factor. Asymmetric by design: below-band expectations are a
/// bargain (0.8), in-band is a perfect fit (1.0), and above-band decays
/// linearly with the overage, never below zero.
pub(crate) fn salary_fit_score(
    expectation: &SalaryExpectation,
    experiences: &[WorkExperience],
) -> f32 {
    let expected = match expectation
        .full_time
        .as_deref()
        .and_then(parse_expected_salary)
    {
        Some(expected) => expected,
        None => return 0.0,
    };

    let band = salary_band(experiences.len());

    if expected >= band.min && expected <= band.max {
        return 1.0;
    }

    if expected < band.min {
        return 0.8;
    }

    let overage = (expected - band.max) as f32 / band.max as f32;
    (1.0 - overage).max(0.0)
}

fn location_in(location: &str, tier: &[&str]) -> bool {
    tier.iter().any(|entry| *entry == location)
}

/// Location-diversity factor, the one selection-dependent evaluator. The
/// snapshot must be passed explicitly; there is no hidden global to consult.
pub(crate) fn location_score(location: Option<&str>, snapshot: &SelectionSnapshot) -> f32 {
    let location = match location.map(str::trim) {
        Some(location) if !location.is_empty() => location,
        _ => return 0.0,
    };

    // The first primary-country candidate outranks the tier table until the
    // required seat is filled.
    if !snapshot.covers_primary_country() && location == PRIMARY_COUNTRY {
        return 1.0;
    }

    if location_in(location, PRIMARY_LOCATIONS) {
        0.9
    } else if location_in(location, SECONDARY_LOCATIONS) {
        0.7
    } else if location_in(location, TERTIARY_LOCATIONS) {
        0.5
    } else {
        0.3
    }
}
