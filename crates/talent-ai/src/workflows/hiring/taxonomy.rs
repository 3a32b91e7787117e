//! Static reference tables backing the scoring rubric. Pure data; every
//! evaluator consumes these, none mutates them.

use serde::{Deserialize, Serialize};

/// Technologies the startup actively hires for. Matching is case-insensitive
/// substring containment, so "react" also matches "react native".
pub const STARTUP_TECH_SKILLS: &[&str] = &[
    // Frontend
    "react",
    "next js",
    "angular",
    "vue js",
    "typescript",
    "javascript",
    "html/css",
    "redux",
    "bootstrap",
    "jest",
    // Backend
    "node js",
    "express",
    "java",
    "python",
    "c#",
    "php",
    "rust",
    "django",
    "laravel",
    "spring boot",
    // Data
    "mongodb",
    "postgresql",
    "sql",
    "redis",
    "hadoop",
    "rabbitmq",
    "pandas",
    "seaborn",
    "matplotlib",
    // Cloud & DevOps
    "aws",
    "amazon web services",
    "azure",
    "google cloud platform",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "circleci",
    // AI/ML
    "tensorflow",
    "pytorch",
    "nlp",
    "machine learning",
    "deep learning",
    // Data Analysis
    "power bi",
    "tableau",
    "excel",
    "r",
    "data analysis",
    // Mobile
    "react native",
    "flutter",
    "kotlin",
    "swift",
    "ios",
];

/// Cross-cutting practices and domains valued alongside raw tech skills.
pub const STARTUP_DOMAIN_SKILLS: &[&str] = &[
    // Architecture
    "microservices",
    "rest apis",
    "graphql",
    "grpc",
    "system design",
    // Development Practices
    "agile",
    "ci/cd",
    "devops",
    "test driven development",
    // Data Engineering
    "data analysis",
    "etl",
    "web scraping",
    "data pipeline",
    // Security
    "oauth",
    "gdpr compliance",
    "security",
    // IoT & Specialized
    "iot",
    "blockchain",
    "computer vision",
];

/// Role-title keywords signalling prior leadership responsibility.
pub const LEADERSHIP_KEYWORDS: &[&str] = &["lead", "senior", "architect", "founder", "manager"];

/// Broad role families used by the work-diversity factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoleCategory {
    Technical,
    Data,
    Management,
    Product,
}

/// Keyword map classifying a role title into zero or more categories.
pub const ROLE_CATEGORY_KEYWORDS: &[(RoleCategory, &[&str])] = &[
    (
        RoleCategory::Technical,
        &["developer", "engineer", "architect", "programmer", "full stack"],
    ),
    (RoleCategory::Data, &["data scientist", "analyst", "ml", "ai"]),
    (
        RoleCategory::Management,
        &["lead", "manager", "founder", "director"],
    ),
    (
        RoleCategory::Product,
        &["product", "project manager", "scrum master"],
    ),
];

/// Inclusive annual salary range for one experience tier, in USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryBand {
    pub min: u64,
    pub max: u64,
}

pub const JUNIOR_BAND: SalaryBand = SalaryBand {
    min: 70_000,
    max: 100_000,
};
pub const MID_BAND: SalaryBand = SalaryBand {
    min: 90_000,
    max: 130_000,
};
pub const SENIOR_BAND: SalaryBand = SalaryBand {
    min: 120_000,
    max: 180_000,
};

/// Role counts above which a candidate is banded as mid or senior.
pub const SENIOR_EXPERIENCE_THRESHOLD: usize = 7;
pub const MID_EXPERIENCE_THRESHOLD: usize = 3;

/// The team must end up with at least one member from this country.
pub const PRIMARY_COUNTRY: &str = "United States";

/// Location preference tiers. Primary is the required-coverage country;
/// secondary favors timezone overlap; tertiary covers other tech hubs.
pub const PRIMARY_LOCATIONS: &[&str] = &["United States"];
pub const SECONDARY_LOCATIONS: &[&str] = &["United Kingdom", "Canada", "Australia"];
pub const TERTIARY_LOCATIONS: &[&str] = &["India", "Singapore", "Germany", "Netherlands"];

/// Degree-level weight lookup. Unrecognized degree strings weigh zero so
/// they can never pull a recognized degree's maximum down.
pub fn degree_weight(degree: &str) -> f32 {
    match degree.trim() {
        "PhD" => 1.0,
        "Master's Degree" => 0.8,
        "Bachelor's Degree" => 0.6,
        "Associate's Degree" => 0.4,
        _ => 0.0,
    }
}

/// Subject keywords treated as startup-relevant by the optional composite
/// education policy.
pub const TECH_SUBJECT_KEYWORDS: &[&str] = &[
    "computer",
    "software",
    "engineering",
    "information",
    "data",
    "math",
    "statistics",
    "science",
];
