use crate::infra::{ApiAnalysisProvider, InMemoryCandidateRepository};
use clap::Args;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use talent_ai::error::AppError;
use talent_ai::workflows::hiring::{
    CandidateFilter, CandidateService, CandidateServiceError, RankedCandidate, ScoringConfig,
    SelectionError, SELECTION_CAPACITY,
};

/// Bundled sample pool used when no submissions file is provided.
pub(crate) const SAMPLE_SUBMISSIONS: &str = include_str!("../data/sample-submissions.json");

type DemoService = CandidateService<InMemoryCandidateRepository, ApiAnalysisProvider>;

#[derive(Args, Debug, Default)]
pub(crate) struct RankArgs {
    /// JSON submissions file to rank. Defaults to the bundled sample pool.
    #[arg(long)]
    pub(crate) submissions: Option<PathBuf>,
    /// Require a case-insensitive skill substring match (repeatable).
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    /// Require an exact location match.
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Limit the leaderboard to the top N candidates.
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// JSON submissions file to demo against. Defaults to the bundled sample pool.
    #[arg(long)]
    pub(crate) submissions: Option<PathBuf>,
}

pub(crate) async fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        submissions,
        skills,
        location,
        limit,
    } = args;

    let (service, imported) = build_service(submissions)?;
    println!("Imported {imported} candidate submissions");

    let filter = CandidateFilter {
        skills: if skills.is_empty() {
            None
        } else {
            Some(skills)
        },
        location,
    };

    let ranked = service.rank(&filter, false).await?;
    let shown = limit.unwrap_or(ranked.len()).min(ranked.len());
    println!(
        "Leaderboard ({} of {} matching candidates)",
        shown,
        ranked.len()
    );
    render_leaderboard(&ranked[..shown]);

    Ok(())
}

pub(crate) async fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let (service, imported) = build_service(args.submissions)?;

    println!("Candidate scoring demo");
    println!("Imported {imported} candidate submissions");

    let ranked = service.rank(&CandidateFilter::default(), false).await?;
    println!("\nInitial leaderboard");
    render_leaderboard(&ranked);

    println!("\nSelecting the top {SELECTION_CAPACITY} candidates");
    for entry in ranked.iter().take(SELECTION_CAPACITY) {
        let view = service.select(&entry.candidate.candidate_id)?;
        println!(
            "- selected {} ({}) | team size {}",
            entry.candidate.name, view.candidate_id.0, view.team_size
        );
    }

    if let Some(overflow) = ranked.get(SELECTION_CAPACITY) {
        match service.select(&overflow.candidate.candidate_id) {
            Ok(_) => println!("- unexpectedly admitted {}", overflow.candidate.name),
            Err(CandidateServiceError::Selection(SelectionError::CapacityExceeded {
                capacity,
            })) => {
                println!(
                    "- {} rejected: team already holds {} members",
                    overflow.candidate.name, capacity
                );
            }
            Err(err) => println!("- selection unavailable: {err}"),
        }
    }

    println!("\nLeaderboard with the team selected");
    println!("(location diversity now reflects the seated team)");
    let reranked = service.rank(&CandidateFilter::default(), false).await?;
    render_leaderboard(&reranked);

    if let (Some(first), Some(overflow)) = (ranked.first(), ranked.get(SELECTION_CAPACITY)) {
        println!("\nFreeing a seat and admitting the runner-up");
        service.deselect(&first.candidate.candidate_id)?;
        println!("- deselected {}", first.candidate.name);
        let view = service.select(&overflow.candidate.candidate_id)?;
        println!(
            "- selected {} | team size {}",
            overflow.candidate.name, view.team_size
        );
        println!("Final team:");
        for member in service.selected_profiles()? {
            println!(
                "- {} ({}) from {}",
                member.name,
                member.candidate_id.0,
                member.location.as_deref().unwrap_or("unspecified")
            );
        }
    }

    Ok(())
}

fn build_service(submissions: Option<PathBuf>) -> Result<(Arc<DemoService>, usize), AppError> {
    let service = Arc::new(CandidateService::new(
        Arc::new(InMemoryCandidateRepository::default()),
        Arc::new(ApiAnalysisProvider::Disabled),
        ScoringConfig::default(),
        Duration::from_secs(8),
    ));

    let imported = match submissions {
        Some(path) => service.import(File::open(path)?)?,
        None => service.import(SAMPLE_SUBMISSIONS.as_bytes())?,
    };

    Ok((service, imported))
}

fn render_leaderboard(entries: &[RankedCandidate]) {
    for (index, entry) in entries.iter().enumerate() {
        println!(
            "{:>2}. {:<18} {:<16} total {:>6.2} | skills {:.2} exp {:.2} div {:.2} edu {:.2} sal {:.2} loc {:.2}",
            index + 1,
            entry.candidate.name,
            entry
                .candidate
                .location
                .as_deref()
                .unwrap_or("unspecified"),
            entry.scores.total,
            entry.scores.relevant_skills,
            entry.scores.work_experience,
            entry.scores.work_diversity,
            entry.scores.education,
            entry.scores.salary_fit,
            entry.scores.location_diversity,
        );
    }
}
