use std::sync::Arc;
use std::time::Duration;

use super::common::*;
use crate::workflows::hiring::analysis::{
    team_analysis_prompt, AnalysisGateway, ANALYSIS_FALLBACK,
};
use crate::workflows::hiring::selection::{SelectedMember, SelectionManager, SelectionSnapshot};

#[tokio::test]
async fn gateway_returns_provider_text_and_caches_it() {
    let gateway = AnalysisGateway::new(Arc::new(CannedAnalyst), Duration::from_millis(250));
    let profile = candidate("cand-1", "Ada Park");
    let snapshot = SelectionSnapshot::default();

    let text = gateway.analyze(&profile, &snapshot).await;
    assert_eq!(text, "Assessment for Ada Park");
    assert_eq!(
        gateway.cached(&profile.candidate_id).as_deref(),
        Some("Assessment for Ada Park")
    );
}

#[tokio::test]
async fn provider_failure_degrades_to_the_sentinel_without_caching() {
    let gateway = AnalysisGateway::new(Arc::new(FailingAnalyst), Duration::from_millis(250));
    let profile = candidate("cand-1", "Ada Park");

    let text = gateway.analyze(&profile, &SelectionSnapshot::default()).await;
    assert_eq!(text, ANALYSIS_FALLBACK);
    assert!(
        gateway.cached(&profile.candidate_id).is_none(),
        "fallback text is not worth caching"
    );
}

#[tokio::test]
async fn stalled_provider_is_cut_off_by_the_timeout() {
    let gateway = AnalysisGateway::new(Arc::new(StalledAnalyst), Duration::from_millis(20));
    let profile = candidate("cand-1", "Ada Park");

    let started = std::time::Instant::now();
    let text = gateway.analyze(&profile, &SelectionSnapshot::default()).await;
    assert_eq!(text, ANALYSIS_FALLBACK);
    assert!(
        started.elapsed() < Duration::from_secs(5),
        "timeout must bound the stalled call"
    );
}

#[test]
fn prompt_reflects_primary_country_coverage() {
    let profile = candidate("cand-1", "Ada Park");

    let empty = SelectionSnapshot::default();
    let needs = team_analysis_prompt(&profile, &empty);
    assert!(needs.contains("Team currently needs a United States-based member"));

    let manager = SelectionManager::new();
    manager
        .select(SelectedMember {
            candidate_id: crate::workflows::hiring::CandidateId("us-1".to_string()),
            location: Some("United States".to_string()),
        })
        .expect("select");
    let has = team_analysis_prompt(&profile, &manager.snapshot());
    assert!(has.contains("Team currently has a United States-based member"));
    assert!(has.contains("Ada Park"), "candidate data is embedded");
}
