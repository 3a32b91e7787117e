use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use super::domain::{CandidateId, CandidateProfile};
use super::selection::SelectionSnapshot;
use super::taxonomy::PRIMARY_COUNTRY;

/// Sentinel returned whenever the external assessment cannot be obtained.
/// Callers treat it as ordinary text; it never aborts a ranking pass.
pub const ANALYSIS_FALLBACK: &str = "Error analyzing candidate";

/// Prompt sent to the language-model collaborator. The selection snapshot
/// only contributes the has/needs-a-US-member context line; candidate data
/// is serialized verbatim.
pub fn team_analysis_prompt(profile: &CandidateProfile, snapshot: &SelectionSnapshot) -> String {
    let coverage = if snapshot.covers_primary_country() {
        "has"
    } else {
        "needs"
    };

    let candidate_json =
        serde_json::to_string(profile).unwrap_or_else(|_| profile.name.clone());

    format!(
        "Analyze this candidate for a startup:\n\
         - Key strengths\n\
         - Potential red flags\n\
         - Team fit assessment (Note: Team needs at least one US-based member)\n\
         - Growth potential\n\
         - Location impact (timezone collaboration, visa requirements)\n\n\
         Candidate data:\n{candidate_json}\n\
         Context: Team currently {coverage} a {PRIMARY_COUNTRY}-based member."
    )
}

/// Failure modes of the external collaborator. All of them collapse to the
/// fallback sentinel at the gateway.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("analysis transport failed: {0}")]
    Transport(String),
    #[error("analysis provider rejected credentials")]
    Unauthorized,
    #[error("analysis quota exhausted")]
    QuotaExhausted,
    #[error("analysis response was empty or unreadable")]
    MalformedResponse,
}

/// Capability interface for the free-text assessment collaborator. One
/// method, one attempt; retries and timeouts belong to the gateway.
#[async_trait]
pub trait AnalysisProvider: Send + Sync {
    async fn assess(
        &self,
        profile: &CandidateProfile,
        snapshot: &SelectionSnapshot,
    ) -> Result<String, AnalysisError>;
}

/// Wraps a provider with the mandatory timeout, the fallback sentinel, and
/// an advisory per-candidate cache. Cache entries never influence scoring.
pub struct AnalysisGateway<P> {
    provider: Arc<P>,
    timeout: Duration,
    cache: Mutex<HashMap<CandidateId, String>>,
}

impl<P> AnalysisGateway<P>
where
    P: AnalysisProvider,
{
    pub fn new(provider: Arc<P>, timeout: Duration) -> Self {
        Self {
            provider,
            timeout,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Best-effort assessment. Returns cached text when present; otherwise
    /// makes a single time-bounded attempt and degrades to the sentinel on
    /// any failure, logging the cause.
    pub async fn analyze(
        &self,
        profile: &CandidateProfile,
        snapshot: &SelectionSnapshot,
    ) -> String {
        if let Some(cached) = self.cached(&profile.candidate_id) {
            return cached;
        }

        let attempt = tokio::time::timeout(self.timeout, self.provider.assess(profile, snapshot));

        match attempt.await {
            Ok(Ok(text)) => {
                let mut cache = self.cache.lock().expect("analysis cache poisoned");
                cache.insert(profile.candidate_id.clone(), text.clone());
                text
            }
            Ok(Err(error)) => {
                warn!(candidate = %profile.candidate_id.0, %error, "candidate analysis failed");
                ANALYSIS_FALLBACK.to_string()
            }
            Err(_) => {
                warn!(
                    candidate = %profile.candidate_id.0,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "candidate analysis timed out"
                );
                ANALYSIS_FALLBACK.to_string()
            }
        }
    }

    pub fn cached(&self, id: &CandidateId) -> Option<String> {
        let cache = self.cache.lock().expect("analysis cache poisoned");
        cache.get(id).cloned()
    }
}
