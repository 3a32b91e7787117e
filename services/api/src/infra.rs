use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use talent_ai::config::AnalysisConfig;
use talent_ai::workflows::hiring::analysis::team_analysis_prompt;
use talent_ai::workflows::hiring::{
    AnalysisError, AnalysisProvider, CandidateFilter, CandidateId, CandidateProfile,
    CandidateRepository, RepositoryError, SelectionSnapshot,
};

const GROQ_CHAT_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
const GROQ_MODEL: &str = "mixtral-8x7b-32768";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Vec-backed candidate store. Insertion order is the query order, which
/// the ranking layer relies on for stable tie-breaking.
#[derive(Default)]
pub(crate) struct InMemoryCandidateRepository {
    profiles: Mutex<Vec<CandidateProfile>>,
}

impl CandidateRepository for InMemoryCandidateRepository {
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

/// Analysis collaborator wired from configuration: Groq when a key is
/// present, otherwise a provider that always errors so the gateway's
/// sentinel takes over.
pub(crate) enum ApiAnalysisProvider {
    Groq(GroqAnalyst),
    Disabled,
}

impl ApiAnalysisProvider {
    pub(crate) fn from_config(config: &AnalysisConfig) -> Result<Self, AnalysisError> {
        match &config.groq_api_key {
            Some(api_key) => Ok(Self::Groq(GroqAnalyst::new(api_key.clone(), config.timeout)?)),
            None => Ok(Self::Disabled),
        }
    }
}

#[async_trait]
impl AnalysisProvider for ApiAnalysisProvider {
    async fn assess(
        &self,
        profile: &CandidateProfile,
        snapshot: &SelectionSnapshot,
    ) -> Result<String, AnalysisError> {
        match self {
            ApiAnalysisProvider::Groq(analyst) => analyst.assess(profile, snapshot).await,
            ApiAnalysisProvider::Disabled => Err(AnalysisError::Unauthorized),
        }
    }
}

/// Thin client for the Groq OpenAI-compatible chat endpoint. One request,
/// no retries; the HTTP client itself carries the configured timeout.
pub(crate) struct GroqAnalyst {
    client: reqwest::Client,
    api_key: String,
}

impl GroqAnalyst {
    pub(crate) fn new(api_key: String, timeout: Duration) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| AnalysisError::Transport(err.to_string()))?;

        Ok(Self { client, api_key })
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: &'static str,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[async_trait]
impl AnalysisProvider for GroqAnalyst {
    async fn assess(
        &self,
        profile: &CandidateProfile,
        snapshot: &SelectionSnapshot,
    ) -> Result<String, AnalysisError> {
        let request = ChatRequest {
            model: GROQ_MODEL,
            temperature: 0.1,
            messages: vec![ChatMessage {
                role: "user",
                content: team_analysis_prompt(profile, snapshot),
            }],
        };

        let response = self
            .client
            .post(GROQ_CHAT_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|err| AnalysisError::Transport(err.to_string()))?;

        match response.status() {
            status if status.is_success() => {}
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                return Err(AnalysisError::Unauthorized)
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(AnalysisError::QuotaExhausted),
            status => {
                return Err(AnalysisError::Transport(format!(
                    "unexpected status {status}"
                )))
            }
        }

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|_| AnalysisError::MalformedResponse)?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AnalysisError::MalformedResponse)
    }
}
